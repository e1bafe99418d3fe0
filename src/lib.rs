//! # Registrar (Student Accounts)
//!
//! `registrar` is the account service behind a student course registration
//! system. It owns credential storage and hands out signed tokens that the
//! rest of the system uses to identify a student.
//!
//! ## Accounts
//!
//! An account holds a unique username, an Argon2id password hash, an admin flag,
//! the courses the student is enrolled in and an optional credit count.
//! Usernames are unique at the storage layer: two concurrent signups for the same
//! name resolve to exactly one account and one `409 Conflict`.
//!
//! ## Tokens
//!
//! Signup and login both return an HS256 JWT carrying the account id (`sub`)
//! and the admin flag (`adm`). Tokens expire after a configurable TTL and are
//! verified offline with the same shared secret.
//!
//! ## HTTP
//!
//! - `POST /signup` JSON body `{username, password, admin?}`
//! - `GET /login` with HTTP Basic credentials
//! - `GET /me` with a Bearer token
//! - `GET /health`

pub mod cli;
pub mod identity;
pub mod registrar;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
