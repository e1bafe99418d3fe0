//! Credential & identity management.
//!
//! Signup hashes the password with Argon2id and relies on the store's unique
//! constraint to reject duplicate usernames. Login verifies against the stored
//! hash. Both return an HS256 token whose subject is the account id.

pub mod account;
pub mod error;
pub mod manager;
pub mod password;
pub mod store;
pub mod token;
pub mod validation;

pub use self::account::{Account, NewAccount};
pub use self::error::Error;
pub use self::manager::{AuthConfig, Manager};
pub use self::store::{AccountStore, MemoryStore, PostgresStore, StoreError};
