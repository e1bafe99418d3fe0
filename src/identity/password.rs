//! Argon2id password hashing.

use anyhow::{anyhow, Result};
use argon2::{
    password_hash::SaltString, Algorithm, Argon2, Params, PasswordHash, PasswordHasher,
    PasswordVerifier, Version,
};
use rand::rngs::OsRng;
use std::fmt;

/// One-way, salted password hasher producing PHC strings.
#[derive(Clone)]
pub struct Hasher {
    argon2: Argon2<'static>,
    dummy_hash: String,
}

impl Hasher {
    /// Hasher with the default Argon2id parameters.
    ///
    /// # Errors
    /// Returns an error if the placeholder hash cannot be computed.
    pub fn new() -> Result<Self> {
        Self::with_params(Params::default())
    }

    /// # Errors
    /// Returns an error if the placeholder hash cannot be computed.
    pub fn with_params(params: Params) -> Result<Self> {
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let dummy_hash = hash_with(&argon2, &SaltString::generate(&mut OsRng).to_string())?;
        Ok(Self { argon2, dummy_hash })
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Errors
    /// Returns an error if hashing fails.
    pub fn hash(&self, plaintext: &str) -> Result<String> {
        hash_with(&self.argon2, plaintext)
    }

    /// Compare a plaintext password against a stored PHC hash.
    ///
    /// # Errors
    /// Returns an error if the stored hash cannot be parsed.
    pub fn verify(&self, plaintext: &str, stored_hash: &str) -> Result<bool> {
        let parsed = PasswordHash::new(stored_hash).map_err(|_| anyhow!("invalid password hash"))?;
        Ok(self
            .argon2
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok())
    }

    /// Run a verification that always fails, so unknown usernames cost the
    /// same as wrong passwords.
    pub fn verify_dummy(&self, plaintext: &str) {
        let _ = self.verify(plaintext, &self.dummy_hash);
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("algorithm", &"argon2id")
            .finish_non_exhaustive()
    }
}

fn hash_with(argon2: &Argon2<'_>, plaintext: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|_| anyhow!("failed to hash password"))?
        .to_string();
    Ok(hash)
}
