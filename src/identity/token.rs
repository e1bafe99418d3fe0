//! Signed account tokens (HS256 JWT).

use anyhow::{anyhow, Context, Result};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::{fmt, time::SystemTime};
use uuid::Uuid;

pub const MIN_SECRET_BYTES: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account id.
    pub sub: String,
    pub adm: bool,
    pub iat: u64,
    pub exp: u64,
}

#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_seconds: u64,
}

impl TokenSigner {
    /// # Errors
    /// Returns an error if the secret is shorter than [`MIN_SECRET_BYTES`] or the TTL is zero.
    pub fn new(secret: &SecretString, ttl_seconds: u64) -> Result<Self> {
        let secret = secret.expose_secret().as_bytes();
        if secret.len() < MIN_SECRET_BYTES {
            return Err(anyhow!(
                "token secret must be at least {MIN_SECRET_BYTES} bytes"
            ));
        }
        if ttl_seconds == 0 {
            return Err(anyhow!("token TTL must be greater than zero"));
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
            ttl_seconds,
        })
    }

    #[must_use]
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Issue a token bound to the account id.
    ///
    /// # Errors
    /// Returns an error if encoding fails.
    pub fn sign(&self, account_id: Uuid, is_admin: bool) -> Result<String> {
        let iat = now_unix_seconds();
        self.sign_claims(&Claims {
            sub: account_id.to_string(),
            adm: is_admin,
            iat,
            exp: iat.saturating_add(self.ttl_seconds),
        })
    }

    fn sign_claims(&self, claims: &Claims) -> Result<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .context("failed to sign token")
    }

    /// Check signature and expiry, returning the claims.
    ///
    /// # Errors
    /// Returns an error if the token is malformed, forged or expired.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .context("failed to verify token")
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("secret", &"***")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn secret(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    fn signer() -> TokenSigner {
        TokenSigner::new(&secret("0123456789abcdef0123456789abcdef"), 3600).unwrap()
    }

    #[test]
    fn rejects_short_secret() {
        let err = TokenSigner::new(&secret("DEV"), 3600).unwrap_err();
        assert!(err.to_string().contains("at least 32 bytes"));
    }

    #[test]
    fn rejects_zero_ttl() {
        assert!(TokenSigner::new(&secret("0123456789abcdef0123456789abcdef"), 0).is_err());
    }

    #[test]
    fn sign_then_verify_carries_identity() {
        let signer = signer();
        let id = Uuid::new_v4();
        let token = signer.sign(id, true).unwrap();

        let claims = signer.verify(&token).unwrap();
        assert_eq!(claims.sub, id.to_string());
        assert!(claims.adm);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn verify_rejects_token_from_other_secret() {
        let other =
            TokenSigner::new(&secret("ffffffffffffffffffffffffffffffff"), 3600).unwrap();
        let token = other.sign(Uuid::new_v4(), false).unwrap();
        assert!(signer().verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_expired_token() {
        let signer = signer();
        let now = now_unix_seconds();
        let token = signer
            .sign_claims(&Claims {
                sub: Uuid::new_v4().to_string(),
                adm: false,
                iat: now - 7200,
                exp: now - 3600,
            })
            .unwrap();
        assert!(signer.verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_garbage() {
        assert!(signer().verify("not.a.token").is_err());
    }

    #[test]
    fn debug_hides_secret() {
        let rendered = format!("{:?}", signer());
        assert!(!rendered.contains("0123456789abcdef"));
    }
}
