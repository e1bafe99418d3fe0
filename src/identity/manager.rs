use super::{
    account::{Account, NewAccount},
    password::Hasher,
    store::AccountStore,
    token::TokenSigner,
    validation::{validate_credentials, MAX_PASSWORD_BYTES},
    Error,
};
use anyhow::{anyhow, Context};
use secrecy::{ExposeSecret, SecretString};
use std::{fmt, sync::Arc};
use tracing::{debug, info, instrument};
use uuid::Uuid;

pub const DEFAULT_TOKEN_TTL_SECONDS: u64 = 86_400;

#[derive(Clone)]
pub struct AuthConfig {
    token_secret: SecretString,
    token_ttl_seconds: u64,
}

impl AuthConfig {
    #[must_use]
    pub fn new(token_secret: SecretString) -> Self {
        Self {
            token_secret,
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
        }
    }

    #[must_use]
    pub fn with_token_ttl_seconds(mut self, seconds: u64) -> Self {
        self.token_ttl_seconds = seconds;
        self
    }

    #[must_use]
    pub fn token_ttl_seconds(&self) -> u64 {
        self.token_ttl_seconds
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"***")
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .finish()
    }
}

/// Credential & identity manager: signup, login and token issuance over an
/// injected account store.
pub struct Manager {
    store: Arc<dyn AccountStore>,
    hasher: Arc<Hasher>,
    signer: TokenSigner,
}

impl Manager {
    /// # Errors
    /// Returns an error if the signing secret is rejected or the hasher cannot be initialized.
    pub fn new(store: Arc<dyn AccountStore>, config: &AuthConfig) -> anyhow::Result<Self> {
        let signer = TokenSigner::new(&config.token_secret, config.token_ttl_seconds)
            .context("invalid token configuration")?;
        let hasher = Hasher::new().context("failed to initialize password hasher")?;

        Ok(Self {
            store,
            hasher: Arc::new(hasher),
            signer,
        })
    }

    #[must_use]
    pub fn with_hasher(mut self, hasher: Hasher) -> Self {
        self.hasher = Arc::new(hasher);
        self
    }

    #[must_use]
    pub fn store(&self) -> &Arc<dyn AccountStore> {
        &self.store
    }

    #[must_use]
    pub fn signer(&self) -> &TokenSigner {
        &self.signer
    }

    /// Create an account and return a token for it.
    ///
    /// # Errors
    /// `BadRequest` for invalid input, `Conflict` if the username is taken,
    /// `Internal` if hashing, storage or signing fails.
    #[instrument(skip(self, password))]
    pub async fn signup(
        &self,
        username: &str,
        password: SecretString,
        is_admin: bool,
    ) -> Result<String, Error> {
        validate_credentials(username, password.expose_secret())?;

        let hasher = Arc::clone(&self.hasher);
        let password_hash =
            tokio::task::spawn_blocking(move || hasher.hash(password.expose_secret()))
                .await
                .map_err(|e| anyhow!("password hashing task failed: {e}"))??;

        let account = self
            .store
            .insert(NewAccount {
                username: username.to_string(),
                password_hash,
                is_admin,
            })
            .await
            .map_err(|err| {
                debug!("Signup rejected: {err}");
                Error::from(err)
            })?;

        info!(account_id = %account.id, "Account created");

        self.issue_token(&account)
    }

    /// Verify credentials and return a token.
    ///
    /// # Errors
    /// `BadRequest` for missing credentials, `Unauthorized` for an unknown
    /// username or wrong password, `Internal` otherwise.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: SecretString) -> Result<String, Error> {
        if username.is_empty() || password.expose_secret().is_empty() {
            return Err(Error::BadRequest("Missing credentials"));
        }

        if password.expose_secret().len() > MAX_PASSWORD_BYTES {
            return Err(Error::BadRequest("Invalid password"));
        }

        let account = self.store.find_by_username(username).await?;

        let hasher = Arc::clone(&self.hasher);
        let stored_hash = account.as_ref().map(|a| a.password_hash.clone());
        let valid = tokio::task::spawn_blocking(move || match stored_hash {
            Some(hash) => hasher.verify(password.expose_secret(), &hash),
            None => {
                hasher.verify_dummy(password.expose_secret());
                Ok(false)
            }
        })
        .await
        .map_err(|e| anyhow!("password verification task failed: {e}"))??;

        match account {
            Some(account) if valid => {
                debug!(account_id = %account.id, "Login successful");
                self.issue_token(&account)
            }
            _ => {
                debug!("Unauthorized");
                Err(Error::Unauthorized)
            }
        }
    }

    /// Issue a signed token bound to the account.
    ///
    /// # Errors
    /// `Internal` if signing fails.
    pub fn issue_token(&self, account: &Account) -> Result<String, Error> {
        Ok(self.signer.sign(account.id, account.is_admin)?)
    }

    /// Resolve a bearer token to its account.
    ///
    /// # Errors
    /// `Unauthorized` if the token is invalid, expired, or names no account.
    pub async fn authenticate(&self, token: &str) -> Result<Account, Error> {
        let claims = self.signer.verify(token).map_err(|e| {
            debug!("Token rejected: {e:#}");
            Error::Unauthorized
        })?;

        let id = Uuid::parse_str(&claims.sub).map_err(|_| Error::Unauthorized)?;

        self.store
            .find_by_id(id)
            .await?
            .ok_or(Error::Unauthorized)
    }
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("hasher", &self.hasher)
            .field("signer", &self.signer)
            .finish_non_exhaustive()
    }
}
