use super::store::StoreError;
use thiserror::Error;

/// Failures surfaced by signup, login and token authentication.
///
/// `Unauthorized` is deliberately the same for unknown usernames and wrong
/// passwords.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    BadRequest(&'static str),
    #[error("account already exists")]
    Conflict,
    #[error("unauthorized")]
    Unauthorized,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict => Self::Conflict,
            StoreError::Backend(err) => Self::Internal(err),
        }
    }
}
