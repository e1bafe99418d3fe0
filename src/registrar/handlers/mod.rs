pub mod health;
pub use self::health::health;

pub mod signup;
pub use self::signup::signup;

pub mod login;
pub use self::login::login;

pub mod me;
pub use self::me::me;

#[cfg(test)]
mod tests;

// common functions for the handlers
use crate::identity::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

/// Body returned with `409 Conflict` on duplicate signup.
pub const CONFLICT_BODY: &str = "ConflictError";

/// Map an identity error to its HTTP status and body.
///
/// Internal failures get a generic body; the cause is only logged.
#[must_use]
pub fn error_response(err: &Error) -> (StatusCode, &'static str) {
    match err {
        Error::BadRequest(message) => (StatusCode::BAD_REQUEST, *message),
        Error::Conflict => (StatusCode::CONFLICT, CONFLICT_BODY),
        Error::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
        Error::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if let Self::Internal(err) = &self {
            error!("Internal error: {err:#}");
        }

        error_response(&self).into_response()
    }
}
