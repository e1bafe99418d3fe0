use crate::identity::{Error, Manager};
use axum::{extract::Extension, Json};
use secrecy::SecretString;
use serde::Deserialize;
use std::{fmt, sync::Arc};
use tracing::{debug, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize)]
pub struct Signup {
    username: String,
    password: String,
    admin: Option<bool>,
}

impl fmt::Debug for Signup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signup")
            .field("username", &self.username)
            .field("password", &"***")
            .field("admin", &self.admin)
            .finish()
    }
}

#[utoipa::path(
    post,
    path= "/signup",
    request_body = Signup,
    responses (
        (status = 200, description = "Account created, returns a signed token", body = String, content_type = "application/json"),
        (status = 400, description = "Missing or malformed body", body = String, content_type = "text/plain"),
        (status = 409, description = "Username already exists", body = String, content_type = "text/plain"),
    ),
    tag= "auth"
)]
#[instrument(skip(manager, payload))]
pub async fn signup(
    manager: Extension<Arc<Manager>>,
    payload: Option<Json<Signup>>,
) -> Result<Json<String>, Error> {
    let Some(Json(request)) = payload else {
        return Err(Error::BadRequest("Missing payload"));
    };

    debug!("signup: {:?}", request);

    let token = manager
        .signup(
            &request.username,
            SecretString::from(request.password),
            request.admin.unwrap_or(false),
        )
        .await?;

    Ok(Json(token))
}
