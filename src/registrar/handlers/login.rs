use crate::identity::{Error, Manager};
use axum::{extract::Extension, Json};
use axum_extra::{
    headers::{authorization::Basic, Authorization},
    TypedHeader,
};
use secrecy::SecretString;
use std::sync::Arc;
use tracing::{debug, instrument};

#[utoipa::path(
    get,
    path= "/login",
    responses (
        (status = 200, description = "Login successful, returns a signed token", body = String, content_type = "application/json"),
        (status = 400, description = "No credentials supplied", body = String, content_type = "text/plain"),
        (status = 401, description = "Unauthorized", body = String, content_type = "text/plain"),
    ),
    security(("basic" = [])),
    tag= "auth"
)]
#[instrument(skip(manager, credentials))]
pub async fn login(
    manager: Extension<Arc<Manager>>,
    credentials: Option<TypedHeader<Authorization<Basic>>>,
) -> Result<Json<String>, Error> {
    let Some(TypedHeader(credentials)) = credentials else {
        debug!("Missing basic credentials");

        return Err(Error::BadRequest("Missing credentials"));
    };

    let token = manager
        .login(
            credentials.username(),
            SecretString::from(credentials.password().to_string()),
        )
        .await?;

    Ok(Json(token))
}
