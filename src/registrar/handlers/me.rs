use crate::identity::{Account, Error, Manager};
use axum::{extract::Extension, Json};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;

/// Public view of an account; never carries the password hash.
#[derive(ToSchema, Serialize, Debug, PartialEq)]
pub struct Profile {
    id: Uuid,
    username: String,
    admin: bool,
    enrolled_courses: Vec<Uuid>,
    credit_count: Option<f64>,
}

impl From<Account> for Profile {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            admin: account.is_admin,
            enrolled_courses: account.enrolled_courses,
            credit_count: account.credit_count,
        }
    }
}

#[utoipa::path(
    get,
    path= "/me",
    responses (
        (status = 200, description = "Account bound to the bearer token", body = Profile),
        (status = 401, description = "Missing, invalid or expired token", body = String, content_type = "text/plain"),
    ),
    security(("bearer" = [])),
    tag= "auth"
)]
#[instrument(skip(manager, bearer))]
pub async fn me(
    manager: Extension<Arc<Manager>>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
) -> Result<Json<Profile>, Error> {
    let Some(TypedHeader(bearer)) = bearer else {
        return Err(Error::Unauthorized);
    };

    let account = manager.authenticate(bearer.token()).await?;

    Ok(Json(Profile::from(account)))
}
