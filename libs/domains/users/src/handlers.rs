//! HTTP handlers for Users API

use axum::{Json, Router, extract::rejection::JsonRejection, routing::get};
use axum_helpers::{
    AppError,
    errors::responses::{BadRequestJsonResponse, InternalServerErrorResponse},
};
use tracing::debug;
use utoipa::OpenApi;

use crate::models::{SampleUsers, User};

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(create_user, list_users),
    components(
        schemas(User, SampleUsers),
        responses(BadRequestJsonResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Users", description = "User management")
    )
)]
pub struct ApiDoc;

/// Create the users router
pub fn router() -> Router {
    Router::new().route("/", get(list_users).post(create_user))
}

/// Create a new user
///
/// The submitted user is echoed back; nothing is stored.
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = User,
    responses(
        (status = 200, description = "A user schema", body = User),
        (status = 400, response = BadRequestJsonResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user(payload: Result<Json<User>, JsonRejection>) -> Result<Json<User>, AppError> {
    let Json(user) = payload?;
    debug!(has_name = user.name.is_some(), has_email = user.email.is_some(), "Echoing user");
    Ok(Json(user))
}

/// List the sample users
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    responses(
        (status = 200, description = "An users object", body = SampleUsers)
    )
)]
async fn list_users() -> Json<SampleUsers> {
    Json(SampleUsers::default())
}
