use axum::{Json, Router, routing::get};
use utoipa::OpenApi;

use crate::{
    api::models::{CreateUserRequest, ErrorResponse},
    core::models::user::User,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::list_users,
        super::handlers::create_user,
        super::handlers::get_user
    ),
    components(schemas(CreateUserRequest, ErrorResponse, User)),
    info(
        title = "User Registry API",
        description = "In-memory user registry",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn openapi_routes() -> Router {
    Router::new().route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}
