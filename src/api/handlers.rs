use crate::{
    api::models::{ApiError, CreateUserRequest, ErrorResponse},
    core::{errors::RegistryError, models::user::User, services::UserService},
    infrastructure::storage::in_memory::InMemoryStorage,
};
use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;

/// Shared handler state. Built once at startup and injected into the router.
pub struct AppState {
    pub service: UserService<InMemoryStorage>,
    /// Legacy wire behavior: bare 200 on create, empty record for an unknown id.
    pub legacy_responses: bool,
}

impl AppState {
    pub fn new(storage: InMemoryStorage, legacy_responses: bool) -> Self {
        AppState {
            service: UserService::new(storage),
            legacy_responses,
        }
    }
}

pub type SharedState = Arc<AppState>;

// Define API routes
pub fn api_routes(state: SharedState) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(get_user_with_empty_id))
        .route("/users/{user_id}", get(get_user))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All stored users", body = [User]),
        (status = 405, description = "Method not allowed")
    )
)]
pub(crate) async fn list_users(State(state): State<SharedState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.service.list_users().await?;
    Ok(Json(users))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Body is not a valid user object", body = ErrorResponse)
    )
)]
pub(crate) async fn create_user(State(state): State<SharedState>, body: Bytes) -> Result<Response, ApiError> {
    let req = CreateUserRequest::from_json(&body, state.legacy_responses)?;
    let user = state.service.create_user(req.into()).await?;
    if state.legacy_responses {
        return Ok(StatusCode::OK.into_response());
    }
    Ok((StatusCode::CREATED, Json(user)).into_response())
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(
        ("user_id" = String, Path, description = "ID of the user to retrieve")
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = User),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub(crate) async fn get_user(
    State(state): State<SharedState>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    lookup_user(&state, user_id).await
}

// `/users/` carries an empty trailing segment, looked up like any other id.
async fn get_user_with_empty_id(State(state): State<SharedState>) -> Result<Json<User>, ApiError> {
    lookup_user(&state, String::new()).await
}

async fn lookup_user(state: &AppState, user_id: String) -> Result<Json<User>, ApiError> {
    match state.service.get_user(&user_id).await? {
        Some(user) => Ok(Json(user)),
        None if state.legacy_responses => Ok(Json(User::default())),
        None => Err(RegistryError::UserNotFound(user_id).into()),
    }
}
