use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::RegistryError;
use crate::core::models::user::NewUser;

// Missing fields decode as empty strings. Unknown fields, `id` included, are dropped.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreateUserRequest {
    /// Decodes a create body. A bare `null` is an empty request only when `allow_null` is set.
    pub fn from_json(body: &[u8], allow_null: bool) -> Result<Self, RegistryError> {
        let req: Option<Self> =
            serde_json::from_slice(body).map_err(|e| RegistryError::MalformedBody(e.to_string()))?;
        match req {
            Some(req) => Ok(req),
            None if allow_null => Ok(Self::default()),
            None => Err(RegistryError::MalformedBody(
                "invalid type: null, expected a user object".to_string(),
            )),
        }
    }
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            name: req.name,
            email: req.email,
            password: req.password,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for RegistryError to implement IntoResponse
pub struct ApiError(pub RegistryError);

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            RegistryError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            RegistryError::UserNotFound(_) => StatusCode::NOT_FOUND,
            RegistryError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }
        (status, Json(ErrorResponse { error: self.0.to_string() })).into_response()
    }
}
