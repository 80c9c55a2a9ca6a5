pub mod handlers;
pub mod models;
pub mod openapi;

use axum::{Router, routing::get};

pub use handlers::{AppState, SharedState};

/// Full application router: health check, user routes, OpenAPI document.
pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/", get(|| async { "OK" }))
        .merge(handlers::api_routes(state))
        .merge(openapi::openapi_routes())
}
