
use crate::api::{self, AppState};
use crate::core::models::user::NewUser;
use crate::core::services::UserService;
use crate::infrastructure::storage::in_memory::InMemoryStorage;
use axum::Router;
use std::sync::Arc;

pub fn create_test_service() -> UserService<InMemoryStorage> {
    UserService::new(InMemoryStorage::new())
}

/// Router plus a handle on the state behind it, so tests can inspect the store.
pub fn create_test_app(legacy_responses: bool) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(InMemoryStorage::new(), legacy_responses));
    (api::app(state.clone()), state)
}

pub fn new_user(name: &str, email: &str, password: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}
