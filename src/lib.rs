pub mod api;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::core::errors::RegistryError;
pub use crate::core::models::user::{NewUser, User};
pub use crate::core::services::UserService;
pub use crate::infrastructure::storage::Storage;
pub use crate::infrastructure::storage::ids::IdStrategy;
pub use crate::infrastructure::storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests;
