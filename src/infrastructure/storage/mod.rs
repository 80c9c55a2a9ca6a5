use crate::core::errors::RegistryError;
use crate::core::models::user::{NewUser, User};
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Assigns a fresh id, stores the record and returns it.
    async fn create_user(&self, user: NewUser) -> Result<User, RegistryError>;
    /// Snapshot of every stored user, in no particular order.
    async fn list_users(&self) -> Result<Vec<User>, RegistryError>;
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, RegistryError>;
    async fn user_count(&self) -> Result<usize, RegistryError>;
}

pub mod ids;
pub mod in_memory;
