use crate::core::errors::RegistryError;
use crate::core::models::user::{NewUser, User};
use crate::infrastructure::storage::Storage;
use tracing::{debug, info};

pub struct UserService<S: Storage> {
    storage: S,
}

impl<S: Storage> UserService<S> {
    pub fn new(storage: S) -> Self {
        UserService { storage }
    }

    pub async fn create_user(&self, user: NewUser) -> Result<User, RegistryError> {
        info!("Creating user with email: {}", user.email);
        let created = self.storage.create_user(user).await?;
        debug!("User created with ID: {}", created.id);
        Ok(created)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, RegistryError> {
        let users = self.storage.list_users().await?;
        debug!("Listed {} users", users.len());
        Ok(users)
    }

    /// `Ok(None)` means no user has that id; it is not an error.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, RegistryError> {
        let user = self.storage.get_user(user_id).await?;
        if user.is_none() {
            debug!("No user with ID: {}", user_id);
        }
        Ok(user)
    }

    pub async fn user_count(&self) -> Result<usize, RegistryError> {
        self.storage.user_count().await
    }
}
