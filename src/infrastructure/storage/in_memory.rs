use crate::core::errors::RegistryError;
use crate::core::models::user::{NewUser, User};
use crate::infrastructure::storage::Storage;
use crate::infrastructure::storage::ids::{IdGenerator, IdStrategy};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

struct UserTable {
    users: HashMap<String, User>,
    ids: IdGenerator,
}

/// Process-local user store. One lock covers both the map and the id source,
/// so id assignment and insertion happen as a single step.
#[derive(Clone)]
pub struct InMemoryStorage {
    table: Arc<Mutex<UserTable>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::with_id_strategy(IdStrategy::default())
    }

    pub fn with_id_strategy(strategy: IdStrategy) -> Self {
        InMemoryStorage {
            table: Arc::new(Mutex::new(UserTable {
                users: HashMap::new(),
                ids: IdGenerator::new(strategy),
            })),
        }
    }

    pub async fn id_strategy(&self) -> IdStrategy {
        self.table.lock().await.ids.strategy()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn create_user(&self, user: NewUser) -> Result<User, RegistryError> {
        let mut table = self.table.lock().await;
        let id = table.ids.next_id();
        let user = user.into_user(id);
        table.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, RegistryError> {
        let table = self.table.lock().await;
        let mut users = Vec::with_capacity(table.users.len());
        users.extend(table.users.values().cloned());
        Ok(users)
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, RegistryError> {
        let table = self.table.lock().await;
        Ok(table.users.get(user_id).cloned())
    }

    async fn user_count(&self) -> Result<usize, RegistryError> {
        Ok(self.table.lock().await.users.len())
    }
}
