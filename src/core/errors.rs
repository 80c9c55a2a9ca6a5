use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum RegistryError {
    /// Request body could not be decoded as a user
    #[error("{0}")]
    MalformedBody(String),

    /// No user stored under the given id
    #[error("User {0} not found")]
    UserNotFound(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}
