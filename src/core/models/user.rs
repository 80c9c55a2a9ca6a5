use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored user record.
///
/// Field order is the wire order: `name`, `id`, `email`, `password`.
/// `Default` is the all-empty record returned for unknown ids in legacy mode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub name: String,
    pub id: String,
    pub email: String,
    pub password: String, // stored as given
}

/// Client-supplied fields of a user. Carries no id; the store assigns one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn into_user(self, id: String) -> User {
        User {
            name: self.name,
            id,
            email: self.email,
            password: self.password,
        }
    }
}
