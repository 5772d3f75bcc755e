use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::null_as_default;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    #[default]
    HR,
}

/// A login account. Stored with its password; never serialized to clients
/// directly, see [`UserView`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: Role,
}

impl User {
    pub fn from_draft(id: u64, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            username: draft.username,
            password: draft.password,
            role: draft.role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Public projection of a [`User`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserView {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub role: Role,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            username: user.username.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserDraft {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub password: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: Role,
}

impl UserDraft {
    pub fn validated(self) -> Result<Self, AppError> {
        let draft = Self {
            name: self.name.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password.trim().to_string(),
            role: self.role,
        };
        if draft.name.is_empty() || draft.username.is_empty() || draft.password.is_empty() {
            return Err(AppError::Validation(
                "Name, username and password are required.".to_string(),
            ));
        }
        Ok(draft)
    }
}
