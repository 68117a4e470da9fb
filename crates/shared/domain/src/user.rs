//! User domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::password::Password;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Externally assigned identifier, immutable after creation
    pub id: String,
    pub name: String,
    /// Hashed password, never plaintext
    pub password: Password,
}

impl User {
    /// Create a new user
    pub fn new(id: impl Into<String>, name: impl Into<String>, password: Password) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            password,
        }
    }

    /// Update user's name
    pub fn update_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the stored password hash
    pub fn update_password(&mut self, password: Password) {
        self.password = password;
    }
}

/// User view without the password hash (safe to print or return)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}
