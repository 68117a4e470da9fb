//! Request and response value types for the account operations.
//!
//! Every request field is required. A field missing from deserialized
//! input defaults to the empty string, which counts as blank.

use serde::Deserialize;

use crate::constants::{
    MSG_LOGIN_BLANK, MSG_REGISTER_BLANK, MSG_UPDATE_PASSWORD_BLANK, MSG_UPDATE_PROFILE_BLANK,
};
use crate::error::{DomainError, DomainResult};
use crate::user::User;

/// Characters stripped by the blank check: space, tab, newline, carriage
/// return, NUL and vertical tab. Other Unicode spaces count as content.
fn is_trimmed(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

/// True when the value is empty after trimming surrounding whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim_matches(is_trimmed).is_empty()
}

/// Fail with `message` if any of `fields` is blank.
fn require(fields: &[&str], message: &str) -> DomainResult<()> {
    if fields.iter().any(|field| is_blank(field)) {
        return Err(DomainError::validation(message));
    }
    Ok(())
}

// =============================================================================
// Register
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub id: String,
    pub name: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn new(id: impl Into<String>, name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        require(
            &[self.id.as_str(), self.name.as_str(), self.password.as_str()],
            MSG_REGISTER_BLANK,
        )
    }
}

#[derive(Debug, Clone)]
pub struct RegisterResponse {
    pub user: User,
}

// =============================================================================
// Login
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub id: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        require(&[self.id.as_str(), self.password.as_str()], MSG_LOGIN_BLANK)
    }
}

#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub user: User,
}

// =============================================================================
// Update profile
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdateProfileRequest {
    pub id: String,
    pub name: String,
}

impl UpdateProfileRequest {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        require(&[self.id.as_str(), self.name.as_str()], MSG_UPDATE_PROFILE_BLANK)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateProfileResponse {
    pub user: User,
}

// =============================================================================
// Update password
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpdatePasswordRequest {
    pub id: String,
    pub old_password: String,
    pub new_password: String,
}

impl UpdatePasswordRequest {
    pub fn new(
        id: impl Into<String>,
        old_password: impl Into<String>,
        new_password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            old_password: old_password.into(),
            new_password: new_password.into(),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        require(
            &[
                self.id.as_str(),
                self.old_password.as_str(),
                self.new_password.as_str(),
            ],
            MSG_UPDATE_PASSWORD_BLANK,
        )
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePasswordResponse {
    pub user: User,
}
