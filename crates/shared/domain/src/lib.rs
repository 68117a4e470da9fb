//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the user entity, password hashing, and the validated request/response
//! types of the account operations.

pub mod constants;
pub mod error;
pub mod model;
pub mod password;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use model::{
    is_blank, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    UpdatePasswordRequest, UpdatePasswordResponse, UpdateProfileRequest, UpdateProfileResponse,
};
pub use password::{BcryptHasher, Password, PasswordHasher};
pub use user::{User, UserProfile};
