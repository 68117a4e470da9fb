//! User service - Account registration, login and profile changes.
//!
//! Each mutating operation is: validate, begin, read one user, check a
//! business rule, write one user, commit. Any failure after `begin`
//! rolls the transaction back before the error reaches the caller.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{
    LoginRequest, LoginResponse, PasswordHasher, RegisterRequest, RegisterResponse,
    UpdatePasswordRequest, UpdatePasswordResponse, UpdateProfileRequest, UpdateProfileResponse,
    User, MSG_OLD_PASSWORD_WRONG, MSG_USER_ID_EXISTS, MSG_USER_NOT_FOUND, MSG_WRONG_CREDENTIALS,
};

use crate::infra::UnitOfWork;
use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user with a hashed password
    async fn register(&self, request: RegisterRequest) -> AppResult<RegisterResponse>;

    /// Check credentials and return the user
    async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse>;

    /// Change the user's display name
    async fn update_profile(&self, request: UpdateProfileRequest)
        -> AppResult<UpdateProfileResponse>;

    /// Replace the user's password after checking the current one
    async fn update_password(
        &self,
        request: UpdatePasswordRequest,
    ) -> AppResult<UpdatePasswordResponse>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
    hasher: Arc<dyn PasswordHasher>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance
    pub fn new(uow: Arc<U>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { uow, hasher }
    }

    async fn create_user(
        &self,
        users: &dyn UserRepository,
        request: RegisterRequest,
    ) -> AppResult<User> {
        if users.find_by_id(&request.id).await?.is_some() {
            return Err(AppError::validation(MSG_USER_ID_EXISTS));
        }

        let password = self.hasher.hash(&request.password)?;
        let user = User::new(request.id, request.name, password);
        users.save(&user).await?;

        Ok(user)
    }

    async fn rename_user(
        &self,
        users: &dyn UserRepository,
        request: UpdateProfileRequest,
    ) -> AppResult<User> {
        let mut user = users
            .find_by_id(&request.id)
            .await?
            .ok_or_validation(MSG_USER_NOT_FOUND)?;

        user.update_name(request.name);
        users.update(&user).await?;

        Ok(user)
    }

    async fn change_password(
        &self,
        users: &dyn UserRepository,
        request: UpdatePasswordRequest,
    ) -> AppResult<User> {
        let mut user = users
            .find_by_id(&request.id)
            .await?
            .ok_or_validation(MSG_USER_NOT_FOUND)?;

        if !self.hasher.verify(&request.old_password, &user.password) {
            return Err(AppError::validation(MSG_OLD_PASSWORD_WRONG));
        }

        user.update_password(self.hasher.hash(&request.new_password)?);
        users.update(&user).await?;

        Ok(user)
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn register(&self, request: RegisterRequest) -> AppResult<RegisterResponse> {
        request.validate()?;

        let scope = self.uow.begin().await?;
        let outcome = self.create_user(scope.users(), request).await;
        let user = scope.finish(outcome).await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(RegisterResponse { user })
    }

    async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request.validate()?;

        // Unknown id and wrong password must be indistinguishable
        let user = self
            .uow
            .users()
            .find_by_id(&request.id)
            .await?
            .ok_or_validation(MSG_WRONG_CREDENTIALS)?;

        if !self.hasher.verify(&request.password, &user.password) {
            return Err(AppError::validation(MSG_WRONG_CREDENTIALS));
        }

        tracing::debug!(user_id = %user.id, "User logged in");
        Ok(LoginResponse { user })
    }

    async fn update_profile(
        &self,
        request: UpdateProfileRequest,
    ) -> AppResult<UpdateProfileResponse> {
        request.validate()?;

        let scope = self.uow.begin().await?;
        let outcome = self.rename_user(scope.users(), request).await;
        let user = scope.finish(outcome).await?;

        tracing::info!(user_id = %user.id, "User profile updated");
        Ok(UpdateProfileResponse { user })
    }

    async fn update_password(
        &self,
        request: UpdatePasswordRequest,
    ) -> AppResult<UpdatePasswordResponse> {
        request.validate()?;

        let scope = self.uow.begin().await?;
        let outcome = self.change_password(scope.users(), request).await;
        let user = scope.finish(outcome).await?;

        tracing::info!(user_id = %user.id, "User password updated");
        Ok(UpdatePasswordResponse { user })
    }
}
