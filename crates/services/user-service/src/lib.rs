//! User Service Library
//!
//! Account registration, login, profile and password changes over a
//! transactional SQL store. The binary in `main.rs` exposes migrations and
//! the four account operations on the command line.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::info;

use common::AppResult;
use domain::{
    BcryptHasher, LoginRequest, RegisterRequest, UpdatePasswordRequest, UpdateProfileRequest,
    UserProfile,
};

use crate::config::UserServiceConfig;
use crate::infra::{Database, Persistence};
use crate::service::{UserManager, UserService};

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// One account operation requested from the command line.
#[derive(Debug, Clone)]
pub enum AccountCommand {
    Register(RegisterRequest),
    Login(LoginRequest),
    UpdateProfile(UpdateProfileRequest),
    UpdatePassword(UpdatePasswordRequest),
}

/// Wire the user service over an open database connection.
pub fn build_service(db: DatabaseConnection, config: &UserServiceConfig) -> UserManager<Persistence> {
    let uow = Arc::new(Persistence::new(db));
    let hasher = Arc::new(BcryptHasher::with_cost(config.bcrypt_cost));
    UserManager::new(uow, hasher)
}

/// Run one account command against a service, returning the hash-free view
/// of the resulting user.
pub async fn execute(service: &dyn UserService, command: AccountCommand) -> AppResult<UserProfile> {
    let user = match command {
        AccountCommand::Register(request) => service.register(request).await?.user,
        AccountCommand::Login(request) => service.login(request).await?.user,
        AccountCommand::UpdateProfile(request) => service.update_profile(request).await?.user,
        AccountCommand::UpdatePassword(request) => service.update_password(request).await?.user,
    };

    Ok(UserProfile::from(user))
}

/// Connect (applying pending migrations) and run one account command.
pub async fn run_account_command(command: AccountCommand) -> AppResult<UserProfile> {
    let config = UserServiceConfig::from_env();
    let db = Database::connect(&config.database).await?;

    let service = build_service(db.get_connection(), &config);
    execute(&service, command).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = UserServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}
