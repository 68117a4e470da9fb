//! User store tests over an in-memory SQLite database.

use common::{AppError, DatabaseConfig};
use domain::{
    BcryptHasher, LoginRequest, Password, PasswordHasher, RegisterRequest, UpdatePasswordRequest,
    UpdateProfileRequest, User, MIN_BCRYPT_COST,
};
use user_service_lib::build_service;
use user_service_lib::config::UserServiceConfig;
use user_service_lib::infra::{Database, Persistence, UnitOfWork};
use user_service_lib::repository::{UserRepository, UserStore};
use user_service_lib::service::UserService;

/// A single pooled connection keeps every query on the same in-memory database.
async fn setup() -> Database {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    Database::connect(&config).await.unwrap()
}

fn test_config() -> UserServiceConfig {
    UserServiceConfig {
        bcrypt_cost: MIN_BCRYPT_COST,
        ..UserServiceConfig::default()
    }
}

fn user(id: &str, name: &str) -> User {
    User::new(id, name, Password::from_hash("$2b$04$placeholderplaceholderplaceholderplaceholderpl"))
}

#[tokio::test]
async fn test_migrations_applied_on_connect() {
    let db = setup().await;

    db.ping().await.unwrap();
    let status = db.migration_status().await.unwrap();

    assert!(!status.is_empty());
    assert!(status.iter().all(|(_, applied)| *applied));
}

#[tokio::test]
async fn test_store_save_and_find() {
    let db = setup().await;
    let store = UserStore::new(db.get_connection());

    store.save(&user("u1", "Name")).await.unwrap();

    assert_eq!(store.find_by_id("u1").await.unwrap(), Some(user("u1", "Name")));
    assert_eq!(store.find_by_id("u2").await.unwrap(), None);
}

#[tokio::test]
async fn test_store_rejects_duplicate_primary_key() {
    let db = setup().await;
    let store = UserStore::new(db.get_connection());

    store.save(&user("u1", "First")).await.unwrap();
    let err = store.save(&user("u1", "Second")).await.unwrap_err();

    assert!(matches!(err, AppError::Database(_)));
    assert_eq!(store.find_by_id("u1").await.unwrap().unwrap().name, "First");
}

#[tokio::test]
async fn test_store_update_missing_row_is_not_found() {
    let db = setup().await;
    let store = UserStore::new(db.get_connection());

    let err = store.update(&user("ghost", "Name")).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_store_update_replaces_name_and_password() {
    let db = setup().await;
    let store = UserStore::new(db.get_connection());
    store.save(&user("u1", "Name")).await.unwrap();

    let changed = User::new("u1", "Renamed", Password::from_hash("$2b$04$other"));
    store.update(&changed).await.unwrap();

    assert_eq!(store.find_by_id("u1").await.unwrap(), Some(changed));
}

#[tokio::test]
async fn test_scope_commit_persists_writes() {
    let db = setup().await;
    let uow = Persistence::new(db.get_connection());

    let scope = uow.begin().await.unwrap();
    let outcome = scope.users().save(&user("u1", "Name")).await;
    scope.finish(outcome).await.unwrap();

    assert!(uow.users().find_by_id("u1").await.unwrap().is_some());
}

#[tokio::test]
async fn test_scope_rollback_discards_writes() {
    let db = setup().await;
    let uow = Persistence::new(db.get_connection());

    let scope = uow.begin().await.unwrap();
    scope.users().save(&user("u1", "Name")).await.unwrap();
    assert!(scope.users().find_by_id("u1").await.unwrap().is_some());
    let result: Result<(), _> = scope.finish(Err(AppError::validation("abort"))).await;

    assert_eq!(result.unwrap_err().to_string(), "abort");
    assert!(uow.users().find_by_id("u1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_dropped_scope_discards_writes() {
    let db = setup().await;
    let uow = Persistence::new(db.get_connection());

    {
        let scope = uow.begin().await.unwrap();
        scope.users().save(&user("u1", "Name")).await.unwrap();
    }

    assert!(uow.users().find_by_id("u1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_account_lifecycle() {
    let db = setup().await;
    let service = build_service(db.get_connection(), &test_config());
    let store = UserStore::new(db.get_connection());

    service
        .register(RegisterRequest::new("u1", "Name", "secret"))
        .await
        .unwrap();
    let stored = store.find_by_id("u1").await.unwrap().unwrap();
    assert_ne!(stored.password.as_str(), "secret");
    assert!(BcryptHasher::new().verify("secret", &stored.password));

    let login = service
        .login(LoginRequest::new("u1", "secret"))
        .await
        .unwrap();
    assert_eq!(login.user, stored);

    service
        .update_profile(UpdateProfileRequest::new("u1", "Renamed"))
        .await
        .unwrap();
    let renamed = store.find_by_id("u1").await.unwrap().unwrap();
    assert_eq!(renamed.name, "Renamed");
    assert_eq!(renamed.password, stored.password);

    service
        .update_password(UpdatePasswordRequest::new("u1", "secret", "fresh"))
        .await
        .unwrap();
    assert!(service.login(LoginRequest::new("u1", "fresh")).await.is_ok());
    let err = service
        .login(LoginRequest::new("u1", "secret"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Id or password is wrong");
}

#[tokio::test]
async fn test_duplicate_register_leaves_original() {
    let db = setup().await;
    let service = build_service(db.get_connection(), &test_config());

    service
        .register(RegisterRequest::new("u1", "First", "secret"))
        .await
        .unwrap();
    let err = service
        .register(RegisterRequest::new("u1", "Second", "other"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "User Id Already Exist");
    let login = service
        .login(LoginRequest::new("u1", "secret"))
        .await
        .unwrap();
    assert_eq!(login.user.name, "First");
}

#[tokio::test]
async fn test_update_profile_unknown_user_writes_nothing() {
    let db = setup().await;
    let service = build_service(db.get_connection(), &test_config());
    let store = UserStore::new(db.get_connection());

    let err = service
        .update_profile(UpdateProfileRequest::new("ghost", "Name"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "User Not Found");
    assert!(store.find_by_id("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn test_wrong_old_password_keeps_hash() {
    let db = setup().await;
    let service = build_service(db.get_connection(), &test_config());
    let store = UserStore::new(db.get_connection());

    service
        .register(RegisterRequest::new("u1", "Name", "secret"))
        .await
        .unwrap();
    let before = store.find_by_id("u1").await.unwrap().unwrap();

    let err = service
        .update_password(UpdatePasswordRequest::new("u1", "guess", "fresh"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Old Password is Wrong");
    assert_eq!(store.find_by_id("u1").await.unwrap().unwrap(), before);
}
