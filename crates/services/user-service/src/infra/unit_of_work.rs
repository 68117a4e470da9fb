//! Unit of Work pattern implementation.
//!
//! The Unit of Work:
//! - Hands out the repository used outside any transaction
//! - Opens transactions as explicit, owned handles (`TransactionScope`)
//! - Commits or rolls back each handle exactly once
//!
//! There is no process-wide transaction state: whoever calls `begin` owns
//! the returned scope and every repository call made through it.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction,
    IsolationLevel, TransactionTrait,
};
use std::sync::Arc;

use common::{AppError, AppResult};

use crate::repository::{UserRepository, UserStore};

/// One open transaction against the store.
///
/// Implementations must roll back if dropped without `commit` or `rollback`.
#[async_trait]
pub trait Transaction: Send + Sync {
    /// User repository bound to this transaction
    fn users(&self) -> &dyn UserRepository;

    /// Make all writes of this transaction durable
    async fn commit(self: Box<Self>) -> AppResult<()>;

    /// Discard all writes of this transaction
    async fn rollback(self: Box<Self>) -> AppResult<()>;
}

/// Unit of Work trait for dependency injection.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// User repository outside any transaction (read-only use)
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Open a new transaction
    async fn begin(&self) -> AppResult<TransactionScope>;
}

/// Owned handle to an open transaction.
///
/// Consumed by `finish`, which commits on success and rolls back on
/// error. A scope dropped before `finish` is rolled back by the
/// underlying transaction.
pub struct TransactionScope {
    txn: Box<dyn Transaction>,
}

impl TransactionScope {
    /// Wrap an open transaction
    pub fn new(txn: Box<dyn Transaction>) -> Self {
        Self { txn }
    }

    /// User repository bound to this transaction
    pub fn users(&self) -> &dyn UserRepository {
        self.txn.users()
    }

    /// Close the transaction according to `outcome`.
    ///
    /// `Ok` commits; a failing commit becomes the returned error.
    /// `Err` rolls back and returns the original error unchanged, even
    /// when the rollback itself fails.
    pub async fn finish<T>(self, outcome: AppResult<T>) -> AppResult<T> {
        match outcome {
            Ok(value) => {
                self.txn.commit().await?;
                tracing::debug!("Transaction committed");
                Ok(value)
            }
            Err(e) => {
                match self.txn.rollback().await {
                    Ok(()) => tracing::debug!("Transaction rolled back"),
                    Err(rollback_err) => {
                        tracing::error!("Transaction rollback failed: {}", rollback_err)
                    }
                }
                Err(e)
            }
        }
    }
}

/// SeaORM transaction handle.
///
/// `DatabaseTransaction` rolls back on drop, which covers scopes that
/// are never finished.
pub struct SeaTransaction {
    users: UserStore<DatabaseTransaction>,
}

impl SeaTransaction {
    fn new(txn: DatabaseTransaction) -> Self {
        Self {
            users: UserStore::new(txn),
        }
    }
}

#[async_trait]
impl Transaction for SeaTransaction {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    async fn commit(self: Box<Self>) -> AppResult<()> {
        self.users
            .into_inner()
            .commit()
            .await
            .map_err(AppError::from)
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        self.users
            .into_inner()
            .rollback()
            .await
            .map_err(AppError::from)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        Self { db, user_repo }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    async fn begin(&self) -> AppResult<TransactionScope> {
        let txn = match self.db.get_database_backend() {
            // SQLite has no per-transaction isolation settings
            DatabaseBackend::Sqlite => self.db.begin().await,
            // Use ReadCommitted for balanced consistency/performance
            _ => {
                self.db
                    .begin_with_config(
                        Some(IsolationLevel::ReadCommitted),
                        Some(AccessMode::ReadWrite),
                    )
                    .await
            }
        }
        .map_err(AppError::from)?;

        tracing::debug!("Transaction started");
        Ok(TransactionScope::new(Box::new(SeaTransaction::new(txn))))
    }
}
