//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Whether calls run inside a transaction depends on where the
/// repository came from: `UnitOfWork::users` or `TransactionScope::users`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// Insert a new user. The caller guarantees the id is not taken.
    async fn save(&self, user: &User) -> AppResult<()>;

    /// Overwrite name and password of an existing user.
    /// Fails with `AppError::NotFound` when no row has the user's id.
    async fn update(&self, user: &User) -> AppResult<()>;
}

/// SeaORM implementation of UserRepository.
///
/// Generic over the connection so the same code serves the pooled
/// connection and an open `DatabaseTransaction`.
pub struct UserStore<C = DatabaseConnection> {
    db: C,
}

impl<C> UserStore<C> {
    /// Create new repository instance
    pub fn new(db: C) -> Self {
        Self { db }
    }

    /// Give back the underlying connection or transaction
    pub fn into_inner(self) -> C {
        self.db
    }
}

#[async_trait]
impl<C> UserRepository for UserStore<C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        let active_model = ActiveModel {
            id: Set(user.id.clone()),
            name: Set(user.name.clone()),
            password: Set(user.password.as_str().to_string()),
        };

        active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        let changes = ActiveModel {
            name: Set(user.name.clone()),
            password: Set(user.password.as_str().to_string()),
            ..Default::default()
        };

        let result = UserEntity::update_many()
            .set(changes)
            .filter(user::Column::Id.eq(user.id.as_str()))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
