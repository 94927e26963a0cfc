//! User repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{next_user_id, UpdateUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every operation maps to a single statement against the store; the
/// store's own statement atomicity is the only transactional guarantee.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// List all users in store-defined order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Insert a new user with a server-generated id, returning the id
    async fn create(&self, name: String, password: String) -> AppResult<String>;

    /// Write exactly the supplied non-empty fields; an empty patch
    /// executes no statement and returns the id unchanged. A patch
    /// against an absent id is a silent no-op.
    async fn update(&self, id: &str, patch: UpdateUser) -> AppResult<String>;

    /// Delete a user by id; an absent id is not an error.
    async fn delete(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, name: String, password: String) -> AppResult<String> {
        let id = next_user_id();
        let active_model = ActiveModel {
            id: Set(id.clone()),
            name: Set(name),
            password: Set(password),
        };

        // A primary-key collision surfaces as a store error; it is not retried.
        active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(id)
    }

    async fn update(&self, id: &str, patch: UpdateUser) -> AppResult<String> {
        // Nothing supplied: executing an UPDATE with an empty SET clause
        // would be malformed, so skip the store entirely.
        if patch.is_empty() {
            return Ok(id.to_string());
        }

        let mut stmt = UserEntity::update_many().filter(user::Column::Id.eq(id));
        if let Some(name) = patch.name() {
            stmt = stmt.col_expr(user::Column::Name, Expr::value(name));
        }
        if let Some(password) = patch.password() {
            stmt = stmt.col_expr(user::Column::Password, Expr::value(password));
        }

        // Zero matched rows is indistinguishable from a successful write.
        stmt.exec(&self.db).await.map_err(AppError::from)?;
        Ok(id.to_string())
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }
}
