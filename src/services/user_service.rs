//! User service - Handles the user resource lifecycle.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{UpdateUser, User};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Post-delete hook, fired after a user row is removed from the store.
///
/// Fire-and-forget: implementations must not block and their failures
/// must not affect the delete outcome.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserDeletedHook: Send + Sync {
    fn on_user_deleted(&self, id: &str);
}

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by id
    async fn get_user(&self, id: &str) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Create a user, returning the generated id
    async fn create_user(&self, name: String, password: String) -> AppResult<String>;

    /// Apply a partial update, returning the id
    async fn update_user(&self, id: &str, patch: UpdateUser) -> AppResult<String>;

    /// Delete a user; deleting an absent id succeeds
    async fn delete_user(&self, id: &str) -> AppResult<()>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    deleted_hook: Arc<dyn UserDeletedHook>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>, deleted_hook: Arc<dyn UserDeletedHook>) -> Self {
        Self { repo, deleted_hook }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: &str) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn create_user(&self, name: String, password: String) -> AppResult<String> {
        self.repo.create(name, password).await
    }

    async fn update_user(&self, id: &str, patch: UpdateUser) -> AppResult<String> {
        self.repo.update(id, patch).await
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        self.repo.delete(id).await?;
        // The row is gone; notification failures are the hook's problem.
        self.deleted_hook.on_user_deleted(id);
        Ok(())
    }
}
