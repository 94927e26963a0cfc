//! Redis cache implementation.
//!
//! String-typed get/set with optional TTL over a shared connection
//! manager. The connection is established lazily on first use, so
//! constructing the cache never touches the network.

use redis::{aio::ConnectionManager, AsyncCommands, Client, RedisError};
use tokio::sync::OnceCell;

use crate::errors::{AppError, AppResult};

/// Redis cache wrapper with a lazily-initialized connection.
pub struct Cache {
    client: Client,
    manager: OnceCell<ConnectionManager>,
}

impl Cache {
    /// Create a cache handle for the given Redis URL.
    ///
    /// Only the URL is validated here; the connection itself is opened
    /// on the first command.
    pub fn new(redis_url: &str) -> AppResult<Self> {
        let client = Client::open(redis_url).map_err(cache_error)?;

        Ok(Self {
            client,
            manager: OnceCell::new(),
        })
    }

    async fn manager(&self) -> AppResult<ConnectionManager> {
        let manager = self
            .manager
            .get_or_try_init(|| ConnectionManager::new(self.client.clone()))
            .await
            .map_err(cache_error)?;
        Ok(manager.clone())
    }

    /// Get a value from cache.
    pub async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.manager().await?;
        let value: Option<String> = conn.get(key).await.map_err(cache_error)?;
        Ok(value)
    }

    /// Set a value with no expiration.
    pub async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut conn = self.manager().await?;
        conn.set::<_, _, ()>(key, value).await.map_err(cache_error)?;
        Ok(())
    }

    /// Set a value with a TTL in seconds.
    pub async fn set_with_ttl(&self, key: &str, value: &str, ttl_seconds: u64) -> AppResult<()> {
        let mut conn = self.manager().await?;
        conn.set_ex::<_, _, ()>(key, value, ttl_seconds)
            .await
            .map_err(cache_error)?;
        Ok(())
    }

    /// Check if a key exists in cache.
    pub async fn exists(&self, key: &str) -> AppResult<bool> {
        let mut conn = self.manager().await?;
        let exists: bool = conn.exists(key).await.map_err(cache_error)?;
        Ok(exists)
    }
}

/// Convert Redis error to AppError.
fn cache_error(e: RedisError) -> AppError {
    tracing::error!("Redis error: {}", e);
    AppError::Cache(e.to_string())
}
