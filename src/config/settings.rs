//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_REDIS_HOST, DEFAULT_REDIS_PORT, DEFAULT_WORKER_THREADS, MAX_WORKER_THREADS,
};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    db_password: String,
    pub db_name: String,
    pub redis_host: String,
    pub redis_port: u16,
    pub worker_threads: usize,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_user", &"[REDACTED]")
            .field("db_password", &"[REDACTED]")
            .field("db_name", &self.db_name)
            .field("redis_host", &self.redis_host)
            .field("redis_port", &self.redis_port)
            .field("worker_threads", &self.worker_threads)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Store credentials are required and have no fallback values;
    /// cache and worker settings fall back to development defaults.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            db_host: require("DB_HOST")?,
            db_port: require("DB_PORT")?
                .parse()
                .map_err(|_| AppError::validation("DB_PORT must be a port number"))?,
            db_user: require("DB_USER")?,
            db_password: require("DB_PASS")?,
            db_name: require("DB_NAME")?,
            redis_host: env::var("REDIS_HOST").unwrap_or_else(|_| DEFAULT_REDIS_HOST.to_string()),
            redis_port: env::var("REDIS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REDIS_PORT),
            worker_threads: env::var("WORKER_THREADS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_WORKER_THREADS)
                .clamp(1, MAX_WORKER_THREADS),
        })
    }

    /// Get the database connection URL.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
        )
    }

    /// Get the Redis connection URL.
    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}", self.redis_host, self.redis_port)
    }
}

fn require(name: &str) -> AppResult<String> {
    env::var(name).map_err(|_| AppError::validation(format!("{name} must be set")))
}
