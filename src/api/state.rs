//! Application state shared across request handlers.
//!
//! All components are built by the composition root in dependency
//! order and injected here explicitly; handlers never construct or
//! look up services themselves.

use std::sync::Arc;

use crate::infra::{Cache, Database, FileStore, Notifier, TaskRunner};
use crate::services::UserService;

/// Application state containing all services and infrastructure.
#[derive(Clone)]
pub struct AppState {
    /// User resource lifecycle service
    pub user_service: Arc<dyn UserService>,
    /// Database connection pool
    pub database: Arc<Database>,
    /// Key-value cache
    pub cache: Arc<Cache>,
    /// Bounded worker pool
    pub tasks: Arc<TaskRunner>,
    /// Realtime fan-out registry
    pub notifier: Arc<Notifier>,
    /// Upload storage
    pub uploads: Arc<FileStore>,
}

impl AppState {
    /// Create application state from explicitly constructed components.
    pub fn new(
        user_service: Arc<dyn UserService>,
        database: Arc<Database>,
        cache: Arc<Cache>,
        tasks: Arc<TaskRunner>,
        notifier: Arc<Notifier>,
        uploads: Arc<FileStore>,
    ) -> Self {
        Self {
            user_service,
            database,
            cache,
            tasks,
            notifier,
            uploads,
        }
    }
}
