//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and repositories
//! - Caching (Redis)
//! - Realtime fan-out to live client connections
//! - The bounded worker pool for offloaded computation
//! - Local file storage for uploads

pub mod cache;
pub mod db;
pub mod realtime;
pub mod repositories;
pub mod tasks;
pub mod uploads;

pub use cache::Cache;
pub use db::Database;
pub use realtime::{Notifier, OutboundEvent};
pub use repositories::{UserRepository, UserStore};
pub use tasks::{TaskRunner, WorkerTask};
pub use uploads::{FileStore, StoredFile};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
