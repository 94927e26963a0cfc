//! Userdesk - A user CRUD backend service
//!
//! Thin HTTP service persisting user records in a relational store,
//! with a key-value cache, a bounded worker pool, realtime fan-out to
//! live clients, and local file intake.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities
//! - **services**: Application use cases
//! - **infra**: Infrastructure concerns (database, cache, realtime,
//!   worker pool, upload storage)
//! - **api**: HTTP handlers and routes
//! - **types**: Shared types (response envelope)
//! - **errors**: Centralized error handling

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{UpdateUser, User};
pub use errors::{AppError, AppResult};
pub use infra::{Cache, Database, Notifier, TaskRunner};
