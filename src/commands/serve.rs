//! Serve command - Starts the HTTP server.
//!
//! This is the composition root: every component is constructed here
//! in dependency order and wired by explicit injection.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::{Config, UPLOAD_DIR};
use crate::errors::{AppError, AppResult};
use crate::infra::{Cache, Database, FileStore, Notifier, TaskRunner, UserStore};
use crate::services::UserManager;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    // Leaf components first: store, cache, worker pool, notifier, uploads.
    let database = Arc::new(Database::connect(&config).await?);
    let cache = Arc::new(Cache::new(&config.redis_url())?);
    let tasks = Arc::new(TaskRunner::new(config.worker_threads));
    let notifier = Arc::new(Notifier::new());
    let uploads = Arc::new(FileStore::init(UPLOAD_DIR).await?);

    // Repository and service, with the notifier as the deletion hook.
    let user_repo = Arc::new(UserStore::new(database.get_connection()));
    let user_service = Arc::new(UserManager::new(user_repo, notifier.clone()));

    let app_state = AppState::new(
        user_service,
        database.clone(),
        cache,
        tasks,
        notifier,
        uploads,
    );

    let app = create_router(app_state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    database.close().await?;

    Ok(())
}
