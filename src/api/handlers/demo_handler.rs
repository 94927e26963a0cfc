//! Demo handlers exercising the cache and the worker pool.
//!
//! Neither gateway is load-bearing for user CRUD; these routes are the
//! only call sites.

use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::{json, Value};

use crate::api::AppState;
use crate::config::{DEMO_CACHE_KEY, DEMO_CACHE_TTL_SECONDS, DEMO_CACHE_VALUE, DEMO_SUM_UPPER};
use crate::infra::WorkerTask;

/// Create demo routes
pub fn demo_routes() -> Router<AppState> {
    Router::new()
        .route("/api/test/redis", get(test_redis))
        .route("/api/test/worker", get(test_worker))
}

/// Write a short-lived key to the cache and read it back.
#[utoipa::path(
    get,
    path = "/api/test/redis",
    tag = "Demo",
    responses(
        (status = 200, description = "The value read back from the cache, or success=false")
    )
)]
pub async fn test_redis(State(state): State<AppState>) -> Json<Value> {
    let roundtrip = async {
        state
            .cache
            .set_with_ttl(DEMO_CACHE_KEY, DEMO_CACHE_VALUE, DEMO_CACHE_TTL_SECONDS)
            .await?;
        state.cache.get(DEMO_CACHE_KEY).await
    };

    match roundtrip.await {
        Ok(value) => Json(json!({ "redisValue": value })),
        Err(err) => {
            tracing::error!(kind = err.code(), error = %err, "cache demo failed");
            Json(json!({ "success": false }))
        }
    }
}

/// Offload the placeholder sum to the worker pool.
#[utoipa::path(
    get,
    path = "/api/test/worker",
    tag = "Demo",
    responses(
        (status = 200, description = "Envelope with a sample record carrying the computed sum")
    )
)]
pub async fn test_worker(State(state): State<AppState>) -> Json<Value> {
    match state.tasks.run(WorkerTask::Sum { upper: DEMO_SUM_UPPER }).await {
        Ok(sum) => Json(json!({
            "success": true,
            "data": { "id": 1, "name": "test", "password": "test", "sum": sum },
        })),
        Err(err) => {
            tracing::error!(kind = err.code(), error = %err, "worker demo failed");
            Json(json!({ "success": false }))
        }
    }
}
