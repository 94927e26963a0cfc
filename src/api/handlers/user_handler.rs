//! User resource handlers.
//!
//! The `success` flag in the response envelope is the primary error
//! signal: apart from a delete with no id (HTTP 400), every outcome is
//! reported with HTTP 200 and callers branch on the body. Store
//! failures are logged with their structured kind and degraded to an
//! opaque `{success: false}`.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::AppState;
use crate::domain::{UpdateUser, User};
use crate::errors::AppError;
use crate::types::ApiResponse;

/// User creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Display name
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "alice")]
    pub name: String,
    /// Account password
    #[validate(length(min = 1, message = "password is required"))]
    #[schema(example = "pw1")]
    pub password: String,
}

/// Query parameter carrying the target user id
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdQuery {
    pub id: Option<String>,
}

impl IdQuery {
    /// The id, unless it is missing or blank.
    fn id(self) -> Option<String> {
        self.id.filter(|id| !id.is_empty())
    }
}

/// Create user resource routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/user/list", get(list_users))
        .route("/api/user", get(get_user))
        .route("/api/user/add", post(create_user))
        .route("/api/user/update", post(update_user))
        .route("/api/user/del", post(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/user/list",
    tag = "Users",
    responses(
        (status = 200, description = "Envelope with the full user list, or success=false on store failure")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Json<ApiResponse<Vec<User>>> {
    match state.user_service.list_users().await {
        Ok(users) => Json(ApiResponse::success(users)),
        Err(err) => {
            tracing::error!(kind = err.code(), error = %err, "listing users failed");
            Json(ApiResponse::failure())
        }
    }
}

/// Get a single user by id
#[utoipa::path(
    get,
    path = "/api/user",
    tag = "Users",
    params(IdQuery),
    responses(
        (status = 200, description = "Envelope with the user, or success=false with an error description")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Json<ApiResponse<User>> {
    let Some(id) = query.id() else {
        return Json(ApiResponse::error("missing user id"));
    };

    match state.user_service.get_user(&id).await {
        Ok(user) => Json(ApiResponse::success(user)),
        Err(AppError::NotFound) => Json(ApiResponse::error("user not found")),
        Err(err) => {
            tracing::error!(kind = err.code(), error = %err, user_id = %id, "fetching user failed");
            Json(ApiResponse::failure())
        }
    }
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/user/add",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Envelope reporting creation; success=false when a field is missing")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Json<ApiResponse<()>> {
    let Ok(Json(payload)) = payload else {
        return Json(ApiResponse::failure());
    };

    // Presence validation happens before the store is touched.
    if let Err(errors) = payload.validate() {
        tracing::warn!(%errors, "user creation rejected");
        return Json(ApiResponse::failure());
    }

    match state
        .user_service
        .create_user(payload.name, payload.password)
        .await
    {
        Ok(id) => {
            tracing::debug!(user_id = %id, "user created");
            Json(ApiResponse::message("user created"))
        }
        Err(err) => {
            tracing::error!(kind = err.code(), error = %err, "creating user failed");
            Json(ApiResponse::failure())
        }
    }
}

/// Apply a partial update to a user
#[utoipa::path(
    post,
    path = "/api/user/update",
    tag = "Users",
    params(IdQuery),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "Envelope reporting the update outcome")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    payload: Result<Json<UpdateUser>, JsonRejection>,
) -> Json<ApiResponse<()>> {
    // Body parsing precedes the id check, so a malformed body masks a
    // missing id. Kept for wire compatibility.
    let Ok(Json(patch)) = payload else {
        return Json(ApiResponse::failure());
    };

    let Some(id) = query.id() else {
        return Json(ApiResponse::error("missing user id"));
    };

    match state.user_service.update_user(&id, patch).await {
        Ok(_) => Json(ApiResponse::message("user updated")),
        Err(err) => {
            tracing::error!(kind = err.code(), error = %err, user_id = %id, "updating user failed");
            Json(ApiResponse::failure())
        }
    }
}

/// Delete a user
#[utoipa::path(
    post,
    path = "/api/user/del",
    tag = "Users",
    params(IdQuery),
    responses(
        (status = 200, description = "Envelope reporting the delete outcome"),
        (status = 400, description = "Id missing from the query string")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    let Some(id) = query.id() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("missing user id")),
        );
    };

    match state.user_service.delete_user(&id).await {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::message("user deleted"))),
        Err(err) => {
            tracing::error!(kind = err.code(), error = %err, user_id = %id, "deleting user failed");
            (StatusCode::OK, Json(ApiResponse::failure()))
        }
    }
}
