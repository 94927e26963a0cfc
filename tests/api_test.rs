//! Integration tests for API endpoints.
//!
//! These drive the real router with mock services, asserting the
//! envelope contract: the `success` flag carries the outcome and the
//! HTTP status stays 200 except where the contract says otherwise.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::Value;
use tower::ServiceExt;

use userdesk::config::UPLOAD_DIR;
use userdesk::domain::{UpdateUser, User};
use userdesk::errors::{AppError, AppResult};
use userdesk::infra::{Cache, Database, FileStore, Notifier, TaskRunner};
use userdesk::services::UserService;
use userdesk::{api::create_router, AppState};

// =============================================================================
// Mock Services for Testing
// =============================================================================

/// Mock user service with scriptable outcomes and call recording.
#[derive(Default)]
struct StubUserService {
    fail: bool,
    users: Vec<User>,
    created: Mutex<Vec<(String, String)>>,
    deleted: Mutex<Vec<String>>,
    updated: Mutex<Vec<String>>,
}

impl StubUserService {
    fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            ..Self::default()
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl UserService for StubUserService {
    async fn get_user(&self, id: &str) -> AppResult<User> {
        if self.fail {
            return Err(AppError::internal("store offline"));
        }
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        if self.fail {
            return Err(AppError::internal("store offline"));
        }
        Ok(self.users.clone())
    }

    async fn create_user(&self, name: String, password: String) -> AppResult<String> {
        if self.fail {
            return Err(AppError::internal("store offline"));
        }
        self.created.lock().unwrap().push((name, password));
        Ok("101".to_string())
    }

    async fn update_user(&self, id: &str, _patch: UpdateUser) -> AppResult<String> {
        if self.fail {
            return Err(AppError::internal("store offline"));
        }
        self.updated.lock().unwrap().push(id.to_string());
        Ok(id.to_string())
    }

    async fn delete_user(&self, id: &str) -> AppResult<()> {
        if self.fail {
            return Err(AppError::internal("store offline"));
        }
        self.deleted.lock().unwrap().push(id.to_string());
        Ok(())
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn sample_user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        password: "pw1".to_string(),
    }
}

async fn test_router(service: Arc<StubUserService>) -> Router {
    let database = Arc::new(Database::from_connection(
        MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
    ));
    let cache = Arc::new(Cache::new("redis://127.0.0.1:6379").unwrap());
    let tasks = Arc::new(TaskRunner::new(2));
    let notifier = Arc::new(Notifier::new());
    let upload_dir =
        std::env::temp_dir().join(format!("userdesk-api-test-{}", uuid::Uuid::new_v4()));
    let uploads = Arc::new(FileStore::init(upload_dir).await.unwrap());

    let state = AppState::new(service, database, cache, tasks, notifier, uploads);
    create_router(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// =============================================================================
// List / Get
// =============================================================================

#[tokio::test]
async fn list_returns_users_in_success_envelope() {
    let service = Arc::new(StubUserService::with_users(vec![
        sample_user("1", "alice"),
        sample_user("2", "bob"),
    ]));
    let app = test_router(service).await;

    let (status, body) = send(app, get("/api/user/list")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["name"], "alice");
    // The contract exposes the stored password verbatim.
    assert_eq!(body["data"][0]["password"], "pw1");
}

#[tokio::test]
async fn list_store_failure_degrades_to_opaque_envelope() {
    let app = test_router(Arc::new(StubUserService::failing())).await;

    let (status, body) = send(app, get("/api/user/list")).await;

    assert_eq!(status, StatusCode::OK, "failures ride on HTTP 200");
    assert_eq!(body["success"], false);
    assert!(body.get("error").is_none(), "cause must not leak to the client");
}

#[tokio::test]
async fn get_without_id_reports_missing_id() {
    let app = test_router(Arc::new(StubUserService::default())).await;

    let (status, body) = send(app, get("/api/user")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "missing user id");
}

#[tokio::test]
async fn get_with_blank_id_reports_missing_id() {
    let app = test_router(Arc::new(StubUserService::default())).await;

    let (_, body) = send(app, get("/api/user?id=")).await;

    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "missing user id");
}

#[tokio::test]
async fn get_unknown_id_reports_not_found() {
    let app = test_router(Arc::new(StubUserService::default())).await;

    let (status, body) = send(app, get("/api/user?id=42")).await;

    assert_eq!(status, StatusCode::OK, "not-found is an envelope, not a 404");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "user not found");
}

#[tokio::test]
async fn get_known_id_returns_user() {
    let service = Arc::new(StubUserService::with_users(vec![sample_user("7", "alice")]));
    let app = test_router(service).await;

    let (status, body) = send(app, get("/api/user?id=7")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], "7");
    assert_eq!(body["data"]["name"], "alice");
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn create_with_valid_body_succeeds() {
    let service = Arc::new(StubUserService::default());
    let app = test_router(service.clone()).await;

    let (status, body) = send(
        app,
        post_json("/api/user/add", r#"{"name":"alice","password":"pw1"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "user created");
    assert_eq!(
        *service.created.lock().unwrap(),
        vec![("alice".to_string(), "pw1".to_string())]
    );
}

#[tokio::test]
async fn create_with_empty_name_is_rejected_before_the_store() {
    let service = Arc::new(StubUserService::default());
    let app = test_router(service.clone()).await;

    let (status, body) = send(
        app,
        post_json("/api/user/add", r#"{"name":"","password":"pw"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(service.created.lock().unwrap().is_empty(), "store must not be called");
}

#[tokio::test]
async fn create_with_missing_field_fails() {
    let service = Arc::new(StubUserService::default());
    let app = test_router(service.clone()).await;

    let (status, body) = send(app, post_json("/api/user/add", r#"{"name":"alice"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert!(service.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn create_with_malformed_body_fails() {
    let app = test_router(Arc::new(StubUserService::default())).await;

    let (status, body) = send(app, post_json("/api/user/add", "not json")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn update_without_id_reports_missing_id() {
    let app = test_router(Arc::new(StubUserService::default())).await;

    let (status, body) = send(
        app,
        post_json("/api/user/update", r#"{"name":"bob"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "missing user id");
}

#[tokio::test]
async fn update_with_id_succeeds() {
    let service = Arc::new(StubUserService::default());
    let app = test_router(service.clone()).await;

    let (status, body) = send(
        app,
        post_json("/api/user/update?id=7", r#"{"password":"pw2"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "user updated");
    assert_eq!(*service.updated.lock().unwrap(), vec!["7".to_string()]);
}

#[tokio::test]
async fn update_with_malformed_body_fails() {
    let app = test_router(Arc::new(StubUserService::default())).await;

    let (status, body) = send(app, post_json("/api/user/update?id=7", "{")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn delete_without_id_is_a_400() {
    let app = test_router(Arc::new(StubUserService::default())).await;

    let (status, body) = send(app, post_empty("/api/user/del")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST, "the one status-coded failure");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "missing user id");
}

#[tokio::test]
async fn delete_with_id_succeeds() {
    let service = Arc::new(StubUserService::default());
    let app = test_router(service.clone()).await;

    let (status, body) = send(app, post_empty("/api/user/del?id=9")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "user deleted");
    assert_eq!(*service.deleted.lock().unwrap(), vec!["9".to_string()]);
}

#[tokio::test]
async fn delete_store_failure_is_still_http_200() {
    let app = test_router(Arc::new(StubUserService::failing())).await;

    let (status, body) = send(app, post_empty("/api/user/del?id=9")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
}

// =============================================================================
// Upload
// =============================================================================

fn multipart_request(field: &str, filename: Option<&str>, content: &str) -> Request<Body> {
    let boundary = "x-userdesk-test-boundary";
    let disposition = match filename {
        Some(name) => format!("form-data; name=\"{field}\"; filename=\"{name}\""),
        None => format!("form-data; name=\"{field}\""),
    };
    let body = format!(
        "--{boundary}\r\nContent-Disposition: {disposition}\r\nContent-Type: text/plain\r\n\r\n{content}\r\n--{boundary}--\r\n"
    );

    Request::builder()
        .method("POST")
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn upload_stores_file_and_returns_metadata() {
    let app = test_router(Arc::new(StubUserService::default())).await;

    let (status, body) = send(app, multipart_request("file", Some("hello.txt"), "hello world")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["originalFilename"], "hello.txt");
    assert_eq!(body["size"], 11);
    let stored = body["filename"].as_str().unwrap();
    assert!(stored.ends_with("_hello.txt"));
}

#[tokio::test]
async fn upload_without_file_field_is_a_400() {
    let app = test_router(Arc::new(StubUserService::default())).await;

    let (status, body) = send(app, multipart_request("other", Some("hello.txt"), "hi")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "missing upload file");
}

#[tokio::test]
async fn upload_with_non_file_field_is_a_400() {
    let app = test_router(Arc::new(StubUserService::default())).await;

    let (status, body) = send(app, multipart_request("file", None, "just a value")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

// =============================================================================
// Demo / Misc
// =============================================================================

#[tokio::test]
async fn worker_demo_returns_the_placeholder_sum() {
    let app = test_router(Arc::new(StubUserService::default())).await;

    let (status, body) = send(app, get("/api/test/worker")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["sum"], 5050);
    assert_eq!(body["data"]["name"], "test");
}

#[tokio::test]
async fn root_returns_banner() {
    let app = test_router(Arc::new(StubUserService::default())).await;

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"Welcome to Userdesk");
}

#[tokio::test]
async fn unknown_route_is_a_404() {
    let app = test_router(Arc::new(StubUserService::default())).await;

    let response = app.oneshot(get("/api/unknown")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// Keep the default upload directory constant pinned: handlers write to it in
// production and operators point volume mounts at it.
#[test]
fn upload_dir_constant_is_stable() {
    assert_eq!(UPLOAD_DIR, "./uploads");
}
