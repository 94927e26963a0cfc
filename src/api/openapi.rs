//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{demo_handler, upload_handler, user_handler};
use crate::domain::{UpdateUser, User};

/// OpenAPI documentation for Userdesk
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Userdesk",
        version = "0.1.0",
        description = "User CRUD backend with file intake, realtime fan-out, cache and worker-pool demos"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        // File intake
        upload_handler::upload_file,
        // Demos
        demo_handler::test_redis,
        demo_handler::test_worker,
    ),
    components(
        schemas(
            User,
            UpdateUser,
            user_handler::CreateUserRequest,
            upload_handler::UploadResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Upload", description = "File intake"),
        (name = "Demo", description = "Cache and worker-pool demonstrations")
    )
)]
pub struct ApiDoc;
