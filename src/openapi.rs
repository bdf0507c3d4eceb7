use utoipa::OpenApi;

use crate::models::{ErrorResponse, HealthResponse, User, UserPayload};

/// OpenAPI documentation for the User API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User CRUD API",
        version = "0.1.0",
        description = "Create, list, update and delete users stored in PostgreSQL.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8082", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User CRUD endpoints")
    ),
    paths(
        crate::handlers::create_user,
        crate::handlers::get_users,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::routes::health_check
    ),
    components(schemas(User, UserPayload, ErrorResponse, HealthResponse))
)]
pub struct ApiDoc;
