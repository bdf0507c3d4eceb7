use actix_web::error::JsonPayloadError;
use actix_web::web;
use utoipa::OpenApi;

use crate::constants::MSG_SERVER_RUNNING;
use crate::errors::ApiError;
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;

/// Largest request body accepted by the JSON routes.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
        // Health check
        .route("/health", web::get().to(health_check))
        .route("/api-docs/openapi.json", web::get().to(openapi_json))
        // User routes
        .route("/user", web::post().to(handlers::create_user))
        .route("/users", web::get().to(handlers::get_users))
        .route("/updateuser/{id}", web::put().to(handlers::update_user))
        .route("/deleteuser/{id}", web::delete().to(handlers::delete_user));
}

/// JSON bodies bind regardless of the declared content type; failures become 400s
/// carrying the parser's message, oversized bodies 413s.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err, _req| {
            let api_error = match err {
                err @ (JsonPayloadError::Overflow { .. }
                | JsonPayloadError::OverflowKnownLength { .. }) => {
                    ApiError::payload_too_large(err.to_string())
                }
                JsonPayloadError::Deserialize(e) => ApiError::invalid_json(e),
                other => ApiError::invalid_json(other),
            };
            api_error.into()
        })
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

async fn openapi_json() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "OK");
        assert_eq!(body["message"], MSG_SERVER_RUNNING);
    }

    #[actix_web::test]
    async fn test_openapi_lists_user_routes() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get()
            .uri("/api-docs/openapi.json")
            .to_request();
        let doc: Value = test::call_and_read_body_json(&app, req).await;
        for path in ["/user", "/users", "/updateuser/{id}", "/deleteuser/{id}"] {
            assert!(doc["paths"].get(path).is_some(), "missing {path}");
        }
    }

    #[actix_web::test]
    async fn test_unknown_route_is_404() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/user/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
