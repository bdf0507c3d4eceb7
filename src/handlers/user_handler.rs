//! User handlers for create, list, update and delete.

use actix_web::{web, HttpResponse};
use log::{debug, info, warn};

use crate::constants::{
    CODE_INVALID_USER_ID, CODE_USER_NOT_FOUND, ERR_INVALID_USER_ID, ERR_USER_NOT_FOUND,
    MSG_USER_DELETED, MSG_USER_UPDATED,
};
use crate::errors::ApiError;
use crate::models::{ApiResponse, UserPayload};
use crate::services::UserService;

/// Create a user
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 200, description = "Created user with its generated id", body = crate::models::User),
        (status = 400, description = "Body is not a valid user", body = crate::models::ErrorResponse),
        (status = 500, description = "Database error", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<Option<UserPayload>>,
) -> Result<HttpResponse, ApiError> {
    // A `null` body binds as a user with empty fields.
    let payload = body.into_inner().unwrap_or_default();
    let user = user_service.create_user(payload).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user", body = Vec<crate::models::User>),
        (status = 500, description = "Database error", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_users(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let users = user_service.list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Replace a user's name, email and password
///
/// The target is looked up before the body is parsed, so an unknown id wins
/// over a malformed body.
#[utoipa::path(
    put,
    path = "/updateuser/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "`{message, data}` with the updated user"),
        (status = 400, description = "Body is not a valid user", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 500, description = "Database error", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let raw_id = path.into_inner();
    debug!("Updating user with id: {}", raw_id);

    // A non-numeric id can never match a row.
    let id: i64 = raw_id.parse().map_err(|_| {
        warn!("Update failed: no user with id: {}", raw_id);
        ApiError::not_found(CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND)
    })?;
    let user = user_service.get_user(id).await?;

    let payload: UserPayload = serde_json::from_slice::<Option<UserPayload>>(&body)
        .map_err(|e| {
            warn!("Update failed: invalid body for user {}: {}", id, e);
            ApiError::invalid_json(e)
        })?
        .unwrap_or_default();

    let updated = user_service.replace_user(user, payload).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_USER_UPDATED, updated)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/deleteuser/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "`{message}` confirming the deletion"),
        (status = 400, description = "Invalid user ID", body = crate::models::ErrorResponse),
        (status = 404, description = "ID not exist", body = crate::models::ErrorResponse),
        (status = 500, description = "Database error", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let raw_id = path.into_inner();
    let id: i64 = raw_id.parse().map_err(|_| {
        warn!("Delete failed: invalid user id: {}", raw_id);
        ApiError::bad_request(CODE_INVALID_USER_ID, ERR_INVALID_USER_ID)
    })?;

    user_service.delete_user(id).await?;

    info!("Successfully deleted user: {}", id);
    Ok(HttpResponse::Ok().json(ApiResponse::message(MSG_USER_DELETED)))
}
