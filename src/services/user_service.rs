//! User service for create, list, replace and delete operations.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::constants::{CODE_USER_NOT_FOUND, ERR_ID_NOT_EXIST, ERR_USER_NOT_FOUND};
use crate::errors::ApiError;
use crate::models::{User, UserPayload};
use crate::repositories::UserRepository;
use crate::utils::log_sanitizer::mask_email;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_user(&self, payload: UserPayload) -> Result<User, ApiError> {
        let user = self.repository.insert(&payload).await?;
        info!(
            "Created user {} with email {}",
            user.id,
            mask_email(&user.email)
        );
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let users = self.repository.find_all().await?;
        debug!("Fetched {} users", users.len());
        Ok(users)
    }

    /// Look up a user, failing with `User not found` on a miss.
    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            warn!("User not found with id: {}", id);
            ApiError::not_found(CODE_USER_NOT_FOUND, ERR_USER_NOT_FOUND)
        })
    }

    /// Overwrite name, email and password of a fetched user and persist it.
    pub async fn replace_user(&self, mut user: User, payload: UserPayload) -> Result<User, ApiError> {
        user.apply(payload);
        let saved = self.repository.save(&user).await?;
        info!("Updated user {}", saved.id);
        Ok(saved)
    }

    /// Delete a user. A miss is reported without issuing the delete.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        if self.repository.find_by_id(id).await?.is_none() {
            warn!("Delete failed: user not found with id: {}", id);
            return Err(ApiError::not_found(CODE_USER_NOT_FOUND, ERR_ID_NOT_EXIST));
        }

        let removed = self.repository.delete(id).await?;
        info!("Deleted user {} ({} row(s) removed)", id, removed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryUserRepository;

    fn payload(name: &str) -> UserPayload {
        UserPayload {
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            password: "pw".to_string(),
        }
    }

    fn service() -> (Arc<InMemoryUserRepository>, UserService) {
        let repository = Arc::new(InMemoryUserRepository::new());
        let service = UserService::new(repository.clone());
        (repository, service)
    }

    #[actix_web::test]
    async fn test_create_assigns_ids() {
        let (_, service) = service();
        let first = service.create_user(payload("Ann")).await.unwrap();
        let second = service.create_user(payload("Bob")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(service.list_users().await.unwrap(), vec![first, second]);
    }

    #[actix_web::test]
    async fn test_get_missing_user() {
        let (_, service) = service();
        match service.get_user(999_999).await {
            Err(ApiError::NotFound { message, .. }) => assert_eq!(message, ERR_USER_NOT_FOUND),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[actix_web::test]
    async fn test_replace_keeps_id() {
        let (_, service) = service();
        let user = service.create_user(payload("Ann")).await.unwrap();
        let updated = service
            .replace_user(user.clone(), payload("Ann2"))
            .await
            .unwrap();
        assert_eq!(updated.id, user.id);
        assert_eq!(updated.email, "ann2@x.com");
        assert_eq!(service.get_user(user.id).await.unwrap(), updated);
    }

    #[actix_web::test]
    async fn test_delete_missing_user() {
        let (repository, service) = service();
        service.create_user(payload("Ann")).await.unwrap();
        match service.delete_user(42).await {
            Err(ApiError::NotFound { message, .. }) => assert_eq!(message, ERR_ID_NOT_EXIST),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(repository.len(), 1);
    }

    #[actix_web::test]
    async fn test_driver_failure_propagates() {
        let (repository, service) = service();
        repository.fail_all();
        assert!(matches!(
            service.list_users().await,
            Err(ApiError::InternalServerError { .. })
        ));
    }
}
