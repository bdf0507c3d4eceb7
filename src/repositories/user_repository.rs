//! User repository for all PostgreSQL operations related to users.
//!
//! This repository encapsulates all database access logic for the users table,
//! providing a clean interface for the service layer.

use async_trait::async_trait;
use log::{debug, info};
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;
use crate::constants::TABLE_USERS;
use crate::errors::{ApiError, StartupError};
use crate::models::{User, UserPayload};
use crate::utils::log_sanitizer::mask_database_url;

/// Storage operations the user service depends on.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new row and return it with its generated id.
    async fn insert(&self, payload: &UserPayload) -> Result<User, ApiError>;

    async fn find_all(&self) -> Result<Vec<User>, ApiError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ApiError>;

    /// Write every column of an existing row back.
    async fn save(&self, user: &User) -> Result<User, ApiError>;

    /// Delete a row, returning the number of rows removed.
    async fn delete(&self, id: i64) -> Result<u64, ApiError>;
}

/// Open the shared connection pool.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, StartupError> {
    info!("Connecting to {}", mask_database_url(&config.url()));
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url())
        .await
        .map_err(StartupError::Database)
}

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository over a shared pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the users table if it does not exist yet.
    ///
    /// This method should be called once during application startup. It keeps no
    /// migration history and never alters or drops an existing table.
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        info!("Running auto-migration for {} table...", TABLE_USERS);
        sqlx::query(&format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                password TEXT NOT NULL
            )",
            TABLE_USERS
        ))
        .execute(&self.pool)
        .await?;
        info!("Auto-migration finished");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn insert(&self, payload: &UserPayload) -> Result<User, ApiError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO {} (name, email, password) VALUES ($1, $2, $3)
             RETURNING id, name, email, password",
            TABLE_USERS
        ))
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.password)
        .fetch_one(&self.pool)
        .await?;
        debug!("Repository: Inserted user with ID: {}", user.id);
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        debug!("Repository: Finding all users");
        Ok(sqlx::query_as::<_, User>(&format!(
            "SELECT id, name, email, password FROM {} ORDER BY id",
            TABLE_USERS
        ))
        .fetch_all(&self.pool)
        .await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by ID: {}", id);
        Ok(sqlx::query_as::<_, User>(&format!(
            "SELECT id, name, email, password FROM {} WHERE id = $1",
            TABLE_USERS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn save(&self, user: &User) -> Result<User, ApiError> {
        debug!("Repository: Saving user with ID: {}", user.id);
        Ok(sqlx::query_as::<_, User>(&format!(
            "UPDATE {} SET name = $2, email = $3, password = $4 WHERE id = $1
             RETURNING id, name, email, password",
            TABLE_USERS
        ))
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn delete(&self, id: i64) -> Result<u64, ApiError> {
        debug!("Repository: Deleting user with ID: {}", id);
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", TABLE_USERS))
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
