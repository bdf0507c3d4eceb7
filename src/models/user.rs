use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::UserPayload;

/// User row stored in PostgreSQL
///
/// `id` is assigned by the database on insert and never changes afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, FromRow, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "ann@x.com")]
    pub email: String,
    #[schema(example = "pw")]
    pub password: String,
}

impl User {
    /// Overwrite every mutable field from a payload, keeping the id.
    pub fn apply(&mut self, payload: UserPayload) {
        self.name = payload.name;
        self.email = payload.email;
        self.password = payload.password;
    }
}
