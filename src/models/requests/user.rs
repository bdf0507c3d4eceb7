//! User-related request models.

use serde::Deserialize;
use utoipa::ToSchema;

/// Fields a client may supply when creating or replacing a user
///
/// Absent fields bind as empty strings. Any `id` in the body is ignored.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct UserPayload {
    #[serde(default)]
    #[schema(example = "Ann")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "ann@x.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "pw")]
    pub password: String,
}
