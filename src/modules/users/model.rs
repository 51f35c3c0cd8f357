use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::auth::model::Identity;

/// An account record as stored in the users collection.
///
/// `username` and `email` carry uniqueness constraints in the store.
/// The avatar, when present, is a base64-encoded image.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDoc {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub identity: Identity,
}
