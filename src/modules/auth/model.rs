use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// The caller's role, embedded in every issued token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Identity {
    #[default]
    User,
    Admin,
}

// JWT Claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Record id of the account the token was issued for.
    pub sub: Uuid,
    pub username: String,
    pub identity: Identity,
    /// Unique id per issued token.
    pub jti: Uuid,
    pub iat: usize,
    pub exp: usize,
}

// Login request structure
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
    /// Present only when a client mistakes this endpoint for a regular
    /// account login; its presence is rejected outright.
    pub email: Option<String>,
}

// Login success payload
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginData {
    pub identity: Identity,
    pub username: String,
    pub token: String,
}

/// Result of the `register` operation. Registration of additional
/// accounts is a declared extension point that is not implemented yet;
/// the variant keeps it visible in the API surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    NotImplemented,
}
