use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::{Claims, Identity};
use crate::utils::errors::AppError;

/// Why a token was rejected. The HTTP boundary collapses the first three
/// into one uniform 401; `Internal` is the only variant that becomes a 500.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("malformed token")]
    Malformed,
    #[error("token verification failed: {0:?}")]
    Internal(jsonwebtoken::errors::ErrorKind),
}

/// Signs a token carrying the given identity claim.
///
/// Expiry is `now + token_expiry`; the `jti` claim makes every issued
/// token unique even when two logins land on the same second.
pub fn issue_token(
    sub: Uuid,
    username: &str,
    identity: Identity,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.token_expiry as usize;

    let claims = Claims {
        sub,
        username: username.to_string(),
        identity,
        jti: Uuid::new_v4(),
        iat: now,
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(AppError::internal)
}

/// Decodes and validates a token, returning the embedded claims.
///
/// Pure function of the token, the configured secret, and the clock; safe
/// to call concurrently.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.into_kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::InvalidToken
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::MissingRequiredClaim(_)
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => TokenError::Malformed,
        kind => TokenError::Internal(kind),
    })
}
