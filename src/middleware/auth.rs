use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{TokenError, verify_token};

fn unauthorized() -> AppError {
    AppError::unauthorized(anyhow::anyhow!("Unauthorized: Missing or invalid token"))
}

/// Validates the bearer token carried by `headers`.
///
/// Expired, forged, and malformed tokens all produce the same 401 body;
/// clients cannot tell the cases apart. Only a verification fault that is
/// not attributable to the token itself becomes a 500.
fn authorize(headers: &HeaderMap, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(unauthorized)?;

    if token.is_empty() {
        return Err(unauthorized());
    }

    verify_token(token, jwt_config).map_err(|e| match e {
        TokenError::Internal(_) => AppError::internal(e),
        rejected => {
            tracing::debug!(reason = %rejected, "bearer token rejected");
            unauthorized()
        }
    })
}

/// Route layer guarding the protected routers.
///
/// Runs before any handler, aborts with a 401 on failure, and on success
/// attaches the decoded [`Claims`] to the request extensions for the rest
/// of the pipeline.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = authorize(req.headers(), &state.jwt_config)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Extractor handing the authenticated identity to a handler.
///
/// Prefers the claims cached by [`require_auth`]; a handler reached
/// without the layer (direct verification) still works.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(claims) = parts.extensions.get::<Claims>() {
            return Ok(AuthUser(claims.clone()));
        }

        authorize(&parts.headers, &state.jwt_config).map(AuthUser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::model::Identity;
    use crate::utils::jwt::issue_token;
    use uuid::Uuid;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test_secret_key_for_testing_purposes".to_string(),
            token_expiry: 172_800,
        }
    }

    fn bearer_headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn missing_header_is_unauthorized() {
        let err = authorize(&HeaderMap::new(), &test_config()).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn non_bearer_scheme_is_unauthorized() {
        let err = authorize(&bearer_headers("Token abc"), &test_config()).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn empty_token_is_unauthorized() {
        let err = authorize(&bearer_headers("Bearer "), &test_config()).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn valid_token_yields_claims() {
        let config = test_config();
        let id = Uuid::new_v4();
        let token = issue_token(id, "admin", Identity::Admin, &config).unwrap();

        let claims = authorize(&bearer_headers(&format!("Bearer {token}")), &config).unwrap();
        assert_eq!(claims.sub, id);
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.identity, Identity::Admin);
    }

    #[test]
    fn token_signed_with_other_secret_is_unauthorized() {
        let other = JwtConfig {
            secret: "a-completely-different-secret".to_string(),
            token_expiry: 172_800,
        };
        let token = issue_token(Uuid::new_v4(), "admin", Identity::Admin, &other).unwrap();

        let err = authorize(&bearer_headers(&format!("Bearer {token}")), &test_config())
            .unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::UNAUTHORIZED);
    }
}
