use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds. Issued tokens are rejected once
    /// `iat + token_expiry` has passed.
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| "CMD-ADMIN-API-TOKEN".to_string()),
            token_expiry: env::var("TOKEN_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(172_800), // 2 days
        }
    }
}
