use std::env;

/// Credential pair for the single privileged account. The login flow
/// compares submitted credentials against these values and lazily creates
/// the backing account record on first success.
#[derive(Clone, Debug)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

impl AdminConfig {
    pub fn from_env() -> Self {
        Self {
            username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "p@ssw0rd".to_string()),
        }
    }
}
