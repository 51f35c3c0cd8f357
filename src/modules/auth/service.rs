use tracing::instrument;

use crate::config::admin::AdminConfig;
use crate::config::jwt::JwtConfig;
use crate::modules::users::model::UserDoc;
use crate::modules::users::service::UserService;
use crate::store::{SharedStore, StoreError};
use crate::utils::errors::AppError;
use crate::utils::jwt::issue_token;

use super::model::{Identity, LoginData, LoginRequest, RegisterOutcome};

pub struct AuthService;

impl AuthService {
    /// Single-account admin login.
    ///
    /// Credentials are checked against the configured pair before the
    /// store is touched at all. The backing account record is created on
    /// the first successful login; if two first logins race, the loser's
    /// insert hits the username uniqueness constraint and falls back to
    /// reading the record the winner created.
    #[instrument(skip_all, fields(username = %dto.username))]
    pub async fn login(
        store: &SharedStore,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
        admin_config: &AdminConfig,
    ) -> Result<LoginData, AppError> {
        if dto.email.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!("账户不是管理员")));
        }

        if dto.username != admin_config.username || dto.password != admin_config.password {
            return Err(AppError::bad_request(anyhow::anyhow!("账户密码错误")));
        }

        let account = match UserService::find_by_username(store, &dto.username)
            .await
            .map_err(AppError::database)?
        {
            Some(account) => account,
            None => {
                let bootstrap = UserDoc {
                    username: dto.username.clone(),
                    password: dto.password.clone(),
                    email: None,
                    avatar: None,
                    identity: Identity::Admin,
                };
                match UserService::create_user(store, bootstrap).await {
                    Ok(account) => account,
                    Err(StoreError::UniqueViolation { .. }) => {
                        UserService::find_by_username(store, &dto.username)
                            .await
                            .map_err(AppError::database)?
                            .ok_or_else(|| AppError::conflict(anyhow::anyhow!("账户已存在")))?
                    }
                    Err(e) => return Err(AppError::database(e)),
                }
            }
        };

        let identity = account
            .data
            .get("identity")
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or(Identity::Admin);

        let token = issue_token(account.id, &dto.username, identity, jwt_config)?;

        Ok(LoginData {
            identity,
            username: dto.username,
            token,
        })
    }

    /// Placeholder for the future self-service registration flow.
    pub fn register() -> RegisterOutcome {
        RegisterOutcome::NotImplemented
    }
}
