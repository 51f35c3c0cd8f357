use std::sync::Arc;

use crate::config::admin::AdminConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;
use crate::store::SharedStore;
use crate::store::postgres::PgDocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub jwt_config: JwtConfig,
    pub admin_config: AdminConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        store: Arc::new(PgDocumentStore::new(init_db_pool().await)),
        jwt_config: JwtConfig::from_env(),
        admin_config: AdminConfig::from_env(),
    }
}
