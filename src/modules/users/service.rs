use serde_json::Value;
use tracing::instrument;
use uuid::Uuid;

use crate::store::{Collection, Document, SharedStore, StoreError};
use crate::utils::errors::AppError;

use super::model::UserDoc;

fn user_not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("未找到对应的用户"))
}

pub struct UserService;

impl UserService {
    /// Store-level lookup used by the login flow; uniqueness of
    /// `username` guarantees at most one match.
    pub async fn find_by_username(
        store: &SharedStore,
        username: &str,
    ) -> Result<Option<Document>, StoreError> {
        store
            .find_by_field(Collection::Users, "username", username)
            .await
    }

    /// Store-level insert used by the login bootstrap. Returns the raw
    /// [`StoreError`] so the caller can react to a uniqueness race.
    pub async fn create_user(store: &SharedStore, user: UserDoc) -> Result<Document, StoreError> {
        let data = serde_json::to_value(user).map_err(anyhow::Error::from)?;
        store.create(Collection::Users, data).await
    }

    #[instrument(skip(store))]
    pub async fn get_users(store: &SharedStore) -> Result<Vec<Document>, AppError> {
        store
            .list_all(Collection::Users)
            .await
            .map_err(AppError::database)
    }

    #[instrument(skip(store))]
    pub async fn get_user(store: &SharedStore, id: Uuid) -> Result<Document, AppError> {
        store
            .find_by_id(Collection::Users, id)
            .await
            .map_err(AppError::database)?
            .ok_or_else(user_not_found)
    }

    #[instrument(skip(store, values))]
    pub async fn update_user(
        store: &SharedStore,
        id: Uuid,
        values: Value,
    ) -> Result<Document, AppError> {
        store
            .update_by_id(Collection::Users, id, values)
            .await
            .map_err(|e| match e {
                StoreError::UniqueViolation { .. } => {
                    AppError::conflict(anyhow::anyhow!("账户已存在"))
                }
                e => AppError::database(e),
            })?
            .ok_or_else(user_not_found)
    }

    #[instrument(skip(store))]
    pub async fn delete_user(store: &SharedStore, id: Uuid) -> Result<Document, AppError> {
        store
            .delete_by_id(Collection::Users, id)
            .await
            .map_err(AppError::database)?
            .ok_or_else(user_not_found)
    }
}
