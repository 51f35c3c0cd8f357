use serde_json::Value;
use tracing::instrument;
use uuid::Uuid;

use crate::store::{Collection, Document, SharedStore};
use crate::utils::errors::AppError;

fn product_not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("未找到对应的商品"))
}

pub struct ProductService;

impl ProductService {
    #[instrument(skip_all)]
    pub async fn create_product(store: &SharedStore, product: Value) -> Result<Document, AppError> {
        store
            .create(Collection::Products, product)
            .await
            .map_err(AppError::database)
    }

    #[instrument(skip(store))]
    pub async fn find_product(store: &SharedStore, id: Uuid) -> Result<Document, AppError> {
        store
            .find_by_id(Collection::Products, id)
            .await
            .map_err(AppError::database)?
            .ok_or_else(product_not_found)
    }

    #[instrument(skip(store))]
    pub async fn find_all_products(store: &SharedStore) -> Result<Vec<Document>, AppError> {
        store
            .list_all(Collection::Products)
            .await
            .map_err(AppError::database)
    }

    #[instrument(skip(store, values))]
    pub async fn update_product(
        store: &SharedStore,
        id: Uuid,
        values: Value,
    ) -> Result<Document, AppError> {
        store
            .update_by_id(Collection::Products, id, values)
            .await
            .map_err(AppError::database)?
            .ok_or_else(product_not_found)
    }

    #[instrument(skip(store))]
    pub async fn delete_product(store: &SharedStore, id: Uuid) -> Result<Document, AppError> {
        store
            .delete_by_id(Collection::Products, id)
            .await
            .map_err(AppError::database)?
            .ok_or_else(product_not_found)
    }
}
