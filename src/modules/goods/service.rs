use serde_json::Value;
use tracing::instrument;
use uuid::Uuid;

use crate::store::{Collection, Document, SharedStore};
use crate::utils::errors::AppError;

fn goods_not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("未找到对应的商品"))
}

pub struct GoodsService;

impl GoodsService {
    #[instrument(skip_all)]
    pub async fn create_goods(store: &SharedStore, goods: Value) -> Result<Document, AppError> {
        store
            .create(Collection::Goods, goods)
            .await
            .map_err(AppError::database)
    }

    #[instrument(skip(store))]
    pub async fn find_goods(store: &SharedStore, id: Uuid) -> Result<Document, AppError> {
        store
            .find_by_id(Collection::Goods, id)
            .await
            .map_err(AppError::database)?
            .ok_or_else(goods_not_found)
    }

    #[instrument(skip(store))]
    pub async fn find_all_goods(store: &SharedStore) -> Result<Vec<Document>, AppError> {
        store
            .list_all(Collection::Goods)
            .await
            .map_err(AppError::database)
    }

    #[instrument(skip(store, values))]
    pub async fn update_goods(
        store: &SharedStore,
        id: Uuid,
        values: Value,
    ) -> Result<Document, AppError> {
        store
            .update_by_id(Collection::Goods, id, values)
            .await
            .map_err(AppError::database)?
            .ok_or_else(goods_not_found)
    }

    #[instrument(skip(store))]
    pub async fn delete_goods(store: &SharedStore, id: Uuid) -> Result<Document, AppError> {
        store
            .delete_by_id(Collection::Goods, id)
            .await
            .map_err(AppError::database)?
            .ok_or_else(goods_not_found)
    }
}
