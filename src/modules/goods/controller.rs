use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::utils::upload::DocumentUpload;

use super::model::{GoodsCreateRequest, GoodsUpdateRequest};
use super::service::GoodsService;

fn parse_id(id: &str) -> Result<Uuid, AppError> {
    id.parse()
        .map_err(|_| AppError::not_found(anyhow::anyhow!("未找到对应的商品")))
}

/// Create goods
///
/// Accepts JSON or multipart form data; a binary part named
/// `goods.subCategory.goods.img` is embedded into the payload as base64.
#[utoipa::path(
    post,
    path = "/goods",
    request_body = GoodsCreateRequest,
    responses(
        (status = 201, description = "Goods created"),
        (status = 400, description = "Missing goods payload"),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    tag = "Goods",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(user = %auth.0.username))]
pub async fn new_goods(
    State(state): State<AppState>,
    auth: AuthUser,
    upload: DocumentUpload,
) -> Result<(StatusCode, Json<ApiResponse<Value>>), AppError> {
    let goods = upload.into_wrapped("goods")?;

    GoodsService::create_goods(&state.store, goods).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::msg("新增商品成功")),
    ))
}

/// Delete goods
#[utoipa::path(
    delete,
    path = "/goods/{id}",
    params(("id" = String, Path, description = "Goods record id")),
    responses(
        (status = 200, description = "The deleted goods record"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Unknown goods id")
    ),
    tag = "Goods",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(id = %id, user = %auth.0.username))]
pub async fn delete_goods_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let goods = GoodsService::delete_goods(&state.store, parse_id(&id)?).await?;

    Ok(Json(ApiResponse::msg_with_data(
        "删除商品成功",
        goods.into_json(),
    )))
}

/// Update goods
///
/// Accepts JSON or multipart form data; a binary part named
/// `values.subCategory.goods.img` is embedded into the partial payload.
#[utoipa::path(
    patch,
    path = "/goods/{id}",
    params(("id" = String, Path, description = "Goods record id")),
    request_body = GoodsUpdateRequest,
    responses(
        (status = 200, description = "The updated goods record"),
        (status = 400, description = "Missing values payload"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Unknown goods id")
    ),
    tag = "Goods",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(id = %id, user = %auth.0.username))]
pub async fn update_goods_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    upload: DocumentUpload,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let values = upload.into_wrapped("values")?;

    let goods = GoodsService::update_goods(&state.store, parse_id(&id)?, values).await?;

    Ok(Json(ApiResponse::msg_with_data(
        "更新商品成功",
        goods.into_json(),
    )))
}

/// Get a single goods record
#[utoipa::path(
    get,
    path = "/goods/{id}",
    params(("id" = String, Path, description = "Goods record id")),
    responses(
        (status = 200, description = "The goods record"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Unknown goods id")
    ),
    tag = "Goods",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_goods_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let goods = GoodsService::find_goods(&state.store, parse_id(&id)?).await?;

    Ok(Json(ApiResponse::data(goods.into_json())))
}

/// List all goods
#[utoipa::path(
    get,
    path = "/goods",
    responses(
        (status = 200, description = "All goods records"),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    tag = "Goods",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn get_all_goods(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Value>>>, AppError> {
    let goods = GoodsService::find_all_goods(&state.store).await?;
    let data = goods.into_iter().map(|doc| doc.into_json()).collect();

    Ok(Json(ApiResponse::data(data)))
}
