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

use super::model::{ProductCreateRequest, ProductUpdateRequest};
use super::service::ProductService;

fn parse_id(id: &str) -> Result<Uuid, AppError> {
    id.parse()
        .map_err(|_| AppError::not_found(anyhow::anyhow!("未找到对应的商品")))
}

/// Create a product
///
/// Accepts JSON or multipart form data; a binary part named
/// `product.subCategorys.introduce.introduce.img` is embedded into the
/// payload as base64.
#[utoipa::path(
    post,
    path = "/product",
    request_body = ProductCreateRequest,
    responses(
        (status = 201, description = "Product created"),
        (status = 400, description = "Missing product payload"),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    tag = "Products",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(user = %auth.0.username))]
pub async fn new_product(
    State(state): State<AppState>,
    auth: AuthUser,
    upload: DocumentUpload,
) -> Result<(StatusCode, Json<ApiResponse<Value>>), AppError> {
    let product = upload.into_wrapped("product")?;

    ProductService::create_product(&state.store, product).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::msg("新增商品成功")),
    ))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/product/{id}",
    params(("id" = String, Path, description = "Product record id")),
    responses(
        (status = 200, description = "The deleted product record"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Unknown product id")
    ),
    tag = "Products",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(id = %id, user = %auth.0.username))]
pub async fn delete_product_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let product = ProductService::delete_product(&state.store, parse_id(&id)?).await?;

    Ok(Json(ApiResponse::msg_with_data(
        "删除商品成功",
        product.into_json(),
    )))
}

/// Update a product
///
/// Accepts JSON or multipart form data; a binary part named
/// `values.subCategorys.introduce.introduce.img` is embedded into the
/// partial payload.
#[utoipa::path(
    patch,
    path = "/product/{id}",
    params(("id" = String, Path, description = "Product record id")),
    request_body = ProductUpdateRequest,
    responses(
        (status = 200, description = "The updated product record"),
        (status = 400, description = "Missing values payload"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Unknown product id")
    ),
    tag = "Products",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(id = %id, user = %auth.0.username))]
pub async fn update_product_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    upload: DocumentUpload,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let values = upload.into_wrapped("values")?;

    let product = ProductService::update_product(&state.store, parse_id(&id)?, values).await?;

    Ok(Json(ApiResponse::msg_with_data(
        "更新商品成功",
        product.into_json(),
    )))
}

/// Get a single product
#[utoipa::path(
    get,
    path = "/product/{id}",
    params(("id" = String, Path, description = "Product record id")),
    responses(
        (status = 200, description = "The product record"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Unknown product id")
    ),
    tag = "Products",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let product = ProductService::find_product(&state.store, parse_id(&id)?).await?;

    Ok(Json(ApiResponse::data(product.into_json())))
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All product records"),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    tag = "Products",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn get_all_products(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Value>>>, AppError> {
    let products = ProductService::find_all_products(&state.store).await?;
    let data = products.into_iter().map(|doc| doc.into_json()).collect();

    Ok(Json(ApiResponse::data(data)))
}
