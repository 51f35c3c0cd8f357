use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;

use super::service::UserService;

fn parse_id(id: &str) -> Result<Uuid, AppError> {
    id.parse()
        .map_err(|_| AppError::not_found(anyhow::anyhow!("未找到对应的用户")))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All user records"),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all)]
pub async fn get_all_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Value>>>, AppError> {
    let users = UserService::get_users(&state.store).await?;
    let data = users.into_iter().map(|doc| doc.into_json()).collect();

    Ok(Json(ApiResponse::data(data)))
}

/// Get a single user
#[utoipa::path(
    get,
    path = "/user/{id}",
    params(("id" = String, Path, description = "User record id")),
    responses(
        (status = 200, description = "The user record"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Unknown user id")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let user = UserService::get_user(&state.store, parse_id(&id)?).await?;

    Ok(Json(ApiResponse::data(user.into_json())))
}

/// Update a user
#[utoipa::path(
    patch,
    path = "/user/{id}",
    params(("id" = String, Path, description = "User record id")),
    responses(
        (status = 200, description = "The updated user record"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Unknown user id"),
        (status = 409, description = "Username or email already taken")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(id = %id, user = %auth.0.username))]
pub async fn update_user_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(values): Json<Value>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    if !values.is_object() {
        return Err(AppError::bad_request(anyhow::anyhow!("参数不对")));
    }

    let user = UserService::update_user(&state.store, parse_id(&id)?, values).await?;

    Ok(Json(ApiResponse::msg_with_data(
        "更新用户成功",
        user.into_json(),
    )))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/user/{id}",
    params(("id" = String, Path, description = "User record id")),
    responses(
        (status = 200, description = "The deleted user record"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Unknown user id")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(id = %id, user = %auth.0.username))]
pub async fn delete_user_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let user = UserService::delete_user(&state.store, parse_id(&id)?).await?;

    Ok(Json(ApiResponse::msg_with_data(
        "删除用户成功",
        user.into_json(),
    )))
}
