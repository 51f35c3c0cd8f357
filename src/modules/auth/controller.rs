use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;

use super::model::{LoginData, LoginRequest, RegisterOutcome};
use super::service::AuthService;

/// Admin account login
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 201, description = "Login successful, token issued", body = LoginData),
        (status = 400, description = "Wrong credentials or not an admin login"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
#[instrument(skip_all)]
pub async fn admin_login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LoginData>>), AppError> {
    let data =
        AuthService::login(&state.store, dto, &state.jwt_config, &state.admin_config).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::message_with_data("登录成功", data)),
    ))
}

/// Client account registration (not implemented)
#[utoipa::path(
    post,
    path = "/auth/register",
    responses(
        (status = 200, description = "Accepted, no account is created")
    ),
    tag = "Auth"
)]
#[instrument]
pub async fn register() -> StatusCode {
    match AuthService::register() {
        RegisterOutcome::NotImplemented => StatusCode::OK,
    }
}
