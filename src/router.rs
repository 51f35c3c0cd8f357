use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::auth::require_auth;
use crate::modules::auth::router::init_auth_router;
use crate::modules::goods::router::init_goods_router;
use crate::modules::products::router::init_products_router;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

/// Composes the application router: the login and register routes are
/// public, every resource router sits behind the bearer-token gate.
pub fn init_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(init_users_router())
        .merge(init_goods_router())
        .merge(init_products_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest("/auth", init_auth_router())
        .merge(protected)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(logging_middleware))
}
