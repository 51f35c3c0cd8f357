use axum::{Router, routing::get, routing::post};

use crate::state::AppState;

use super::controller::{
    delete_product_by_id, get_all_products, get_product_by_id, new_product, update_product_by_id,
};

pub fn init_products_router() -> Router<AppState> {
    Router::new()
        .route("/product", post(new_product))
        .route(
            "/product/{id}",
            get(get_product_by_id)
                .patch(update_product_by_id)
                .delete(delete_product_by_id),
        )
        .route("/products", get(get_all_products))
}
