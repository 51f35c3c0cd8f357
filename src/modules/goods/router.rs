use axum::{Router, routing::get, routing::post};

use crate::state::AppState;

use super::controller::{
    delete_goods_by_id, get_all_goods, get_goods_by_id, new_goods, update_goods_by_id,
};

pub fn init_goods_router() -> Router<AppState> {
    Router::new()
        .route("/goods", post(new_goods).get(get_all_goods))
        .route(
            "/goods/{id}",
            get(get_goods_by_id)
                .patch(update_goods_by_id)
                .delete(delete_goods_by_id),
        )
}
