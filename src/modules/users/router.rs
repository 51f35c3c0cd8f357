use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{delete_user_by_id, get_all_users, get_user_by_id, update_user_by_id};

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/users", get(get_all_users)).route(
        "/user/{id}",
        get(get_user_by_id)
            .patch(update_user_by_id)
            .delete(delete_user_by_id),
    )
}
