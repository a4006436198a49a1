use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_user_info;

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/user-info", get(get_user_info))
}
