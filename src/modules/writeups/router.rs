use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{
    claim_writeup, create_writeup, delete_writeup, get_my_claims, get_writeups, like_writeup,
    unclaim_writeup, unlike_writeup,
};

pub fn init_writeups_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_writeups).post(create_writeup))
        .route("/myclaims", get(get_my_claims))
        .route("/{id}/like", post(like_writeup))
        .route("/{id}/unlike", post(unlike_writeup))
        .route("/claim/{id}", post(claim_writeup))
        .route("/unclaim/{id}", post(unclaim_writeup))
        .route("/{id}", delete(delete_writeup))
}
