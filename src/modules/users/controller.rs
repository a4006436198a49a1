use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::UserInfoResponse;
use super::service::UserService;

/// Profile of the authenticated user
#[utoipa::path(
    get,
    path = "/api/user-info",
    responses(
        (status = 200, description = "User profile with writeup aggregates", body = UserInfoResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_user_info(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<UserInfoResponse>, AppError> {
    let user_id = auth_user.user_id()?;

    let info = UserService::get_user_info(&state.db, user_id).await?;

    Ok(Json(info))
}
