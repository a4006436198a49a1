use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateWriteupDto, LikesResponse, Writeup, WriteupWithAuthor};
use super::service::WriteupService;

/// List public writeups plus the caller's own
#[utoipa::path(
    get,
    path = "/api/writeups",
    responses(
        (status = 200, description = "Writeups visible to the caller, newest first", body = [WriteupWithAuthor]),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Writeups",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_writeups(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<WriteupWithAuthor>>, AppError> {
    let viewer_id = auth_user.user_id()?;

    let writeups = WriteupService::list(&state.db, viewer_id).await?;

    Ok(Json(writeups))
}

/// List the writeups the caller has claimed
#[utoipa::path(
    get,
    path = "/api/writeups/myclaims",
    responses(
        (status = 200, description = "Writeups claimed by the caller, newest first", body = [Writeup]),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Writeups",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn get_my_claims(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<Writeup>>, AppError> {
    let user_id = auth_user.user_id()?;

    let writeups = WriteupService::list_claimed_by(&state.db, user_id).await?;

    Ok(Json(writeups))
}

/// Create a new writeup
#[utoipa::path(
    post,
    path = "/api/writeups",
    request_body = CreateWriteupDto,
    responses(
        (status = 201, description = "Writeup created", body = Writeup),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 403, description = "Invalid or expired token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Writeups",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user, dto))]
pub async fn create_writeup(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateWriteupDto>,
) -> Result<(StatusCode, Json<Writeup>), AppError> {
    let user_id = auth_user.user_id()?;

    let writeup = WriteupService::create(&state.db, user_id, dto).await?;

    Ok((StatusCode::CREATED, Json(writeup)))
}

/// Like a writeup
#[utoipa::path(
    post,
    path = "/api/writeups/{id}/like",
    params(("id" = Uuid, Path, description = "Writeup ID")),
    responses(
        (status = 200, description = "New like count", body = LikesResponse),
        (status = 404, description = "Writeup not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Writeups",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _auth_user))]
pub async fn like_writeup(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<LikesResponse>, AppError> {
    let likes = WriteupService::like(&state.db, id).await?;

    Ok(Json(LikesResponse { likes }))
}

/// Remove a like from a writeup
#[utoipa::path(
    post,
    path = "/api/writeups/{id}/unlike",
    params(("id" = Uuid, Path, description = "Writeup ID")),
    responses(
        (status = 200, description = "New like count, never negative", body = LikesResponse),
        (status = 404, description = "Writeup not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Writeups",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _auth_user))]
pub async fn unlike_writeup(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<LikesResponse>, AppError> {
    let likes = WriteupService::unlike(&state.db, id).await?;

    Ok(Json(LikesResponse { likes }))
}

/// Claim a bottle exclusively
#[utoipa::path(
    post,
    path = "/api/writeups/claim/{id}",
    params(("id" = Uuid, Path, description = "Writeup ID")),
    responses(
        (status = 200, description = "Bottle claimed", body = MessageResponse),
        (status = 400, description = "Already claimed", body = ErrorResponse),
        (status = 404, description = "Writeup not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Writeups",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn claim_writeup(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let user_id = auth_user.user_id()?;

    WriteupService::claim(&state.db, id, user_id).await?;

    Ok(Json(MessageResponse {
        message: "Bottle claimed successfully!".to_string(),
    }))
}

/// Release the caller's claim on a bottle
#[utoipa::path(
    post,
    path = "/api/writeups/unclaim/{id}",
    params(("id" = Uuid, Path, description = "Writeup ID")),
    responses(
        (status = 200, description = "Bottle released", body = MessageResponse),
        (status = 403, description = "Not the claimant", body = ErrorResponse),
        (status = 404, description = "Writeup not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Writeups",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn unclaim_writeup(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let user_id = auth_user.user_id()?;

    WriteupService::unclaim(&state.db, id, user_id).await?;

    Ok(Json(MessageResponse {
        message: "Bottle thrown back to sea!".to_string(),
    }))
}

/// Delete a writeup the caller owns
#[utoipa::path(
    delete,
    path = "/api/writeups/{id}",
    params(("id" = Uuid, Path, description = "Writeup ID")),
    responses(
        (status = 200, description = "Writeup deleted", body = MessageResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Writeup not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Writeups",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_writeup(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let user_id = auth_user.user_id()?;

    WriteupService::delete(&state.db, id, user_id).await?;

    Ok(Json(MessageResponse {
        message: "Writeup deleted successfully".to_string(),
    }))
}
