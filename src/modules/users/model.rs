use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Profile summary for the authenticated user: identity plus aggregate
/// counts over their writeups.
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoResponse {
    pub name: String,
    pub email: String,
    pub post_count: i64,
    pub total_likes: i64,
}
