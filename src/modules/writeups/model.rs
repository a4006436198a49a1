use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Writeup {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub is_public: bool,
    pub likes: i32,
    pub claimed_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// A writeup row joined with its author's display name, as returned by
/// the listing endpoint.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct WriteupWithAuthor {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub is_public: bool,
    pub likes: i32,
    pub claimed_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub author_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWriteupDto {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    /// Private unless the author opts in.
    #[serde(default)]
    pub is_public: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LikesResponse {
    pub likes: i32,
}
