use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::UserInfoResponse;
use crate::utils::errors::AppError;

pub struct UserService;

impl UserService {
    /// Fetches the user's name and email together with their writeup
    /// count and accumulated likes in one aggregate query.
    #[instrument(skip(db))]
    pub async fn get_user_info(db: &PgPool, user_id: Uuid) -> Result<UserInfoResponse, AppError> {
        let info = sqlx::query_as::<_, UserInfoResponse>(
            r#"SELECT
                u.name,
                u.email,
                COUNT(w.id) AS post_count,
                COALESCE(SUM(w.likes), 0)::BIGINT AS total_likes
               FROM users u
               LEFT JOIN writeups w ON w.user_id = u.id
               WHERE u.id = $1
               GROUP BY u.id, u.name, u.email"#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))?;

        Ok(info)
    }
}
