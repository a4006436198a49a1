//! Writeup persistence and the claim state machine.
//!
//! Requests are handled concurrently with no in-process locking, so every
//! mutation here is a single conditional statement: the database decides
//! the winner and the affected-row count reports it. A zero-row outcome
//! only then triggers an existence probe to choose between "gone" and
//! "denied".

use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::writeups::model::{CreateWriteupDto, Writeup, WriteupWithAuthor};
use crate::utils::errors::AppError;

pub struct WriteupService;

impl WriteupService {
    /// All writeups visible to the viewer: public ones plus their own,
    /// newest first, annotated with the author's name.
    #[instrument(skip(db))]
    pub async fn list(db: &PgPool, viewer_id: Uuid) -> Result<Vec<WriteupWithAuthor>, AppError> {
        let writeups = sqlx::query_as::<_, WriteupWithAuthor>(
            r#"SELECT
                w.id, w.user_id, w.title, w.content, w.is_public,
                w.likes, w.claimed_by, w.created_at,
                u.name AS author_name
               FROM writeups w
               JOIN users u ON w.user_id = u.id
               WHERE w.is_public = TRUE OR w.user_id = $1
               ORDER BY w.created_at DESC"#,
        )
        .bind(viewer_id)
        .fetch_all(db)
        .await?;

        Ok(writeups)
    }

    /// Writeups the requester currently holds a claim on, newest first.
    #[instrument(skip(db))]
    pub async fn list_claimed_by(db: &PgPool, user_id: Uuid) -> Result<Vec<Writeup>, AppError> {
        let writeups = sqlx::query_as::<_, Writeup>(
            r#"SELECT id, user_id, title, content, is_public, likes, claimed_by, created_at
               FROM writeups
               WHERE claimed_by = $1
               ORDER BY created_at DESC"#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;

        Ok(writeups)
    }

    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateWriteupDto,
    ) -> Result<Writeup, AppError> {
        let writeup = sqlx::query_as::<_, Writeup>(
            r#"INSERT INTO writeups (user_id, title, content, is_public, likes, created_at)
               VALUES ($1, $2, $3, $4, 0, NOW())
               RETURNING id, user_id, title, content, is_public, likes, claimed_by, created_at"#,
        )
        .bind(user_id)
        .bind(&dto.title)
        .bind(&dto.content)
        .bind(dto.is_public)
        .fetch_one(db)
        .await?;

        Ok(writeup)
    }

    /// Atomic increment; the counter never goes through a read-then-write
    /// cycle in the application.
    #[instrument(skip(db))]
    pub async fn like(db: &PgPool, writeup_id: Uuid) -> Result<i32, AppError> {
        let likes = sqlx::query_scalar::<_, i32>(
            "UPDATE writeups SET likes = likes + 1 WHERE id = $1 RETURNING likes",
        )
        .bind(writeup_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Bottle Empty")))?;

        Ok(likes)
    }

    /// Atomic decrement floored at zero.
    #[instrument(skip(db))]
    pub async fn unlike(db: &PgPool, writeup_id: Uuid) -> Result<i32, AppError> {
        let likes = sqlx::query_scalar::<_, i32>(
            "UPDATE writeups SET likes = GREATEST(likes - 1, 0) WHERE id = $1 RETURNING likes",
        )
        .bind(writeup_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Bottle Empty")))?;

        Ok(likes)
    }

    /// Claims the writeup for the requester if and only if nobody holds it.
    ///
    /// The `claimed_by IS NULL` guard in the UPDATE makes the transition
    /// atomic: of two concurrent claimers exactly one sees a row update,
    /// the other falls through to the probe and gets the conflict error.
    #[instrument(skip(db))]
    pub async fn claim(db: &PgPool, writeup_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let result =
            sqlx::query("UPDATE writeups SET claimed_by = $1 WHERE id = $2 AND claimed_by IS NULL")
                .bind(user_id)
                .bind(writeup_id)
                .execute(db)
                .await?;

        if result.rows_affected() == 0 {
            if Self::exists(db, writeup_id).await? {
                return Err(AppError::bad_request(anyhow::anyhow!(
                    "Already claimed by someone else."
                )));
            }
            return Err(AppError::not_found(anyhow::anyhow!("Bottle Empty")));
        }

        Ok(())
    }

    /// Releases the requester's own claim. Claimed-by-another and
    /// not-claimed-at-all are both denied the same way; the requester
    /// cannot tell them apart.
    #[instrument(skip(db))]
    pub async fn unclaim(db: &PgPool, writeup_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let result =
            sqlx::query("UPDATE writeups SET claimed_by = NULL WHERE id = $1 AND claimed_by = $2")
                .bind(writeup_id)
                .bind(user_id)
                .execute(db)
                .await?;

        if result.rows_affected() == 0 {
            if Self::exists(db, writeup_id).await? {
                return Err(AppError::forbidden(anyhow::anyhow!(
                    "You can only unclaim your own claimed bottles"
                )));
            }
            return Err(AppError::not_found(anyhow::anyhow!("Bottle Empty")));
        }

        Ok(())
    }

    /// Deletes the writeup if the requester owns it.
    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, writeup_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM writeups WHERE id = $1 AND user_id = $2")
            .bind(writeup_id)
            .bind(user_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            if Self::exists(db, writeup_id).await? {
                return Err(AppError::forbidden(anyhow::anyhow!(
                    "Unauthorized to delete this writeup"
                )));
            }
            return Err(AppError::not_found(anyhow::anyhow!("Writeup not found")));
        }

        Ok(())
    }

    async fn exists(db: &PgPool, writeup_id: Uuid) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM writeups WHERE id = $1)",
        )
        .bind(writeup_id)
        .fetch_one(db)
        .await?;

        Ok(exists)
    }
}
