use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::utils::errors::AppError;
use crate::utils::jwt::{create_access_token, create_refresh_token, verify_refresh_token};
use crate::utils::password::{hash_password, verify_password};

use super::model::{LoginRequest, SignupRequest};

/// Tokens handed out on a successful login.
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct AuthService;

impl AuthService {
    /// Creates a user with a bcrypt-hashed password. The unique index on
    /// email is the single source of truth for duplicates.
    #[instrument(skip(db, dto))]
    pub async fn signup(db: &PgPool, dto: SignupRequest) -> Result<(), AppError> {
        let hashed_password = hash_password(&dto.password)?;

        sqlx::query("INSERT INTO users (name, email, password) VALUES ($1, $2, $3)")
            .bind(&dto.name)
            .bind(&dto.email)
            .bind(&hashed_password)
            .execute(db)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e
                    && db_err.is_unique_violation()
                {
                    return AppError::bad_request(anyhow::anyhow!("Email already exists."));
                }
                AppError::from(e)
            })?;

        Ok(())
    }

    /// Verifies credentials and issues an access/refresh token pair.
    ///
    /// Unknown email and wrong password produce the same error so the
    /// response does not reveal which one was off.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<SessionTokens, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserAuthRow {
            id: Uuid,
            password: String,
        }

        let user = sqlx::query_as::<_, UserAuthRow>(
            "SELECT id, password FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::bad_request(anyhow::anyhow!("Invalid credentials.")))?;

        let is_valid = verify_password(&dto.password, &user.password)?;
        if !is_valid {
            return Err(AppError::bad_request(anyhow::anyhow!("Invalid credentials.")));
        }

        Ok(SessionTokens {
            access_token: create_access_token(user.id, jwt_config)?,
            refresh_token: create_refresh_token(user.id, jwt_config)?,
        })
    }

    /// Mints a fresh access token from a still-valid refresh token.
    ///
    /// The refresh token itself is reused until its own expiry; it is not
    /// rotated per use. Known limitation: logout only clears the cookie,
    /// it cannot invalidate a refresh token a client kept elsewhere.
    #[instrument(skip(refresh_token, jwt_config))]
    pub fn refresh_access_token(
        refresh_token: &str,
        jwt_config: &JwtConfig,
    ) -> Result<String, AppError> {
        let claims = verify_refresh_token(refresh_token, jwt_config)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::forbidden(anyhow::anyhow!("Invalid refresh token")))?;

        create_access_token(user_id, jwt_config)
    }
}
