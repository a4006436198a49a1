use driftbottle::config::jwt::JwtConfig;
use driftbottle::utils::jwt::create_access_token;
use driftbottle::utils::password::hash_password;
use sqlx::PgPool;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

/// Insert a user directly, bypassing the signup endpoint.
#[allow(dead_code)]
pub async fn create_test_user(pool: &PgPool, password: &str) -> TestUser {
    let email = generate_unique_email();
    let hashed = hash_password(password).unwrap();

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind("Test User")
    .bind(&email)
    .bind(&hashed)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email,
        password: password.to_string(),
    }
}

#[allow(dead_code)]
pub async fn create_test_writeup(
    pool: &PgPool,
    user_id: Uuid,
    title: &str,
    is_public: bool,
) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO writeups (user_id, title, content, is_public) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(user_id)
    .bind(title)
    .bind("a note set adrift")
    .bind(is_public)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Mint a bearer token the way the login endpoint would, without going
/// through the HTTP surface.
#[allow(dead_code)]
pub fn access_token_for(user_id: Uuid) -> String {
    dotenvy::dotenv().ok();
    let jwt_config = JwtConfig::from_env();
    create_access_token(user_id, &jwt_config).unwrap()
}
