mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{access_token_for, create_test_user, create_test_writeup};
use driftbottle::config::cors::CorsConfig;
use driftbottle::config::jwt::JwtConfig;
use driftbottle::router::init_router;
use driftbottle::state::AppState;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

async fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

fn user_info_request(user_id: Uuid) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/api/user-info")
        .header(
            header::AUTHORIZATION,
            format!("Bearer {}", access_token_for(user_id)),
        )
        .body(Body::empty())
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_user_info_aggregates_posts_and_likes(pool: PgPool) {
    let user = create_test_user(&pool, "pass").await;

    let first = create_test_writeup(&pool, user.id, "first", true).await;
    create_test_writeup(&pool, user.id, "second", false).await;
    sqlx::query("UPDATE writeups SET likes = 3 WHERE id = $1")
        .bind(first)
        .execute(&pool)
        .await
        .unwrap();

    let app = setup_test_app(pool).await;

    let response = app.oneshot(user_info_request(user.id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body["name"], "Test User");
    assert_eq!(body["email"], user.email);
    assert_eq!(body["postCount"], 2);
    assert_eq!(body["totalLikes"], 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_user_info_with_no_writeups(pool: PgPool) {
    let user = create_test_user(&pool, "pass").await;
    let app = setup_test_app(pool).await;

    let response = app.oneshot(user_info_request(user.id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body["postCount"], 0);
    assert_eq!(body["totalLikes"], 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_user_info_unknown_user(pool: PgPool) {
    // A well-formed token whose subject no longer exists.
    let app = setup_test_app(pool).await;

    let response = app.oneshot(user_info_request(Uuid::new_v4())).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_user_info_requires_token(pool: PgPool) {
    let app = setup_test_app(pool).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/user-info")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
