//! Access and refresh token creation and verification.
//!
//! Both token kinds are HS256 JWTs carrying the user id. They are signed
//! with independent secrets and independent lifetimes: the access token is
//! short-lived and sent as a bearer header, the refresh token is long-lived
//! and only ever travels in an HTTP-only cookie. The server keeps no token
//! registry, so validity is purely signature + expiry.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::{Claims, RefreshTokenClaims};
use crate::utils::errors::AppError;

pub fn create_access_token(user_id: Uuid, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create access token: {}", e)))
}

pub fn create_refresh_token(user_id: Uuid, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.refresh_token_expiry as usize;

    let claims = RefreshTokenClaims {
        sub: user_id.to_string(),
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.refresh_secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create refresh token: {}", e)))
}

pub fn verify_access_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::forbidden(anyhow::anyhow!("Invalid token.")))
}

pub fn verify_refresh_token(
    token: &str,
    jwt_config: &JwtConfig,
) -> Result<RefreshTokenClaims, AppError> {
    decode::<RefreshTokenClaims>(
        token,
        &DecodingKey::from_secret(jwt_config.refresh_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::forbidden(anyhow::anyhow!("Invalid refresh token")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-access-secret-at-least-32-chars-long".to_string(),
            refresh_secret: "test-refresh-secret-at-least-32-chars-long".to_string(),
            access_token_expiry: 900,
            refresh_token_expiry: 604800,
        }
    }

    #[test]
    fn test_access_token_round_trip() {
        let config = get_test_jwt_config();
        let user_id = Uuid::new_v4();

        let token = create_access_token(user_id, &config).unwrap();
        assert!(!token.is_empty());

        let claims = verify_access_token(&token, &config).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
    }

    #[test]
    fn test_refresh_token_round_trip() {
        let config = get_test_jwt_config();
        let user_id = Uuid::new_v4();

        let token = create_refresh_token(user_id, &config).unwrap();
        let claims = verify_refresh_token(&token, &config).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_access_token_rejected_with_wrong_secret() {
        let config = get_test_jwt_config();
        let token = create_access_token(Uuid::new_v4(), &config).unwrap();

        let wrong_config = JwtConfig {
            secret: "a-completely-different-access-secret-key".to_string(),
            ..config
        };

        assert!(verify_access_token(&token, &wrong_config).is_err());
    }

    #[test]
    fn test_secrets_are_not_interchangeable() {
        let config = get_test_jwt_config();
        let user_id = Uuid::new_v4();

        let access = create_access_token(user_id, &config).unwrap();
        let refresh = create_refresh_token(user_id, &config).unwrap();

        // An access token never passes refresh verification and vice versa.
        assert!(verify_refresh_token(&access, &config).is_err());
        assert!(verify_access_token(&refresh, &config).is_err());
    }

    #[test]
    fn test_expired_access_token_is_rejected() {
        let config = get_test_jwt_config();
        let now = Utc::now().timestamp() as usize;

        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(verify_access_token(&token, &config).is_err());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let config = get_test_jwt_config();
        let mut token = create_refresh_token(Uuid::new_v4(), &config).unwrap();
        token.push('x');

        assert!(verify_refresh_token(&token, &config).is_err());
    }

    #[test]
    fn test_refresh_token_outlives_access_token() {
        let config = get_test_jwt_config();
        let user_id = Uuid::new_v4();

        let access = create_access_token(user_id, &config).unwrap();
        let refresh = create_refresh_token(user_id, &config).unwrap();

        let access_claims = verify_access_token(&access, &config).unwrap();
        let refresh_claims = verify_refresh_token(&refresh, &config).unwrap();

        assert!(refresh_claims.exp > access_claims.exp);
    }
}
