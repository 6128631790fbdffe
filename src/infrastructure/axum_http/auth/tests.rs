use super::*;
use axum::http::Request;
use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use std::env;

const SECRET: &str = "supersecretjwtsecretforunittesting123";

fn set_env_vars() {
    unsafe {
        env::set_var("JWT_ADMIN_SECRET", SECRET);
    }
}

fn token_with_exp(secret: &str, exp: usize) -> String {
    let claims = AdminClaims {
        sub: 1,
        username: "admin".to_string(),
        role: "admin".to_string(),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[test]
fn test_validate_admin_jwt_success() {
    set_env_vars();
    let token = token_with_exp(SECRET, 9999999999);

    let claims = validate_admin_jwt(&token).expect("Valid token should pass");
    assert_eq!(claims.sub, 1);
    assert_eq!(claims.username, "admin");
    assert_eq!(claims.role, "admin");
}

#[test]
fn test_validate_admin_jwt_expired() {
    set_env_vars();
    let expired = (Utc::now().timestamp() - 5) as usize;
    let token = token_with_exp(SECRET, expired);

    let result = validate_admin_jwt(&token);
    assert!(result.is_err());
}

#[test]
fn test_validate_admin_jwt_invalid_signature() {
    set_env_vars();
    let token = token_with_exp("wrongsecret", 9999999999);

    let result = validate_admin_jwt(&token);
    assert!(result.is_err());
}

#[tokio::test]
async fn missing_header_is_unauthorized() {
    set_env_vars();
    let request = Request::builder().uri("/").body(()).unwrap();
    let (mut parts, _) = request.into_parts();

    let rejection = AuthAdmin::from_request_parts(&mut parts, &())
        .await
        .unwrap_err();
    assert_eq!(rejection.0, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_token_is_forbidden() {
    set_env_vars();
    let expired = (Utc::now().timestamp() - 5) as usize;
    let token = token_with_exp(SECRET, expired);

    let request = Request::builder()
        .uri("/")
        .header("Authorization", format!("Bearer {}", token))
        .body(())
        .unwrap();
    let (mut parts, _) = request.into_parts();

    let rejection = AuthAdmin::from_request_parts(&mut parts, &())
        .await
        .unwrap_err();
    assert_eq!(rejection.0, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn malformed_header_is_forbidden() {
    set_env_vars();
    let request = Request::builder()
        .uri("/")
        .header("Authorization", "Token abcdef")
        .body(())
        .unwrap();
    let (mut parts, _) = request.into_parts();

    let rejection = AuthAdmin::from_request_parts(&mut parts, &())
        .await
        .unwrap_err();
    assert_eq!(rejection.0, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn valid_token_yields_the_admin_identity() {
    set_env_vars();
    let token = token_with_exp(SECRET, 9999999999);

    let request = Request::builder()
        .uri("/")
        .header("Authorization", format!("Bearer {}", token))
        .body(())
        .unwrap();
    let (mut parts, _) = request.into_parts();

    let admin = AuthAdmin::from_request_parts(&mut parts, &())
        .await
        .expect("valid token must be accepted");
    assert_eq!(admin.user_id, 1);
    assert_eq!(admin.username, "admin");
}
