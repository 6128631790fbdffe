use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use jsonwebtoken::{DecodingKey, Validation, decode};

use crate::config::config_loader;
use crate::domain::value_objects::auth::AdminClaims;

/// Authenticated admin identity, extracted from the bearer token on every
/// protected request. Missing credential → 401; presented but invalid or
/// expired → 403.
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    pub user_id: i32,
    pub username: String,
    pub role: String,
}

pub fn validate_admin_jwt(token: &str) -> Result<AdminClaims, anyhow::Error> {
    let secret = config_loader::get_admin_secret()
        .map_err(|e| anyhow::anyhow!("Failed to load admin secret: {}", e))?;

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    // Tokens are rejected strictly after their encoded expiry.
    validation.leeway = 0;

    let token_data = decode::<AdminClaims>(token, &decoding_key, &validation)
        .map_err(|e| anyhow::anyhow!("JWT validation failed: {}", e))?;

    Ok(token_data.claims)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthAdmin
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .ok_or((
                StatusCode::UNAUTHORIZED,
                "Missing Authorization header".to_string(),
            ))?;

        let auth_str = auth_header.to_str().map_err(|_| {
            (
                StatusCode::FORBIDDEN,
                "Invalid Authorization header".to_string(),
            )
        })?;

        if !auth_str.starts_with("Bearer ") {
            return Err((
                StatusCode::FORBIDDEN,
                "Invalid Authorization header format".to_string(),
            ));
        }

        let token = &auth_str[7..];

        let claims = validate_admin_jwt(token)
            .map_err(|e| (StatusCode::FORBIDDEN, e.to_string()))?;

        Ok(AuthAdmin {
            user_id: claims.sub,
            username: claims.username,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests;
