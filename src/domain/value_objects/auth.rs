use serde::{Deserialize, Serialize};

use crate::domain::entities::admin_users::AdminUserEntity;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminUserDto {
    pub id: i32,
    pub username: String,
    pub role: String,
}

impl From<AdminUserEntity> for AdminUserDto {
    fn from(value: AdminUserEntity) -> Self {
        Self {
            id: value.id,
            username: value.username,
            role: value.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AdminUserDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: i32,
    pub username: String,
    pub role: String,
    pub exp: usize,
}
