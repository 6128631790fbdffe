use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::admin_users::{AdminUserEntity, InsertAdminUserEntity};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminUserEntity>>;

    /// Inserts the bootstrap admin account; a no-op when the username exists.
    async fn seed(&self, insert_admin_user_entity: InsertAdminUserEntity) -> Result<()>;
}
