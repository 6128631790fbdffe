use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*};

use crate::domain::entities::admin_users::{AdminUserEntity, InsertAdminUserEntity};
use crate::domain::repositories::admin_users::AdminUserRepository;
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::admin_users,
};

pub struct AdminUserPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl AdminUserPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl AdminUserRepository for AdminUserPostgres {
    async fn find_by_username(&self, username: &str) -> Result<Option<AdminUserEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = admin_users::table
            .filter(admin_users::username.eq(username))
            .select(AdminUserEntity::as_select())
            .first::<AdminUserEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn seed(&self, insert_admin_user_entity: InsertAdminUserEntity) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        insert_into(admin_users::table)
            .values(&insert_admin_user_entity)
            .on_conflict(admin_users::username)
            .do_nothing()
            .execute(&mut conn)?;

        Ok(())
    }
}
