use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};

use crate::domain::entities::packages::{InsertPackageEntity, PackageEntity};
use crate::domain::repositories::packages::PackageRepository;
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::packages,
};

pub struct PackagePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PackagePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PackageRepository for PackagePostgres {
    async fn list(&self) -> Result<Vec<PackageEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = packages::table
            .order(packages::id.asc())
            .select(PackageEntity::as_select())
            .load::<PackageEntity>(&mut conn)?;

        Ok(results)
    }

    async fn find_by_id(&self, package_id: i32) -> Result<Option<PackageEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = packages::table
            .find(package_id)
            .select(PackageEntity::as_select())
            .first::<PackageEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn create(&self, insert_package_entity: InsertPackageEntity) -> Result<PackageEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(packages::table)
            .values(&insert_package_entity)
            .returning(PackageEntity::as_returning())
            .get_result::<PackageEntity>(&mut conn)?;

        Ok(result)
    }

    async fn update(
        &self,
        package_id: i32,
        insert_package_entity: InsertPackageEntity,
    ) -> Result<Option<PackageEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(packages::table.find(package_id))
            .set(&insert_package_entity)
            .returning(PackageEntity::as_returning())
            .get_result::<PackageEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, package_id: i32) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        // Referencing subscriptions keep their row; the FK nulls product_id.
        let affected = delete(packages::table.find(package_id)).execute(&mut conn)?;

        Ok(affected > 0)
    }
}
