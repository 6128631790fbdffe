use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};

use crate::domain::entities::features::{FeatureEntity, InsertFeatureEntity};
use crate::domain::repositories::features::FeatureRepository;
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::features,
};

pub struct FeaturePostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl FeaturePostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl FeatureRepository for FeaturePostgres {
    async fn list(&self) -> Result<Vec<FeatureEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = features::table
            .order(features::id.asc())
            .select(FeatureEntity::as_select())
            .load::<FeatureEntity>(&mut conn)?;

        Ok(results)
    }

    async fn create(&self, insert_feature_entity: InsertFeatureEntity) -> Result<FeatureEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(features::table)
            .values(&insert_feature_entity)
            .returning(FeatureEntity::as_returning())
            .get_result::<FeatureEntity>(&mut conn)?;

        Ok(result)
    }

    async fn update(
        &self,
        feature_id: i32,
        insert_feature_entity: InsertFeatureEntity,
    ) -> Result<Option<FeatureEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(features::table.find(feature_id))
            .set(&insert_feature_entity)
            .returning(FeatureEntity::as_returning())
            .get_result::<FeatureEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, feature_id: i32) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = delete(features::table.find(feature_id)).execute(&mut conn)?;

        Ok(affected > 0)
    }
}
