use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::features::{FeatureEntity, InsertFeatureEntity};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeatureRepository {
    async fn list(&self) -> Result<Vec<FeatureEntity>>;
    async fn create(&self, insert_feature_entity: InsertFeatureEntity) -> Result<FeatureEntity>;
    async fn update(
        &self,
        feature_id: i32,
        insert_feature_entity: InsertFeatureEntity,
    ) -> Result<Option<FeatureEntity>>;
    async fn delete(&self, feature_id: i32) -> Result<bool>;
}
