use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::packages::{InsertPackageEntity, PackageEntity};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageRepository {
    async fn list(&self) -> Result<Vec<PackageEntity>>;
    async fn find_by_id(&self, package_id: i32) -> Result<Option<PackageEntity>>;
    async fn create(&self, insert_package_entity: InsertPackageEntity) -> Result<PackageEntity>;
    async fn update(
        &self,
        package_id: i32,
        insert_package_entity: InsertPackageEntity,
    ) -> Result<Option<PackageEntity>>;
    async fn delete(&self, package_id: i32) -> Result<bool>;
}
