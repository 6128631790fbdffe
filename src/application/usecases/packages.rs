use std::sync::Arc;

use tracing::{error, info};

use crate::application::usecases::errors::{ContentError, ContentResult};
use crate::domain::repositories::packages::PackageRepository;
use crate::domain::value_objects::packages::{InsertPackageModel, PackageModel};

pub struct PackageUseCase<P>
where
    P: PackageRepository + Send + Sync + 'static,
{
    package_repo: Arc<P>,
}

impl<P> PackageUseCase<P>
where
    P: PackageRepository + Send + Sync + 'static,
{
    pub fn new(package_repo: Arc<P>) -> Self {
        Self { package_repo }
    }

    pub async fn list(&self) -> ContentResult<Vec<PackageModel>> {
        let packages = self.package_repo.list().await.map_err(|err| {
            error!(db_error = ?err, "packages: failed to list packages");
            ContentError::Internal(err)
        })?;

        Ok(packages.into_iter().map(PackageModel::from).collect())
    }

    pub async fn create(
        &self,
        insert_package_model: InsertPackageModel,
    ) -> ContentResult<PackageModel> {
        let created = self
            .package_repo
            .create(insert_package_model.to_entity())
            .await
            .map_err(|err| {
                error!(db_error = ?err, "packages: failed to create package");
                ContentError::Internal(err)
            })?;

        info!(package_id = created.id, "packages: package created");
        Ok(PackageModel::from(created))
    }

    pub async fn update(
        &self,
        package_id: i32,
        insert_package_model: InsertPackageModel,
    ) -> ContentResult<PackageModel> {
        let updated = self
            .package_repo
            .update(package_id, insert_package_model.to_entity())
            .await
            .map_err(|err| {
                error!(package_id, db_error = ?err, "packages: failed to update package");
                ContentError::Internal(err)
            })?
            .ok_or(ContentError::NotFound)?;

        Ok(PackageModel::from(updated))
    }

    pub async fn delete(&self, package_id: i32) -> ContentResult<()> {
        let deleted = self.package_repo.delete(package_id).await.map_err(|err| {
            error!(package_id, db_error = ?err, "packages: failed to delete package");
            ContentError::Internal(err)
        })?;

        if !deleted {
            return Err(ContentError::NotFound);
        }

        info!(package_id, "packages: package deleted");
        Ok(())
    }
}
