use std::sync::Arc;

use tracing::{error, info};

use crate::application::usecases::errors::{ContentError, ContentResult};
use crate::domain::repositories::features::FeatureRepository;
use crate::domain::value_objects::features::{FeatureModel, InsertFeatureModel};

pub struct FeatureUseCase<F>
where
    F: FeatureRepository + Send + Sync + 'static,
{
    feature_repo: Arc<F>,
}

impl<F> FeatureUseCase<F>
where
    F: FeatureRepository + Send + Sync + 'static,
{
    pub fn new(feature_repo: Arc<F>) -> Self {
        Self { feature_repo }
    }

    pub async fn list(&self) -> ContentResult<Vec<FeatureModel>> {
        let features = self.feature_repo.list().await.map_err(|err| {
            error!(db_error = ?err, "features: failed to list features");
            ContentError::Internal(err)
        })?;

        Ok(features.into_iter().map(FeatureModel::from).collect())
    }

    pub async fn create(
        &self,
        insert_feature_model: InsertFeatureModel,
    ) -> ContentResult<FeatureModel> {
        let created = self
            .feature_repo
            .create(insert_feature_model.to_entity())
            .await
            .map_err(|err| {
                error!(db_error = ?err, "features: failed to create feature");
                ContentError::Internal(err)
            })?;

        info!(feature_id = created.id, "features: feature created");
        Ok(FeatureModel::from(created))
    }

    pub async fn update(
        &self,
        feature_id: i32,
        insert_feature_model: InsertFeatureModel,
    ) -> ContentResult<FeatureModel> {
        let updated = self
            .feature_repo
            .update(feature_id, insert_feature_model.to_entity())
            .await
            .map_err(|err| {
                error!(feature_id, db_error = ?err, "features: failed to update feature");
                ContentError::Internal(err)
            })?
            .ok_or(ContentError::NotFound)?;

        Ok(FeatureModel::from(updated))
    }

    pub async fn delete(&self, feature_id: i32) -> ContentResult<()> {
        let deleted = self.feature_repo.delete(feature_id).await.map_err(|err| {
            error!(feature_id, db_error = ?err, "features: failed to delete feature");
            ContentError::Internal(err)
        })?;

        if !deleted {
            return Err(ContentError::NotFound);
        }

        info!(feature_id, "features: feature deleted");
        Ok(())
    }
}
