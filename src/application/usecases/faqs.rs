use std::sync::Arc;

use tracing::{error, info};

use crate::application::usecases::errors::{ContentError, ContentResult};
use crate::domain::repositories::faqs::FaqRepository;
use crate::domain::value_objects::faqs::{FaqModel, InsertFaqModel};

pub struct FaqUseCase<F>
where
    F: FaqRepository + Send + Sync + 'static,
{
    faq_repo: Arc<F>,
}

impl<F> FaqUseCase<F>
where
    F: FaqRepository + Send + Sync + 'static,
{
    pub fn new(faq_repo: Arc<F>) -> Self {
        Self { faq_repo }
    }

    pub async fn list(&self) -> ContentResult<Vec<FaqModel>> {
        let faqs = self.faq_repo.list().await.map_err(|err| {
            error!(db_error = ?err, "faqs: failed to list faqs");
            ContentError::Internal(err)
        })?;

        Ok(faqs.into_iter().map(FaqModel::from).collect())
    }

    pub async fn create(&self, insert_faq_model: InsertFaqModel) -> ContentResult<FaqModel> {
        let created = self
            .faq_repo
            .create(insert_faq_model.to_entity())
            .await
            .map_err(|err| {
                error!(db_error = ?err, "faqs: failed to create faq");
                ContentError::Internal(err)
            })?;

        info!(faq_id = created.id, "faqs: faq created");
        Ok(FaqModel::from(created))
    }

    pub async fn update(
        &self,
        faq_id: i32,
        insert_faq_model: InsertFaqModel,
    ) -> ContentResult<FaqModel> {
        let updated = self
            .faq_repo
            .update(faq_id, insert_faq_model.to_entity())
            .await
            .map_err(|err| {
                error!(faq_id, db_error = ?err, "faqs: failed to update faq");
                ContentError::Internal(err)
            })?
            .ok_or(ContentError::NotFound)?;

        Ok(FaqModel::from(updated))
    }

    pub async fn delete(&self, faq_id: i32) -> ContentResult<()> {
        let deleted = self.faq_repo.delete(faq_id).await.map_err(|err| {
            error!(faq_id, db_error = ?err, "faqs: failed to delete faq");
            ContentError::Internal(err)
        })?;

        if !deleted {
            return Err(ContentError::NotFound);
        }

        info!(faq_id, "faqs: faq deleted");
        Ok(())
    }
}
