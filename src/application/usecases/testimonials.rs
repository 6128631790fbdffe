use std::sync::Arc;

use tracing::{error, info};

use crate::application::usecases::errors::{ContentError, ContentResult};
use crate::domain::repositories::testimonials::TestimonialRepository;
use crate::domain::value_objects::testimonials::{InsertTestimonialModel, TestimonialModel};

pub struct TestimonialUseCase<T>
where
    T: TestimonialRepository + Send + Sync + 'static,
{
    testimonial_repo: Arc<T>,
}

impl<T> TestimonialUseCase<T>
where
    T: TestimonialRepository + Send + Sync + 'static,
{
    pub fn new(testimonial_repo: Arc<T>) -> Self {
        Self { testimonial_repo }
    }

    pub async fn list(&self) -> ContentResult<Vec<TestimonialModel>> {
        let testimonials = self.testimonial_repo.list().await.map_err(|err| {
            error!(db_error = ?err, "testimonials: failed to list testimonials");
            ContentError::Internal(err)
        })?;

        Ok(testimonials
            .into_iter()
            .map(TestimonialModel::from)
            .collect())
    }

    pub async fn create(
        &self,
        insert_testimonial_model: InsertTestimonialModel,
    ) -> ContentResult<TestimonialModel> {
        let created = self
            .testimonial_repo
            .create(insert_testimonial_model.to_entity())
            .await
            .map_err(|err| {
                error!(db_error = ?err, "testimonials: failed to create testimonial");
                ContentError::Internal(err)
            })?;

        info!(testimonial_id = created.id, "testimonials: testimonial created");
        Ok(TestimonialModel::from(created))
    }

    pub async fn update(
        &self,
        testimonial_id: i32,
        insert_testimonial_model: InsertTestimonialModel,
    ) -> ContentResult<TestimonialModel> {
        let updated = self
            .testimonial_repo
            .update(testimonial_id, insert_testimonial_model.to_entity())
            .await
            .map_err(|err| {
                error!(testimonial_id, db_error = ?err, "testimonials: failed to update testimonial");
                ContentError::Internal(err)
            })?
            .ok_or(ContentError::NotFound)?;

        Ok(TestimonialModel::from(updated))
    }

    pub async fn delete(&self, testimonial_id: i32) -> ContentResult<()> {
        let deleted = self
            .testimonial_repo
            .delete(testimonial_id)
            .await
            .map_err(|err| {
                error!(testimonial_id, db_error = ?err, "testimonials: failed to delete testimonial");
                ContentError::Internal(err)
            })?;

        if !deleted {
            return Err(ContentError::NotFound);
        }

        info!(testimonial_id, "testimonials: testimonial deleted");
        Ok(())
    }
}
