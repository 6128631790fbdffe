use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::testimonials::{InsertTestimonialEntity, TestimonialEntity};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TestimonialRepository {
    async fn list(&self) -> Result<Vec<TestimonialEntity>>;
    async fn create(
        &self,
        insert_testimonial_entity: InsertTestimonialEntity,
    ) -> Result<TestimonialEntity>;
    async fn update(
        &self,
        testimonial_id: i32,
        insert_testimonial_entity: InsertTestimonialEntity,
    ) -> Result<Option<TestimonialEntity>>;
    async fn delete(&self, testimonial_id: i32) -> Result<bool>;
}
