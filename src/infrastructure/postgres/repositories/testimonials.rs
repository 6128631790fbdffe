use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};

use crate::domain::entities::testimonials::{InsertTestimonialEntity, TestimonialEntity};
use crate::domain::repositories::testimonials::TestimonialRepository;
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::testimonials,
};

pub struct TestimonialPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl TestimonialPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl TestimonialRepository for TestimonialPostgres {
    async fn list(&self) -> Result<Vec<TestimonialEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = testimonials::table
            .order(testimonials::id.asc())
            .select(TestimonialEntity::as_select())
            .load::<TestimonialEntity>(&mut conn)?;

        Ok(results)
    }

    async fn create(
        &self,
        insert_testimonial_entity: InsertTestimonialEntity,
    ) -> Result<TestimonialEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(testimonials::table)
            .values(&insert_testimonial_entity)
            .returning(TestimonialEntity::as_returning())
            .get_result::<TestimonialEntity>(&mut conn)?;

        Ok(result)
    }

    async fn update(
        &self,
        testimonial_id: i32,
        insert_testimonial_entity: InsertTestimonialEntity,
    ) -> Result<Option<TestimonialEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(testimonials::table.find(testimonial_id))
            .set(&insert_testimonial_entity)
            .returning(TestimonialEntity::as_returning())
            .get_result::<TestimonialEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, testimonial_id: i32) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = delete(testimonials::table.find(testimonial_id)).execute(&mut conn)?;

        Ok(affected > 0)
    }
}
