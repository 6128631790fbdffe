use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, delete, insert_into, prelude::*, update};

use crate::domain::entities::faqs::{FaqEntity, InsertFaqEntity};
use crate::domain::repositories::faqs::FaqRepository;
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::faqs,
};

pub struct FaqPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl FaqPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl FaqRepository for FaqPostgres {
    async fn list(&self) -> Result<Vec<FaqEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = faqs::table
            .order(faqs::id.asc())
            .select(FaqEntity::as_select())
            .load::<FaqEntity>(&mut conn)?;

        Ok(results)
    }

    async fn create(&self, insert_faq_entity: InsertFaqEntity) -> Result<FaqEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(faqs::table)
            .values(&insert_faq_entity)
            .returning(FaqEntity::as_returning())
            .get_result::<FaqEntity>(&mut conn)?;

        Ok(result)
    }

    async fn update(
        &self,
        faq_id: i32,
        insert_faq_entity: InsertFaqEntity,
    ) -> Result<Option<FaqEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(faqs::table.find(faq_id))
            .set(&insert_faq_entity)
            .returning(FaqEntity::as_returning())
            .get_result::<FaqEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn delete(&self, faq_id: i32) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = delete(faqs::table.find(faq_id)).execute(&mut conn)?;

        Ok(affected > 0)
    }
}
