use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::faqs::{FaqEntity, InsertFaqEntity};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FaqRepository {
    async fn list(&self) -> Result<Vec<FaqEntity>>;
    async fn create(&self, insert_faq_entity: InsertFaqEntity) -> Result<FaqEntity>;
    async fn update(
        &self,
        faq_id: i32,
        insert_faq_entity: InsertFaqEntity,
    ) -> Result<Option<FaqEntity>>;
    async fn delete(&self, faq_id: i32) -> Result<bool>;
}
