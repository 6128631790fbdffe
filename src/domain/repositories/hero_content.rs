use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::hero_content::{
    HeroContentEntity, InsertHeroContentEntity, UpdateHeroContentEntity,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HeroContentRepository {
    async fn find(&self) -> Result<Option<HeroContentEntity>>;
    async fn update(
        &self,
        update_hero_content_entity: UpdateHeroContentEntity,
    ) -> Result<Option<HeroContentEntity>>;

    /// Inserts the default singleton row; a no-op when it already exists.
    async fn seed(&self, insert_hero_content_entity: InsertHeroContentEntity) -> Result<()>;
}
