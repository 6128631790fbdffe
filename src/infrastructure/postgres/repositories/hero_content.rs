use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*, update};

use crate::domain::entities::hero_content::{
    HeroContentEntity, InsertHeroContentEntity, UpdateHeroContentEntity,
};
use crate::domain::repositories::hero_content::HeroContentRepository;
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::hero_content,
};

// The hero banner is a singleton row with a fixed identity.
const HERO_CONTENT_ID: i32 = 1;

pub struct HeroContentPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl HeroContentPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl HeroContentRepository for HeroContentPostgres {
    async fn find(&self) -> Result<Option<HeroContentEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = hero_content::table
            .find(HERO_CONTENT_ID)
            .select(HeroContentEntity::as_select())
            .first::<HeroContentEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn update(
        &self,
        update_hero_content_entity: UpdateHeroContentEntity,
    ) -> Result<Option<HeroContentEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = update(hero_content::table.find(HERO_CONTENT_ID))
            .set(&update_hero_content_entity)
            .returning(HeroContentEntity::as_returning())
            .get_result::<HeroContentEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn seed(&self, insert_hero_content_entity: InsertHeroContentEntity) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        insert_into(hero_content::table)
            .values(&insert_hero_content_entity)
            .on_conflict(hero_content::id)
            .do_nothing()
            .execute(&mut conn)?;

        Ok(())
    }
}
