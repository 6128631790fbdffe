use std::sync::Arc;

use tracing::{error, info};

use crate::application::usecases::errors::{ContentError, ContentResult};
use crate::domain::repositories::hero_content::HeroContentRepository;
use crate::domain::value_objects::hero_content::{HeroContentModel, UpdateHeroContentModel};

pub struct HeroContentUseCase<H>
where
    H: HeroContentRepository + Send + Sync + 'static,
{
    hero_content_repo: Arc<H>,
}

impl<H> HeroContentUseCase<H>
where
    H: HeroContentRepository + Send + Sync + 'static,
{
    pub fn new(hero_content_repo: Arc<H>) -> Self {
        Self { hero_content_repo }
    }

    pub async fn get(&self) -> ContentResult<HeroContentModel> {
        let hero = self
            .hero_content_repo
            .find()
            .await
            .map_err(|err| {
                error!(db_error = ?err, "hero_content: failed to load hero row");
                ContentError::Internal(err)
            })?
            .ok_or(ContentError::NotFound)?;

        Ok(HeroContentModel::from(hero))
    }

    pub async fn update(
        &self,
        update_hero_content_model: UpdateHeroContentModel,
    ) -> ContentResult<HeroContentModel> {
        let updated = self
            .hero_content_repo
            .update(update_hero_content_model.to_entity())
            .await
            .map_err(|err| {
                error!(db_error = ?err, "hero_content: failed to update hero row");
                ContentError::Internal(err)
            })?
            .ok_or(ContentError::NotFound)?;

        info!("hero_content: hero row updated");
        Ok(HeroContentModel::from(updated))
    }
}
