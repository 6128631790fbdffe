use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::entities::hero_content::{HeroContentEntity, UpdateHeroContentEntity};

#[derive(Debug, Clone, Serialize)]
pub struct HeroContentModel {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub whatsapp_number: String,
    pub discord_invite_link: String,
}

impl From<HeroContentEntity> for HeroContentModel {
    fn from(value: HeroContentEntity) -> Self {
        Self {
            id: value.id,
            title: value.title,
            subtitle: value.subtitle,
            description: value.description,
            whatsapp_number: value.whatsapp_number,
            discord_invite_link: value.discord_invite_link,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateHeroContentModel {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub whatsapp_number: String,
    pub discord_invite_link: String,
}

impl UpdateHeroContentModel {
    pub fn to_entity(self) -> UpdateHeroContentEntity {
        UpdateHeroContentEntity {
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            whatsapp_number: self.whatsapp_number,
            discord_invite_link: self.discord_invite_link,
            updated_at: Utc::now(),
        }
    }
}
