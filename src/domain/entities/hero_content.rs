use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::postgres::schema::hero_content;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = hero_content)]
pub struct HeroContentEntity {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub whatsapp_number: String,
    pub discord_invite_link: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = hero_content)]
pub struct InsertHeroContentEntity {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub whatsapp_number: String,
    pub discord_invite_link: String,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = hero_content)]
pub struct UpdateHeroContentEntity {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub whatsapp_number: String,
    pub discord_invite_link: String,
    pub updated_at: DateTime<Utc>,
}
