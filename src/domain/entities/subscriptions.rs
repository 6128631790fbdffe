use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::subscriptions;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = subscriptions)]
pub struct SubscriptionEntity {
    pub id: Uuid,
    pub order_id: String,
    pub payment_id: Option<String>,
    pub discord_id: String,
    pub wallet_address: Option<String>,
    pub product_id: Option<i32>,
    pub status: String,
    pub grant_status: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = subscriptions)]
pub struct InsertSubscriptionEntity {
    pub order_id: String,
    pub payment_id: Option<String>,
    pub discord_id: String,
    pub wallet_address: Option<String>,
    pub product_id: Option<i32>,
    pub status: String,
    pub grant_status: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}
