use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::subscriptions::SubscriptionEntity;
use crate::domain::value_objects::enums::grant_statuses::GrantStatus;

#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionModel {
    pub id: Uuid,
    pub order_id: String,
    pub payment_id: Option<String>,
    pub discord_id: String,
    pub wallet_address: Option<String>,
    pub product_id: Option<i32>,
    pub status: String,
    pub grant_status: GrantStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<SubscriptionEntity> for SubscriptionModel {
    fn from(value: SubscriptionEntity) -> Self {
        Self {
            id: value.id,
            order_id: value.order_id,
            payment_id: value.payment_id,
            discord_id: value.discord_id,
            wallet_address: value.wallet_address,
            product_id: value.product_id,
            status: value.status,
            grant_status: GrantStatus::from_str(&value.grant_status),
            start_date: value.start_date,
            end_date: value.end_date,
            created_at: value.created_at,
        }
    }
}
