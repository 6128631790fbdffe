use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::subscriptions::{InsertSubscriptionEntity, SubscriptionEntity};
use crate::domain::value_objects::enums::grant_statuses::GrantStatus;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriptionRepository {
    /// Insert keyed by the provider order id. On conflict only `status`,
    /// `payment_id` and `discord_id` are overwritten; the entitlement window
    /// and package reference of the first delivery win.
    async fn upsert_by_order_id(
        &self,
        insert_subscription_entity: InsertSubscriptionEntity,
    ) -> Result<SubscriptionEntity>;

    async fn mark_grant_status(
        &self,
        subscription_id: Uuid,
        grant_status: GrantStatus,
    ) -> Result<()>;

    async fn find_by_id(&self, subscription_id: Uuid) -> Result<Option<SubscriptionEntity>>;
    async fn list(&self) -> Result<Vec<SubscriptionEntity>>;

    /// Rows whose role grant has not succeeded (`pending` or `grant_failed`).
    async fn list_unresolved_grants(&self) -> Result<Vec<SubscriptionEntity>>;
}
