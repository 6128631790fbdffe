use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*, update, upsert::excluded};
use uuid::Uuid;

use crate::domain::entities::subscriptions::{InsertSubscriptionEntity, SubscriptionEntity};
use crate::domain::repositories::subscriptions::SubscriptionRepository;
use crate::domain::value_objects::enums::grant_statuses::GrantStatus;
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    schema::subscriptions,
};

pub struct SubscriptionPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SubscriptionPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionPostgres {
    async fn upsert_by_order_id(
        &self,
        insert_subscription_entity: InsertSubscriptionEntity,
    ) -> Result<SubscriptionEntity> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        // Re-delivery must not extend the entitlement window: the conflict
        // path leaves start_date, end_date and product_id untouched.
        let result = insert_into(subscriptions::table)
            .values(&insert_subscription_entity)
            .on_conflict(subscriptions::order_id)
            .do_update()
            .set((
                subscriptions::status.eq(excluded(subscriptions::status)),
                subscriptions::payment_id.eq(excluded(subscriptions::payment_id)),
                subscriptions::discord_id.eq(excluded(subscriptions::discord_id)),
            ))
            .returning(SubscriptionEntity::as_returning())
            .get_result::<SubscriptionEntity>(&mut conn)?;

        Ok(result)
    }

    async fn mark_grant_status(
        &self,
        subscription_id: Uuid,
        grant_status: GrantStatus,
    ) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        update(subscriptions::table.find(subscription_id))
            .set(subscriptions::grant_status.eq(grant_status.to_string()))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn find_by_id(&self, subscription_id: Uuid) -> Result<Option<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = subscriptions::table
            .find(subscription_id)
            .select(SubscriptionEntity::as_select())
            .first::<SubscriptionEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn list(&self) -> Result<Vec<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = subscriptions::table
            .order(subscriptions::created_at.desc())
            .select(SubscriptionEntity::as_select())
            .load::<SubscriptionEntity>(&mut conn)?;

        Ok(results)
    }

    async fn list_unresolved_grants(&self) -> Result<Vec<SubscriptionEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let unresolved = vec![
            GrantStatus::Pending.to_string(),
            GrantStatus::GrantFailed.to_string(),
        ];

        let results = subscriptions::table
            .filter(subscriptions::grant_status.eq_any(unresolved))
            .order(subscriptions::created_at.desc())
            .select(SubscriptionEntity::as_select())
            .load::<SubscriptionEntity>(&mut conn)?;

        Ok(results)
    }
}
