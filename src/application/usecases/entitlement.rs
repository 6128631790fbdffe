use std::sync::Arc;

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use thiserror::Error;
use tracing::{error, info, warn};
use url::Url;
use uuid::Uuid;

use crate::domain::entities::subscriptions::InsertSubscriptionEntity;
use crate::domain::repositories::packages::PackageRepository;
use crate::domain::repositories::subscriptions::SubscriptionRepository;
use crate::domain::value_objects::enums::grant_statuses::GrantStatus;
use crate::domain::value_objects::subscriptions::SubscriptionModel;
use crate::infrastructure::discord::role_client::DiscordRoleClient;
use crate::infrastructure::payments::nowpayments::IpnVerifier;
use crate::observability::discord::send_ops_alert;

/// Only this provider status releases the entitlement.
const FINISHED_PAYMENT_STATUS: &str = "finished";
/// Every package grants the same fixed window, independent of price.
const ENTITLEMENT_DAYS: i64 = 30;
const ACTIVE_SUBSCRIPTION_STATUS: &str = "active";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleGateway: Send + Sync {
    async fn grant_role(&self, discord_user_id: &str, role_id: &str) -> AnyResult<()>;
}

#[async_trait]
impl RoleGateway for DiscordRoleClient {
    async fn grant_role(&self, discord_user_id: &str, role_id: &str) -> AnyResult<()> {
        self.add_member_role(discord_user_id, role_id).await
    }
}

#[derive(Debug, Error)]
pub enum EntitlementError {
    #[error("invalid webhook signature")]
    InvalidSignature,
    #[error("subscription not found")]
    SubscriptionNotFound,
    #[error("no role is configured for this subscription")]
    NoRoleConfigured,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl EntitlementError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            EntitlementError::InvalidSignature => StatusCode::UNAUTHORIZED,
            EntitlementError::SubscriptionNotFound => StatusCode::NOT_FOUND,
            EntitlementError::NoRoleConfigured => StatusCode::CONFLICT,
            EntitlementError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// What a delivery did. Business-level rejections are outcomes, not errors:
/// the provider must never be told to retry them.
#[derive(Debug, PartialEq, Eq)]
pub enum WebhookOutcome {
    Ignored(&'static str),
    Processed {
        subscription_id: Uuid,
        grant_status: GrantStatus,
    },
}

pub struct EntitlementUseCase<P, S, R>
where
    P: PackageRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    R: RoleGateway + Send + Sync + 'static,
{
    package_repo: Arc<P>,
    subscription_repo: Arc<S>,
    role_gateway: Arc<R>,
    ipn_verifier: IpnVerifier,
    ops_webhook_url: Option<Url>,
}

impl<P, S, R> EntitlementUseCase<P, S, R>
where
    P: PackageRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    R: RoleGateway + Send + Sync + 'static,
{
    pub fn new(
        package_repo: Arc<P>,
        subscription_repo: Arc<S>,
        role_gateway: Arc<R>,
        ipn_verifier: IpnVerifier,
        ops_webhook_url: Option<Url>,
    ) -> Self {
        Self {
            package_repo,
            subscription_repo,
            role_gateway,
            ipn_verifier,
            ops_webhook_url,
        }
    }

    /// The webhook workflow: authenticate the caller, qualify the delivery,
    /// record the subscription, then attempt the role grant. The row is
    /// written before the grant so every attempt has an outcome record.
    pub async fn handle_payment_webhook(
        &self,
        payload: &[u8],
        signature: Option<&str>,
    ) -> Result<WebhookOutcome, EntitlementError> {
        let signature = signature.ok_or_else(|| {
            warn!("payment_webhook: missing signature header");
            EntitlementError::InvalidSignature
        })?;

        let webhook = self.ipn_verifier.verify(payload, signature).map_err(|err| {
            warn!(error = %err, "payment_webhook: signature verification failed");
            EntitlementError::InvalidSignature
        })?;

        info!(
            order_id = %webhook.order_id,
            payment_status = %webhook.payment_status,
            purchase_id = ?webhook.purchase_id,
            "payment_webhook: notification verified"
        );

        if webhook.payment_status != FINISHED_PAYMENT_STATUS {
            info!(
                order_id = %webhook.order_id,
                payment_status = %webhook.payment_status,
                "payment_webhook: ignoring non-finished payment"
            );
            return Ok(WebhookOutcome::Ignored("payment not finished"));
        }

        let discord_id = match webhook
            .order_description
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
        {
            Some(id) => id.to_string(),
            None => {
                warn!(
                    order_id = %webhook.order_id,
                    "payment_webhook: finished payment without a discord id"
                );
                return Ok(WebhookOutcome::Ignored("missing discord id"));
            }
        };

        let Some(purchase_id) = webhook.purchase_id else {
            warn!(
                order_id = %webhook.order_id,
                "payment_webhook: finished payment without a purchase id"
            );
            return Ok(WebhookOutcome::Ignored("missing purchase id"));
        };

        let package = self
            .package_repo
            .find_by_id(purchase_id)
            .await
            .map_err(|err| {
                error!(
                    order_id = %webhook.order_id,
                    purchase_id,
                    db_error = ?err,
                    "payment_webhook: failed to load package"
                );
                EntitlementError::Internal(err)
            })?;

        let Some(package) = package else {
            warn!(
                order_id = %webhook.order_id,
                purchase_id,
                "payment_webhook: purchase id does not match a package"
            );
            return Ok(WebhookOutcome::Ignored("unknown package"));
        };

        let Some(role_id) = package
            .discord_role_id
            .as_deref()
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .map(str::to_string)
        else {
            warn!(
                order_id = %webhook.order_id,
                package_id = package.id,
                "payment_webhook: package has no discord role configured"
            );
            return Ok(WebhookOutcome::Ignored("package has no discord role"));
        };

        let start_date = Utc::now();
        let end_date = start_date + Duration::days(ENTITLEMENT_DAYS);

        let subscription = self
            .subscription_repo
            .upsert_by_order_id(InsertSubscriptionEntity {
                order_id: webhook.order_id.clone(),
                payment_id: webhook.payment_id.clone(),
                discord_id: discord_id.clone(),
                wallet_address: webhook.pay_address.clone(),
                product_id: Some(package.id),
                status: ACTIVE_SUBSCRIPTION_STATUS.to_string(),
                grant_status: GrantStatus::Pending.to_string(),
                start_date,
                end_date,
            })
            .await
            .map_err(|err| {
                error!(
                    order_id = %webhook.order_id,
                    db_error = ?err,
                    "payment_webhook: failed to upsert subscription"
                );
                EntitlementError::Internal(err)
            })?;

        let grant_status = self
            .attempt_grant(subscription.id, &webhook.order_id, &discord_id, &role_id)
            .await?;

        info!(
            order_id = %webhook.order_id,
            subscription_id = %subscription.id,
            grant_status = %grant_status,
            "payment_webhook: delivery processed"
        );

        Ok(WebhookOutcome::Processed {
            subscription_id: subscription.id,
            grant_status,
        })
    }

    pub async fn list_subscriptions(&self) -> Result<Vec<SubscriptionModel>, EntitlementError> {
        let subscriptions = self.subscription_repo.list().await.map_err(|err| {
            error!(db_error = ?err, "subscriptions: failed to list subscriptions");
            EntitlementError::Internal(err)
        })?;

        Ok(subscriptions
            .into_iter()
            .map(SubscriptionModel::from)
            .collect())
    }

    pub async fn list_unresolved_grants(&self) -> Result<Vec<SubscriptionModel>, EntitlementError> {
        let subscriptions = self
            .subscription_repo
            .list_unresolved_grants()
            .await
            .map_err(|err| {
                error!(db_error = ?err, "subscriptions: failed to list unresolved grants");
                EntitlementError::Internal(err)
            })?;

        Ok(subscriptions
            .into_iter()
            .map(SubscriptionModel::from)
            .collect())
    }

    /// Operator-triggered re-attempt for a grant that failed or never ran.
    pub async fn retry_grant(
        &self,
        subscription_id: Uuid,
    ) -> Result<GrantStatus, EntitlementError> {
        let subscription = self
            .subscription_repo
            .find_by_id(subscription_id)
            .await
            .map_err(|err| {
                error!(
                    %subscription_id,
                    db_error = ?err,
                    "retry_grant: failed to load subscription"
                );
                EntitlementError::Internal(err)
            })?
            .ok_or(EntitlementError::SubscriptionNotFound)?;

        // The package may have been deleted since; the FK nulled the
        // reference and there is nothing left to grant.
        let product_id = subscription
            .product_id
            .ok_or(EntitlementError::NoRoleConfigured)?;

        let package = self
            .package_repo
            .find_by_id(product_id)
            .await
            .map_err(|err| {
                error!(
                    %subscription_id,
                    product_id,
                    db_error = ?err,
                    "retry_grant: failed to load package"
                );
                EntitlementError::Internal(err)
            })?
            .ok_or(EntitlementError::NoRoleConfigured)?;

        let role_id = package
            .discord_role_id
            .as_deref()
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .map(str::to_string)
            .ok_or(EntitlementError::NoRoleConfigured)?;

        self.attempt_grant(
            subscription.id,
            &subscription.order_id,
            &subscription.discord_id,
            &role_id,
        )
        .await
    }

    async fn attempt_grant(
        &self,
        subscription_id: Uuid,
        order_id: &str,
        discord_id: &str,
        role_id: &str,
    ) -> Result<GrantStatus, EntitlementError> {
        let grant_status = match self.role_gateway.grant_role(discord_id, role_id).await {
            Ok(()) => {
                info!(
                    order_id,
                    discord_id, role_id, "role_grant: role granted to member"
                );
                GrantStatus::Granted
            }
            Err(err) => {
                error!(
                    order_id,
                    discord_id,
                    role_id,
                    error = ?err,
                    "role_grant: failed to grant role"
                );
                self.send_grant_failure_alert(order_id, discord_id, role_id, &err)
                    .await;
                GrantStatus::GrantFailed
            }
        };

        self.subscription_repo
            .mark_grant_status(subscription_id, grant_status)
            .await
            .map_err(|err| {
                error!(
                    %subscription_id,
                    db_error = ?err,
                    "role_grant: failed to record grant outcome"
                );
                EntitlementError::Internal(err)
            })?;

        Ok(grant_status)
    }

    async fn send_grant_failure_alert(
        &self,
        order_id: &str,
        discord_id: &str,
        role_id: &str,
        grant_error: &anyhow::Error,
    ) {
        let Some(webhook_url) = self.ops_webhook_url.clone() else {
            return;
        };

        let content = format!(
            "**Role grant failed**\norder: `{}`\nmember: `{}`\nrole: `{}`\nerror: {}",
            order_id, discord_id, role_id, grant_error
        );

        if let Err(err) = send_ops_alert(webhook_url, content).await {
            warn!(error = %err, "role_grant: failed to send ops alert");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hmac::{Hmac, Mac};
    use sha2::Sha512;

    use crate::domain::entities::packages::PackageEntity;
    use crate::domain::entities::subscriptions::SubscriptionEntity;
    use crate::domain::repositories::packages::MockPackageRepository;
    use crate::domain::repositories::subscriptions::MockSubscriptionRepository;

    const IPN_SECRET: &str = "test-ipn-secret";

    fn sign(body: &str) -> String {
        let value: serde_json::Value = serde_json::from_str(body).unwrap();
        let canonical = serde_json::to_string(&value).unwrap();
        let mut mac = Hmac::<Sha512>::new_from_slice(IPN_SECRET.as_bytes()).unwrap();
        mac.update(canonical.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    fn usecase(
        package_repo: MockPackageRepository,
        subscription_repo: MockSubscriptionRepository,
        role_gateway: MockRoleGateway,
    ) -> EntitlementUseCase<MockPackageRepository, MockSubscriptionRepository, MockRoleGateway> {
        EntitlementUseCase::new(
            Arc::new(package_repo),
            Arc::new(subscription_repo),
            Arc::new(role_gateway),
            IpnVerifier::new(IPN_SECRET.to_string()),
            None,
        )
    }

    fn package_with_role(id: i32, role_id: Option<&str>) -> PackageEntity {
        PackageEntity {
            id,
            name: "VIP Signals".to_string(),
            price: bigdecimal::BigDecimal::from(49),
            description: None,
            features: serde_json::json!(["signals"]),
            popular: false,
            discord_role_id: role_id.map(str::to_string),
            payment_link: None,
        }
    }

    fn subscription_row(entity: &InsertSubscriptionEntity) -> SubscriptionEntity {
        SubscriptionEntity {
            id: Uuid::new_v4(),
            order_id: entity.order_id.clone(),
            payment_id: entity.payment_id.clone(),
            discord_id: entity.discord_id.clone(),
            wallet_address: entity.wallet_address.clone(),
            product_id: entity.product_id,
            status: entity.status.clone(),
            grant_status: entity.grant_status.clone(),
            start_date: entity.start_date,
            end_date: entity.end_date,
            created_at: entity.start_date,
        }
    }

    const FINISHED_BODY: &str = r#"{"payment_status":"finished","payment_id":"p-77","purchase_id":1,"order_id":"O-100","order_description":"123456789012345678","pay_address":"0xabc"}"#;

    #[tokio::test]
    async fn non_finished_payment_is_ignored_without_side_effects() {
        // Mocks have no expectations: any repository or gateway call panics.
        let body = r#"{"payment_status":"waiting","purchase_id":1,"order_id":"O-1","order_description":"42"}"#;
        let usecase = usecase(
            MockPackageRepository::new(),
            MockSubscriptionRepository::new(),
            MockRoleGateway::new(),
        );

        let outcome = usecase
            .handle_payment_webhook(body.as_bytes(), Some(&sign(body)))
            .await
            .unwrap();

        assert_eq!(outcome, WebhookOutcome::Ignored("payment not finished"));
    }

    #[tokio::test]
    async fn missing_discord_id_is_ignored_without_side_effects() {
        let body = r#"{"payment_status":"finished","purchase_id":1,"order_id":"O-2"}"#;
        let usecase = usecase(
            MockPackageRepository::new(),
            MockSubscriptionRepository::new(),
            MockRoleGateway::new(),
        );

        let outcome = usecase
            .handle_payment_webhook(body.as_bytes(), Some(&sign(body)))
            .await
            .unwrap();

        assert_eq!(outcome, WebhookOutcome::Ignored("missing discord id"));
    }

    #[tokio::test]
    async fn invalid_signature_is_rejected_before_any_side_effect() {
        let usecase = usecase(
            MockPackageRepository::new(),
            MockSubscriptionRepository::new(),
            MockRoleGateway::new(),
        );

        let missing = usecase
            .handle_payment_webhook(FINISHED_BODY.as_bytes(), None)
            .await
            .unwrap_err();
        assert!(matches!(missing, EntitlementError::InvalidSignature));

        let forged = usecase
            .handle_payment_webhook(FINISHED_BODY.as_bytes(), Some("deadbeef"))
            .await
            .unwrap_err();
        assert!(matches!(forged, EntitlementError::InvalidSignature));
        assert_eq!(forged.status_code(), axum::http::StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn finished_payment_grants_role_and_records_subscription() {
        let mut package_repo = MockPackageRepository::new();
        package_repo
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .once()
            .returning(|_| Ok(Some(package_with_role(1, Some("R1")))));

        let mut subscription_repo = MockSubscriptionRepository::new();
        subscription_repo
            .expect_upsert_by_order_id()
            .withf(|entity| {
                entity.order_id == "O-100"
                    && entity.payment_id.as_deref() == Some("p-77")
                    && entity.discord_id == "123456789012345678"
                    && entity.wallet_address.as_deref() == Some("0xabc")
                    && entity.product_id == Some(1)
                    && entity.status == "active"
                    && entity.grant_status == "pending"
                    && entity.end_date - entity.start_date == Duration::days(30)
            })
            .once()
            .returning(|entity| Ok(subscription_row(&entity)));
        subscription_repo
            .expect_mark_grant_status()
            .withf(|_, status| *status == GrantStatus::Granted)
            .once()
            .returning(|_, _| Ok(()));

        let mut role_gateway = MockRoleGateway::new();
        role_gateway
            .expect_grant_role()
            .withf(|discord_id, role_id| discord_id == "123456789012345678" && role_id == "R1")
            .once()
            .returning(|_, _| Ok(()));

        let usecase = usecase(package_repo, subscription_repo, role_gateway);
        let outcome = usecase
            .handle_payment_webhook(FINISHED_BODY.as_bytes(), Some(&sign(FINISHED_BODY)))
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            WebhookOutcome::Processed {
                grant_status: GrantStatus::Granted,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn unknown_package_and_roleless_package_are_ignored() {
        let mut package_repo = MockPackageRepository::new();
        package_repo.expect_find_by_id().returning(|_| Ok(None));
        let uc = usecase(
            package_repo,
            MockSubscriptionRepository::new(),
            MockRoleGateway::new(),
        );
        let outcome = uc
            .handle_payment_webhook(FINISHED_BODY.as_bytes(), Some(&sign(FINISHED_BODY)))
            .await
            .unwrap();
        assert_eq!(outcome, WebhookOutcome::Ignored("unknown package"));

        let mut package_repo = MockPackageRepository::new();
        package_repo
            .expect_find_by_id()
            .returning(|_| Ok(Some(package_with_role(1, None))));
        let usecase = usecase(
            package_repo,
            MockSubscriptionRepository::new(),
            MockRoleGateway::new(),
        );
        let outcome = usecase
            .handle_payment_webhook(FINISHED_BODY.as_bytes(), Some(&sign(FINISHED_BODY)))
            .await
            .unwrap();
        assert_eq!(
            outcome,
            WebhookOutcome::Ignored("package has no discord role")
        );
    }

    #[tokio::test]
    async fn grant_failure_is_recorded_and_not_surfaced_as_an_error() {
        let mut package_repo = MockPackageRepository::new();
        package_repo
            .expect_find_by_id()
            .returning(|_| Ok(Some(package_with_role(1, Some("R1")))));

        let mut subscription_repo = MockSubscriptionRepository::new();
        subscription_repo
            .expect_upsert_by_order_id()
            .returning(|entity| Ok(subscription_row(&entity)));
        subscription_repo
            .expect_mark_grant_status()
            .withf(|_, status| *status == GrantStatus::GrantFailed)
            .once()
            .returning(|_, _| Ok(()));

        let mut role_gateway = MockRoleGateway::new();
        role_gateway
            .expect_grant_role()
            .once()
            .returning(|_, _| Err(anyhow::anyhow!("discord is down")));

        let usecase = usecase(package_repo, subscription_repo, role_gateway);
        let outcome = usecase
            .handle_payment_webhook(FINISHED_BODY.as_bytes(), Some(&sign(FINISHED_BODY)))
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            WebhookOutcome::Processed {
                grant_status: GrantStatus::GrantFailed,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn retry_grant_flips_a_failed_grant_to_granted() {
        let subscription_id = Uuid::new_v4();
        let row = SubscriptionEntity {
            id: subscription_id,
            order_id: "O-100".to_string(),
            payment_id: Some("p-77".to_string()),
            discord_id: "123456789012345678".to_string(),
            wallet_address: None,
            product_id: Some(1),
            status: "active".to_string(),
            grant_status: GrantStatus::GrantFailed.to_string(),
            start_date: Utc::now(),
            end_date: Utc::now() + Duration::days(30),
            created_at: Utc::now(),
        };

        let mut subscription_repo = MockSubscriptionRepository::new();
        let found = row.clone();
        subscription_repo
            .expect_find_by_id()
            .withf(move |id| *id == subscription_id)
            .returning(move |_| Ok(Some(found.clone())));
        subscription_repo
            .expect_mark_grant_status()
            .withf(move |id, status| *id == subscription_id && *status == GrantStatus::Granted)
            .once()
            .returning(|_, _| Ok(()));

        let mut package_repo = MockPackageRepository::new();
        package_repo
            .expect_find_by_id()
            .returning(|_| Ok(Some(package_with_role(1, Some("R1")))));

        let mut role_gateway = MockRoleGateway::new();
        role_gateway
            .expect_grant_role()
            .once()
            .returning(|_, _| Ok(()));

        let usecase = usecase(package_repo, subscription_repo, role_gateway);
        let status = usecase.retry_grant(subscription_id).await.unwrap();
        assert_eq!(status, GrantStatus::Granted);
    }

    #[tokio::test]
    async fn retry_grant_maps_missing_rows_and_missing_roles() {
        let mut subscription_repo = MockSubscriptionRepository::new();
        subscription_repo.expect_find_by_id().returning(|_| Ok(None));
        let uc = usecase(
            MockPackageRepository::new(),
            subscription_repo,
            MockRoleGateway::new(),
        );
        assert!(matches!(
            uc.retry_grant(Uuid::new_v4()).await.unwrap_err(),
            EntitlementError::SubscriptionNotFound
        ));

        // Package deleted since the delivery: FK set the reference to null.
        let mut subscription_repo = MockSubscriptionRepository::new();
        subscription_repo.expect_find_by_id().returning(|_| {
            Ok(Some(SubscriptionEntity {
                id: Uuid::new_v4(),
                order_id: "O-1".to_string(),
                payment_id: None,
                discord_id: "42".to_string(),
                wallet_address: None,
                product_id: None,
                status: "active".to_string(),
                grant_status: GrantStatus::GrantFailed.to_string(),
                start_date: Utc::now(),
                end_date: Utc::now() + Duration::days(30),
                created_at: Utc::now(),
            }))
        });
        let usecase = usecase(
            MockPackageRepository::new(),
            subscription_repo,
            MockRoleGateway::new(),
        );
        assert!(matches!(
            usecase.retry_grant(Uuid::new_v4()).await.unwrap_err(),
            EntitlementError::NoRoleConfigured
        ));
    }
}
