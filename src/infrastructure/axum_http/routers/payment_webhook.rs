use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::info;

use crate::application::usecases::entitlement::{EntitlementUseCase, RoleGateway};
use crate::config::config_model::DotEnvyConfig;
use crate::domain::repositories::packages::PackageRepository;
use crate::domain::repositories::subscriptions::SubscriptionRepository;
use crate::infrastructure::axum_http::error_responses::into_error_response;
use crate::infrastructure::discord::role_client::DiscordRoleClient;
use crate::infrastructure::payments::nowpayments::{IPN_SIGNATURE_HEADER, IpnVerifier};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    repositories::{packages::PackagePostgres, subscriptions::SubscriptionPostgres},
};

pub fn routes(db_pool: Arc<PgPoolSquad>, config: &DotEnvyConfig) -> Result<Router> {
    let package_repository = PackagePostgres::new(Arc::clone(&db_pool));
    let subscription_repository = SubscriptionPostgres::new(Arc::clone(&db_pool));
    let role_client = DiscordRoleClient::new(
        config.discord.bot_token.clone(),
        config.discord.guild_id.clone(),
    )?;

    let entitlement_usecase = EntitlementUseCase::new(
        Arc::new(package_repository),
        Arc::new(subscription_repository),
        Arc::new(role_client),
        IpnVerifier::new(config.payments.ipn_secret.clone()),
        config.discord.ops_webhook_url.clone(),
    );

    Ok(Router::new()
        .route("/webhook", post(payment_webhook))
        .with_state(Arc::new(entitlement_usecase)))
}

/// Business-level rejections (wrong status, unknown package, missing role)
/// still answer 200 so the provider does not retry them; only transport-level
/// failures signal an error status.
pub async fn payment_webhook<P, S, R>(
    State(entitlement_usecase): State<Arc<EntitlementUseCase<P, S, R>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    P: PackageRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    R: RoleGateway + Send + Sync + 'static,
{
    info!(payload_bytes = body.len(), "payment_webhook: delivery received");

    let signature = headers
        .get(IPN_SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());

    match entitlement_usecase
        .handle_payment_webhook(&body, signature)
        .await
    {
        Ok(_) => (StatusCode::OK, "Webhook processed").into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}
