use std::sync::Arc;

use anyhow::Result;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use uuid::Uuid;

use crate::application::usecases::entitlement::{EntitlementUseCase, RoleGateway};
use crate::config::config_model::DotEnvyConfig;
use crate::domain::repositories::packages::PackageRepository;
use crate::domain::repositories::subscriptions::SubscriptionRepository;
use crate::infrastructure::axum_http::{auth::AuthAdmin, error_responses::into_error_response};
use crate::infrastructure::discord::role_client::DiscordRoleClient;
use crate::infrastructure::payments::nowpayments::IpnVerifier;
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    repositories::{packages::PackagePostgres, subscriptions::SubscriptionPostgres},
};

/// Operator surface over the grant outcome record: inspect deliveries whose
/// role grant did not succeed and re-attempt them by hand.
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
        .route("/", get(list))
        .route("/grant-failures", get(list_grant_failures))
        .route("/:subscription_id/retry-grant", post(retry_grant))
        .with_state(Arc::new(entitlement_usecase)))
}

pub async fn list<P, S, R>(
    State(entitlement_usecase): State<Arc<EntitlementUseCase<P, S, R>>>,
    _admin: AuthAdmin,
) -> Response
where
    P: PackageRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    R: RoleGateway + Send + Sync + 'static,
{
    match entitlement_usecase.list_subscriptions().await {
        Ok(subscriptions) => (StatusCode::OK, Json(subscriptions)).into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}

pub async fn list_grant_failures<P, S, R>(
    State(entitlement_usecase): State<Arc<EntitlementUseCase<P, S, R>>>,
    _admin: AuthAdmin,
) -> Response
where
    P: PackageRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    R: RoleGateway + Send + Sync + 'static,
{
    match entitlement_usecase.list_unresolved_grants().await {
        Ok(subscriptions) => (StatusCode::OK, Json(subscriptions)).into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}

pub async fn retry_grant<P, S, R>(
    State(entitlement_usecase): State<Arc<EntitlementUseCase<P, S, R>>>,
    _admin: AuthAdmin,
    Path(subscription_id): Path<Uuid>,
) -> Response
where
    P: PackageRepository + Send + Sync + 'static,
    S: SubscriptionRepository + Send + Sync + 'static,
    R: RoleGateway + Send + Sync + 'static,
{
    match entitlement_usecase.retry_grant(subscription_id).await {
        Ok(grant_status) => (
            StatusCode::OK,
            Json(serde_json::json!({ "grant_status": grant_status })),
        )
            .into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}
