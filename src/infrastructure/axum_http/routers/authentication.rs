use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};

use crate::application::usecases::authentication::AuthenticationUseCase;
use crate::config::config_model::AdminAuth;
use crate::domain::repositories::admin_users::AdminUserRepository;
use crate::domain::value_objects::auth::LoginRequest;
use crate::infrastructure::axum_http::error_responses::into_error_response;
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    repositories::admin_users::AdminUserPostgres,
};

pub fn routes(db_pool: Arc<PgPoolSquad>, admin_auth: &AdminAuth) -> Router {
    let admin_user_repository = AdminUserPostgres::new(db_pool);
    let authentication_usecase =
        AuthenticationUseCase::new(Arc::new(admin_user_repository), admin_auth);

    Router::new()
        .route("/login", post(login))
        .with_state(Arc::new(authentication_usecase))
}

pub async fn login<A>(
    State(authentication_usecase): State<Arc<AuthenticationUseCase<A>>>,
    Json(login_request): Json<LoginRequest>,
) -> Response
where
    A: AdminUserRepository + Send + Sync + 'static,
{
    match authentication_usecase.login(login_request).await {
        Ok(login_response) => (StatusCode::OK, Json(login_response)).into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}
