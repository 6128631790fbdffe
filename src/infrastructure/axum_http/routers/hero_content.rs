use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};

use crate::application::usecases::hero_content::HeroContentUseCase;
use crate::domain::repositories::hero_content::HeroContentRepository;
use crate::domain::value_objects::hero_content::UpdateHeroContentModel;
use crate::infrastructure::axum_http::{auth::AuthAdmin, error_responses::into_error_response};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    repositories::hero_content::HeroContentPostgres,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let hero_content_repository = HeroContentPostgres::new(db_pool);
    let hero_content_usecase = HeroContentUseCase::new(Arc::new(hero_content_repository));

    Router::new()
        .route("/", get(get_hero))
        .route("/", put(update_hero))
        .with_state(Arc::new(hero_content_usecase))
}

pub async fn get_hero<H>(
    State(hero_content_usecase): State<Arc<HeroContentUseCase<H>>>,
) -> Response
where
    H: HeroContentRepository + Send + Sync + 'static,
{
    match hero_content_usecase.get().await {
        Ok(hero) => (StatusCode::OK, Json(hero)).into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}

pub async fn update_hero<H>(
    State(hero_content_usecase): State<Arc<HeroContentUseCase<H>>>,
    _admin: AuthAdmin,
    Json(update_hero_content_model): Json<UpdateHeroContentModel>,
) -> Response
where
    H: HeroContentRepository + Send + Sync + 'static,
{
    match hero_content_usecase.update(update_hero_content_model).await {
        Ok(hero) => (StatusCode::OK, Json(hero)).into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}
