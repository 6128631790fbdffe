use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};

use crate::application::usecases::features::FeatureUseCase;
use crate::domain::repositories::features::FeatureRepository;
use crate::domain::value_objects::features::InsertFeatureModel;
use crate::infrastructure::axum_http::{auth::AuthAdmin, error_responses::into_error_response};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    repositories::features::FeaturePostgres,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let feature_repository = FeaturePostgres::new(db_pool);
    let feature_usecase = FeatureUseCase::new(Arc::new(feature_repository));

    Router::new()
        .route("/", get(list))
        .route("/", post(create))
        .route("/:feature_id", put(update))
        .route("/:feature_id", delete(remove))
        .with_state(Arc::new(feature_usecase))
}

pub async fn list<F>(State(feature_usecase): State<Arc<FeatureUseCase<F>>>) -> Response
where
    F: FeatureRepository + Send + Sync + 'static,
{
    match feature_usecase.list().await {
        Ok(features) => (StatusCode::OK, Json(features)).into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}

pub async fn create<F>(
    State(feature_usecase): State<Arc<FeatureUseCase<F>>>,
    _admin: AuthAdmin,
    Json(insert_feature_model): Json<InsertFeatureModel>,
) -> Response
where
    F: FeatureRepository + Send + Sync + 'static,
{
    match feature_usecase.create(insert_feature_model).await {
        Ok(feature) => (StatusCode::OK, Json(feature)).into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}

pub async fn update<F>(
    State(feature_usecase): State<Arc<FeatureUseCase<F>>>,
    _admin: AuthAdmin,
    Path(feature_id): Path<i32>,
    Json(insert_feature_model): Json<InsertFeatureModel>,
) -> Response
where
    F: FeatureRepository + Send + Sync + 'static,
{
    match feature_usecase.update(feature_id, insert_feature_model).await {
        Ok(feature) => (StatusCode::OK, Json(feature)).into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}

pub async fn remove<F>(
    State(feature_usecase): State<Arc<FeatureUseCase<F>>>,
    _admin: AuthAdmin,
    Path(feature_id): Path<i32>,
) -> Response
where
    F: FeatureRepository + Send + Sync + 'static,
{
    match feature_usecase.delete(feature_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true })),
        )
            .into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}
