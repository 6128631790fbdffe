use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};

use crate::application::usecases::packages::PackageUseCase;
use crate::domain::repositories::packages::PackageRepository;
use crate::domain::value_objects::packages::InsertPackageModel;
use crate::infrastructure::axum_http::{auth::AuthAdmin, error_responses::into_error_response};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    repositories::packages::PackagePostgres,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let package_repository = PackagePostgres::new(db_pool);
    let package_usecase = PackageUseCase::new(Arc::new(package_repository));

    Router::new()
        .route("/", get(list))
        .route("/", post(create))
        .route("/:package_id", put(update))
        .route("/:package_id", delete(remove))
        .with_state(Arc::new(package_usecase))
}

pub async fn list<P>(State(package_usecase): State<Arc<PackageUseCase<P>>>) -> Response
where
    P: PackageRepository + Send + Sync + 'static,
{
    match package_usecase.list().await {
        Ok(packages) => (StatusCode::OK, Json(packages)).into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}

pub async fn create<P>(
    State(package_usecase): State<Arc<PackageUseCase<P>>>,
    _admin: AuthAdmin,
    Json(insert_package_model): Json<InsertPackageModel>,
) -> Response
where
    P: PackageRepository + Send + Sync + 'static,
{
    match package_usecase.create(insert_package_model).await {
        Ok(package) => (StatusCode::OK, Json(package)).into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}

pub async fn update<P>(
    State(package_usecase): State<Arc<PackageUseCase<P>>>,
    _admin: AuthAdmin,
    Path(package_id): Path<i32>,
    Json(insert_package_model): Json<InsertPackageModel>,
) -> Response
where
    P: PackageRepository + Send + Sync + 'static,
{
    match package_usecase.update(package_id, insert_package_model).await {
        Ok(package) => (StatusCode::OK, Json(package)).into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}

pub async fn remove<P>(
    State(package_usecase): State<Arc<PackageUseCase<P>>>,
    _admin: AuthAdmin,
    Path(package_id): Path<i32>,
) -> Response
where
    P: PackageRepository + Send + Sync + 'static,
{
    match package_usecase.delete(package_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true })),
        )
            .into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}
