use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};

use crate::application::usecases::faqs::FaqUseCase;
use crate::domain::repositories::faqs::FaqRepository;
use crate::domain::value_objects::faqs::InsertFaqModel;
use crate::infrastructure::axum_http::{auth::AuthAdmin, error_responses::into_error_response};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    repositories::faqs::FaqPostgres,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let faq_repository = FaqPostgres::new(db_pool);
    let faq_usecase = FaqUseCase::new(Arc::new(faq_repository));

    Router::new()
        .route("/", get(list))
        .route("/", post(create))
        .route("/:faq_id", put(update))
        .route("/:faq_id", delete(remove))
        .with_state(Arc::new(faq_usecase))
}

pub async fn list<F>(State(faq_usecase): State<Arc<FaqUseCase<F>>>) -> Response
where
    F: FaqRepository + Send + Sync + 'static,
{
    match faq_usecase.list().await {
        Ok(faqs) => (StatusCode::OK, Json(faqs)).into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}

pub async fn create<F>(
    State(faq_usecase): State<Arc<FaqUseCase<F>>>,
    _admin: AuthAdmin,
    Json(insert_faq_model): Json<InsertFaqModel>,
) -> Response
where
    F: FaqRepository + Send + Sync + 'static,
{
    match faq_usecase.create(insert_faq_model).await {
        Ok(faq) => (StatusCode::OK, Json(faq)).into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}

pub async fn update<F>(
    State(faq_usecase): State<Arc<FaqUseCase<F>>>,
    _admin: AuthAdmin,
    Path(faq_id): Path<i32>,
    Json(insert_faq_model): Json<InsertFaqModel>,
) -> Response
where
    F: FaqRepository + Send + Sync + 'static,
{
    match faq_usecase.update(faq_id, insert_faq_model).await {
        Ok(faq) => (StatusCode::OK, Json(faq)).into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}

pub async fn remove<F>(
    State(faq_usecase): State<Arc<FaqUseCase<F>>>,
    _admin: AuthAdmin,
    Path(faq_id): Path<i32>,
) -> Response
where
    F: FaqRepository + Send + Sync + 'static,
{
    match faq_usecase.delete(faq_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true })),
        )
            .into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}
