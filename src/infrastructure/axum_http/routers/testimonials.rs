use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};

use crate::application::usecases::testimonials::TestimonialUseCase;
use crate::domain::repositories::testimonials::TestimonialRepository;
use crate::domain::value_objects::testimonials::InsertTestimonialModel;
use crate::infrastructure::axum_http::{auth::AuthAdmin, error_responses::into_error_response};
use crate::infrastructure::postgres::{
    postgres_connection::PgPoolSquad,
    repositories::testimonials::TestimonialPostgres,
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let testimonial_repository = TestimonialPostgres::new(db_pool);
    let testimonial_usecase = TestimonialUseCase::new(Arc::new(testimonial_repository));

    Router::new()
        .route("/", get(list))
        .route("/", post(create))
        .route("/:testimonial_id", put(update))
        .route("/:testimonial_id", delete(remove))
        .with_state(Arc::new(testimonial_usecase))
}

pub async fn list<T>(State(testimonial_usecase): State<Arc<TestimonialUseCase<T>>>) -> Response
where
    T: TestimonialRepository + Send + Sync + 'static,
{
    match testimonial_usecase.list().await {
        Ok(testimonials) => (StatusCode::OK, Json(testimonials)).into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}

pub async fn create<T>(
    State(testimonial_usecase): State<Arc<TestimonialUseCase<T>>>,
    _admin: AuthAdmin,
    Json(insert_testimonial_model): Json<InsertTestimonialModel>,
) -> Response
where
    T: TestimonialRepository + Send + Sync + 'static,
{
    match testimonial_usecase.create(insert_testimonial_model).await {
        Ok(testimonial) => (StatusCode::OK, Json(testimonial)).into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}

pub async fn update<T>(
    State(testimonial_usecase): State<Arc<TestimonialUseCase<T>>>,
    _admin: AuthAdmin,
    Path(testimonial_id): Path<i32>,
    Json(insert_testimonial_model): Json<InsertTestimonialModel>,
) -> Response
where
    T: TestimonialRepository + Send + Sync + 'static,
{
    match testimonial_usecase
        .update(testimonial_id, insert_testimonial_model)
        .await
    {
        Ok(testimonial) => (StatusCode::OK, Json(testimonial)).into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}

pub async fn remove<T>(
    State(testimonial_usecase): State<Arc<TestimonialUseCase<T>>>,
    _admin: AuthAdmin,
    Path(testimonial_id): Path<i32>,
) -> Response
where
    T: TestimonialRepository + Send + Sync + 'static,
{
    match testimonial_usecase.delete(testimonial_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "success": true })),
        )
            .into_response(),
        Err(err) => into_error_response(err.status_code(), err),
    }
}
