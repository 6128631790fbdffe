use thiserror::Error;

/// Error surface shared by the content-table usecases. Storage detail stays
/// in the logs; callers only see the status.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("resource not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ContentError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            ContentError::NotFound => StatusCode::NOT_FOUND,
            ContentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type ContentResult<T> = std::result::Result<T, ContentError>;
