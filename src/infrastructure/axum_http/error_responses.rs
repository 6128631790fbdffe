use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

/// Maps a usecase error onto a JSON error body. Server-side failures keep
/// their detail in the logs only; untrusted callers see a generic message.
pub fn into_error_response(status: StatusCode, error: impl ToString) -> Response {
    let message = if status.is_server_error() {
        "internal server error".to_string()
    } else {
        error.to_string()
    };

    let body = Json(ErrorResponse {
        code: status.as_u16(),
        message,
    });

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_masked() {
        let response = into_error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "connection to db at 10.0.0.5 refused",
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn client_errors_keep_their_message() {
        let response = into_error_response(StatusCode::NOT_FOUND, "resource not found");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
