use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();

        let (status, message) = match &self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Conflict => (StatusCode::CONFLICT, "Resource already exists".to_string()),
            // Internal detail stays in the logs, never in the body.
            AppError::Database(_) => {
                tracing::error!(error = ?self, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AppError::Internal(_) => {
                tracing::error!(error = ?self, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };

        if status.is_client_error() {
            tracing::debug!(status = %status, code = code.as_str(), %message, "Request rejected");
        }

        let body = serde_json::json!({ "code": code.as_str(), "error": message });
        (status, Json(body)).into_response()
    }
}
