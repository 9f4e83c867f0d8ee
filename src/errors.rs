use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("verification failed")]
    VerificationFailed,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // The transport only looks at the status; keep the body plain.
            AppError::VerificationFailed => {
                (StatusCode::FORBIDDEN, "Verification Failed").into_response()
            }
            AppError::Config(_) => {
                let body = serde_json::json!({ "error": self.to_string() });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}
