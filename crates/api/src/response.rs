use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use cardweaver_cards::ValidationError;

// Our own error that wraps `anyhow::Error`, plus the offending field for
// payload-validation rejections.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub field: Option<&'static str>,
    pub source: anyhow::Error,
}

impl AppError {
    pub fn new(status: StatusCode, err: anyhow::Error) -> Self {
        Self { status, field: None, source: err }
    }

    pub fn validation(err: ValidationError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            field: Some(err.field),
            source: err.into(),
        }
    }
}

// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("CODE: {}, MESSAGE: {}", self.status.as_u16(), self.source);
        let body = match self.field {
            Some(field) => json!({ "message": self.source.to_string(), "field": field }),
            None => json!({ "message": self.source.to_string() }),
        };
        (self.status, Json(body)).into_response()
    }
}

// This enables using `?` on functions that return `Result<_, anyhow::Error>`
// to turn them into `Result<_, AppError>`. Anything not mapped explicitly is
// an unhandled persistence/infrastructure failure, so it surfaces as a
// generic server error.
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.into())
    }
}
