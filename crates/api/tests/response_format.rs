use anyhow::{anyhow, Result};
use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{json, Value};

use cardweaver_api::AppError;
use cardweaver_cards::ValidationError;

async fn body_json(resp: axum::response::Response) -> Result<Value> {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn not_found_renders_message_only() -> Result<()> {
    let resp = AppError::new(StatusCode::NOT_FOUND, anyhow!("Card not found")).into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await?;
    assert_eq!(body, json!({ "message": "Card not found" }));
    Ok(())
}

#[tokio::test]
async fn validation_error_names_the_field() -> Result<()> {
    let err = ValidationError {
        field: "title",
        message: "title is required".to_string(),
    };
    let resp = AppError::validation(err).into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await?;
    assert_eq!(body, json!({ "message": "title is required", "field": "title" }));
    Ok(())
}

#[tokio::test]
async fn unhandled_errors_become_server_errors() -> Result<()> {
    let err: AppError = anyhow!("connection refused").into();
    assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);

    let resp = err.into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(resp).await?;
    assert_eq!(body["message"], json!("connection refused"));
    assert!(body.get("field").is_none());
    Ok(())
}
