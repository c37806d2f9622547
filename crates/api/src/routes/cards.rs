use anyhow::anyhow;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use cardweaver_cards::{Card, CreateCard};
use cardweaver_database::{OrderDirection, SqlxCrud};

use crate::global_state::GlobalState;
use crate::response::AppError;

/// Listing order: newest first. The id tie-break keeps the order
/// deterministic when two rows share a transaction timestamp.
const LIST_ORDER: &[(&str, OrderDirection)] = &[
    ("created_at", OrderDirection::Desc),
    ("id", OrderDirection::Desc),
];

pub fn card_routes() -> Router<GlobalState> {
    Router::new()
        .route("/api/cards", get(list_cards))
        .route("/api/cards", post(create_card))
        .route("/api/cards/{id}", get(get_card))
}

async fn list_cards(
    State(state): State<GlobalState>,
) -> Result<Json<Vec<Card>>, AppError> {
    let cards = Card::find_all_ordered(LIST_ORDER, state.db.pool()).await?;
    Ok(Json(cards))
}

async fn get_card(
    State(state): State<GlobalState>,
    Path(id): Path<i32>,
) -> Result<Json<Card>, AppError> {
    let card = Card::find_by_id(id, state.db.pool()).await?
        .ok_or(AppError::new(StatusCode::NOT_FOUND, anyhow!("Card not found")))?;
    Ok(Json(card))
}

async fn create_card(
    State(state): State<GlobalState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Card>), AppError> {
    let payload = CreateCard::parse(&body).map_err(AppError::validation)?;
    let card = payload.into_card().create(state.db.pool()).await?;
    Ok((StatusCode::CREATED, Json(card)))
}
