use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, player_id};
use crate::api::types::{ApplyLoveRequest, DeckDto, LoveResultDto, SaveDeckRequest};

#[derive(Debug, Deserialize)]
pub struct GetDeckQuery {
    #[serde(default)]
    pub ensure: bool,
}

pub async fn get_deck(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(number): Path<i32>,
    Query(query): Query<GetDeckQuery>,
) -> Result<Json<ApiResponse<Option<DeckDto>>>, ApiError> {
    let player = player_id(&headers)?;
    let deck = state
        .shared
        .deck_service
        .get_deck(player, number, query.ensure)
        .await?;
    Ok(Json(ApiResponse::success(deck)))
}

pub async fn save_deck(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(number): Path<i32>,
    Json(payload): Json<SaveDeckRequest>,
) -> Result<Json<ApiResponse<DeckDto>>, ApiError> {
    let player = player_id(&headers)?;
    let deck = state
        .shared
        .deck_service
        .save_deck(player, number, payload.unit_owning_ids, payload.name)
        .await?;
    Ok(Json(ApiResponse::success(deck)))
}

pub async fn apply_love(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(number): Path<i32>,
    Json(payload): Json<ApplyLoveRequest>,
) -> Result<Json<ApiResponse<LoveResultDto>>, ApiError> {
    let player = player_id(&headers)?;
    let result = state
        .shared
        .deck_service
        .apply_love(player, number, payload.amount)
        .await?;
    Ok(Json(ApiResponse::success(result)))
}
