use axum::{Json, extract::State, http::HeaderMap};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, player_id};
use crate::api::types::{CreatePlayerRequest, PlayerDto};

pub async fn create_player(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePlayerRequest>,
) -> Result<Json<ApiResponse<PlayerDto>>, ApiError> {
    let locale = payload.locale.as_deref().unwrap_or("en");
    let player = state
        .shared
        .player_service
        .create(&payload.name, locale)
        .await?;
    Ok(Json(ApiResponse::success(player)))
}

pub async fn get_player(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<PlayerDto>>, ApiError> {
    let id = player_id(&headers)?;
    let player = state.shared.player_service.get(id).await?;
    Ok(Json(ApiResponse::success(player)))
}
