use axum::{Json, extract::State, http::HeaderMap};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, player_id};
use crate::api::types::{AlbumEntryDto, AlbumSeriesDto};

pub async fn list_album(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<Vec<AlbumEntryDto>>>, ApiError> {
    let player = player_id(&headers)?;
    let entries = state.shared.album_service.all(player).await?;
    Ok(Json(ApiResponse::success(entries)))
}

pub async fn list_by_series(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<Vec<AlbumSeriesDto>>>, ApiError> {
    let player = player_id(&headers)?;
    let groups = state.shared.album_service.by_series(player).await?;
    Ok(Json(ApiResponse::success(groups)))
}
