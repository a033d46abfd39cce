use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use serde::Serialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, player_id};
use crate::api::types::{
    AcquireUnitRequest, IdolizeResultDto, SupporterDto, SupporterRequest, UnitInfoDto,
};

pub async fn list_units(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<Vec<UnitInfoDto>>>, ApiError> {
    let player = player_id(&headers)?;
    let units = state.shared.unit_service.list_units(player).await?;
    Ok(Json(ApiResponse::success(units)))
}

pub async fn acquire_unit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<AcquireUnitRequest>,
) -> Result<Json<ApiResponse<UnitInfoDto>>, ApiError> {
    let player = player_id(&headers)?;
    let unit = state
        .shared
        .unit_service
        .acquire(player, payload.unit_id)
        .await?;
    Ok(Json(ApiResponse::success(unit)))
}

pub async fn get_unit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<UnitInfoDto>>, ApiError> {
    let player = player_id(&headers)?;
    let unit = state.shared.unit_service.get_unit(player, id).await?;
    Ok(Json(ApiResponse::success(unit)))
}

pub async fn dispose_unit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let player = player_id(&headers)?;
    state.shared.unit_service.dispose(player, id).await?;
    Ok(Json(ApiResponse::success(())))
}

pub async fn idolize_unit(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<IdolizeResultDto>>, ApiError> {
    let player = player_id(&headers)?;
    let result = state.shared.unit_service.idolize(player, id).await?;
    Ok(Json(ApiResponse::success(result)))
}

pub async fn set_center(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let player = player_id(&headers)?;
    state.shared.unit_service.set_center(player, id).await?;
    Ok(Json(ApiResponse::success(())))
}

pub async fn list_supporters(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<Vec<SupporterDto>>>, ApiError> {
    let player = player_id(&headers)?;
    let supporters = state.shared.unit_service.list_supporters(player).await?;
    Ok(Json(ApiResponse::success(supporters)))
}

pub async fn add_supporter(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<SupporterRequest>,
) -> Result<Json<ApiResponse<SupporterDto>>, ApiError> {
    let player = player_id(&headers)?;
    let supporter = state
        .shared
        .unit_service
        .add_supporter(player, payload.unit_id, payload.quantity)
        .await?;
    Ok(Json(ApiResponse::success(supporter)))
}

#[derive(Debug, Serialize)]
pub struct ConsumeSupporterDto {
    pub consumed: bool,
    pub unit_id: i32,
    pub amount: i64,
}

pub async fn consume_supporter(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<SupporterRequest>,
) -> Result<Json<ApiResponse<ConsumeSupporterDto>>, ApiError> {
    let player = player_id(&headers)?;
    let (consumed, supporter) = state
        .shared
        .unit_service
        .sub_supporter(player, payload.unit_id, payload.quantity)
        .await?;
    Ok(Json(ApiResponse::success(ConsumeSupporterDto {
        consumed,
        unit_id: supporter.unit_id,
        amount: supporter.amount,
    })))
}
