use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
};
use serde::Serialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, player_id};
use crate::api::types::{GrantSkillRequest, RemovableSkillOwnedDto, RemovableSkillSummaryDto};

pub async fn summary(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<RemovableSkillSummaryDto>>, ApiError> {
    let player = player_id(&headers)?;
    let summary = state.shared.skill_service.summary(player).await?;
    Ok(Json(ApiResponse::success(summary)))
}

pub async fn grant(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<GrantSkillRequest>,
) -> Result<Json<ApiResponse<RemovableSkillOwnedDto>>, ApiError> {
    let player = player_id(&headers)?;
    let owned = state
        .shared
        .skill_service
        .grant(player, payload.removable_skill_id, payload.amount)
        .await?;
    Ok(Json(ApiResponse::success(owned)))
}

#[derive(Debug, Serialize)]
pub struct AttachmentChangeDto {
    pub changed: bool,
}

pub async fn attach_skill(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path((unit_owning_id, skill_id)): Path<(i64, i32)>,
) -> Result<Json<ApiResponse<AttachmentChangeDto>>, ApiError> {
    let player = player_id(&headers)?;
    let changed = state
        .shared
        .skill_service
        .attach(player, unit_owning_id, skill_id)
        .await?;
    Ok(Json(ApiResponse::success(AttachmentChangeDto { changed })))
}

pub async fn detach_skill(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path((unit_owning_id, skill_id)): Path<(i64, i32)>,
) -> Result<Json<ApiResponse<AttachmentChangeDto>>, ApiError> {
    let player = player_id(&headers)?;
    let changed = state
        .shared
        .skill_service
        .detach(player, unit_owning_id, skill_id)
        .await?;
    Ok(Json(ApiResponse::success(AttachmentChangeDto { changed })))
}
