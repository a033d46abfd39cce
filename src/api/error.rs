use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ApiResponse;
use crate::services::{AlbumError, DeckError, PlayerError, SkillError, UnitError};

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    DatabaseError(String),

    ValidationError(String),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ApiResponse::<()>::error(error_message);
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

impl From<UnitError> for ApiError {
    fn from(err: UnitError) -> Self {
        match err {
            UnitError::NotFound(_) | UnitError::TemplateNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            UnitError::Validation(msg) => ApiError::ValidationError(msg),
            UnitError::Integrity(msg) => ApiError::InternalError(msg),
            UnitError::Database(msg) => ApiError::DatabaseError(msg),
        }
    }
}

impl From<DeckError> for ApiError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::NotFound(_) => ApiError::NotFound(err.to_string()),
            DeckError::Validation(msg) => ApiError::ValidationError(msg),
            DeckError::Integrity(msg) => ApiError::InternalError(msg),
            DeckError::Database(msg) => ApiError::DatabaseError(msg),
        }
    }
}

impl From<SkillError> for ApiError {
    fn from(err: SkillError) -> Self {
        match err {
            SkillError::NotFound(_) | SkillError::UnitNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            SkillError::Validation(msg) => ApiError::ValidationError(msg),
            SkillError::Database(msg) => ApiError::DatabaseError(msg),
        }
    }
}

impl From<AlbumError> for ApiError {
    fn from(err: AlbumError) -> Self {
        match err {
            AlbumError::Database(msg) => ApiError::DatabaseError(msg),
        }
    }
}

impl From<PlayerError> for ApiError {
    fn from(err: PlayerError) -> Self {
        match err {
            PlayerError::NotFound(_) => ApiError::NotFound(err.to_string()),
            PlayerError::Validation(msg) => ApiError::ValidationError(msg),
            PlayerError::Database(msg) => ApiError::DatabaseError(msg),
        }
    }
}
