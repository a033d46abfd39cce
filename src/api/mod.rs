use axum::{
    Router,
    http::{HeaderMap, HeaderValue},
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::SharedState;

mod album;
mod decks;
mod error;
mod players;
mod removable_skills;
mod system;
pub mod types;
mod units;

pub use error::ApiError;
pub use types::*;

use tokio::sync::RwLock;

/// Header carrying the acting player's id. Stands in for a session layer.
pub const PLAYER_ID_HEADER: &str = "x-player-id";

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Arc<RwLock<Config>> {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }
}

pub fn create_app_state(shared: Arc<SharedState>) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
    })
}

pub async fn create_app_state_from_config(config: Config) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared))
}

/// Resolves the acting player from the request headers.
pub(crate) fn player_id(headers: &HeaderMap) -> Result<i64, ApiError> {
    headers
        .get(PLAYER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<i64>().ok())
        .ok_or_else(|| {
            ApiError::ValidationError(format!("missing or malformed {PLAYER_ID_HEADER} header"))
        })
}

pub async fn router(state: Arc<AppState>) -> Router {
    let cors_origins = {
        let config = state.config().read().await;
        config.server.cors_allowed_origins.clone()
    };

    let api_router = create_api_router().with_state(state);

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/players", post(players::create_player))
        .route("/players/me", get(players::get_player))
        .route("/units", get(units::list_units))
        .route("/units", post(units::acquire_unit))
        .route("/units/{id}", get(units::get_unit))
        .route("/units/{id}", delete(units::dispose_unit))
        .route("/units/{id}/idolize", post(units::idolize_unit))
        .route("/units/{id}/center", post(units::set_center))
        .route(
            "/units/{id}/removable-skills/{skill_id}",
            post(removable_skills::attach_skill),
        )
        .route(
            "/units/{id}/removable-skills/{skill_id}",
            delete(removable_skills::detach_skill),
        )
        .route("/supporters", get(units::list_supporters))
        .route("/supporters/add", post(units::add_supporter))
        .route("/supporters/consume", post(units::consume_supporter))
        .route("/removable-skills", get(removable_skills::summary))
        .route("/removable-skills/grant", post(removable_skills::grant))
        .route("/decks/{number}", get(decks::get_deck))
        .route("/decks/{number}", put(decks::save_deck))
        .route("/decks/{number}/love", post(decks::apply_love))
        .route("/album", get(album::list_album))
        .route("/album/series", get(album::list_by_series))
        .route("/system/status", get(system::status))
}
