//! Achievement side-channel.
//!
//! The core accumulates achievement events into an explicit result list;
//! the policy deciding what an event means lives outside this crate behind
//! the [`AchievementSink`] trait.

use serde::Serialize;

use crate::domain::{PlayerId, UnitTemplateId};

/// Milestone signal raised by collection mutations.
#[derive(Debug, Clone, Copy, Default)]
pub struct AchievementSignal {
    pub max_love: bool,
}

/// An achievement event surfaced back to the request handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementEvent {
    pub player_id: PlayerId,
    pub unit_id: UnitTemplateId,
    pub kind: AchievementKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementKind {
    MaxLove,
}

/// External achievement policy. The deck service collects whatever the sink
/// returns into the operation's result list.
#[async_trait::async_trait]
pub trait AchievementSink: Send + Sync {
    async fn trigger(
        &self,
        player_id: PlayerId,
        unit_id: UnitTemplateId,
        signal: AchievementSignal,
    ) -> Vec<AchievementEvent>;
}

/// Default sink: reports the milestone as a single event, no game policy.
pub struct NoopAchievementSink;

#[async_trait::async_trait]
impl AchievementSink for NoopAchievementSink {
    async fn trigger(
        &self,
        player_id: PlayerId,
        unit_id: UnitTemplateId,
        signal: AchievementSignal,
    ) -> Vec<AchievementEvent> {
        if signal.max_love {
            vec![AchievementEvent {
                player_id,
                unit_id,
                kind: AchievementKind::MaxLove,
            }]
        } else {
            Vec::new()
        }
    }
}
