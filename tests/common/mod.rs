//! Shared fixtures: an in-memory store seeded with a small reference set.
#![allow(dead_code)]

use sea_orm::{ActiveModelTrait, Set};
use stagelight::config::Config;
use stagelight::db::Store;
use stagelight::entities::{
    removable_skills, unit_level_limit_patterns, unit_level_up_patterns, unit_rarities,
    unit_skill_level_up_patterns, unit_skills, unit_templates,
};
use stagelight::state::SharedState;

// Template ids used across the fixture set.
pub const TPL_REGULAR: i32 = 101;
pub const TPL_REGULAR_B: i32 = 102;
pub const TPL_BUDDY: i32 = 103;
pub const TPL_PROMO: i32 = 104;
pub const TPL_RARE: i32 = 401;
pub const TPL_SUPPORTER: i32 = 501;

pub const SKILL_SMILE_PCT: i32 = 301;
pub const SKILL_COOL_FIXED: i32 = 302;
pub const SKILL_PURE_PCT: i32 = 303;

pub async fn test_store() -> Store {
    let store = Store::with_pool_options("sqlite::memory:", 1, 1)
        .await
        .expect("store");
    seed_reference(&store).await;
    store
}

pub async fn test_state() -> SharedState {
    let store = test_store().await;
    SharedState::with_store(Config::default(), store)
}

async fn level_step(
    store: &Store,
    pattern_id: i32,
    level: i32,
    next_exp: i64,
    diffs: (i32, i32, i32, i32),
) {
    unit_level_up_patterns::ActiveModel {
        pattern_id: Set(pattern_id),
        level: Set(level),
        next_exp: Set(next_exp),
        smile_diff: Set(diffs.0),
        pure_diff: Set(diffs.1),
        cool_diff: Set(diffs.2),
        hp_diff: Set(diffs.3),
        ..Default::default()
    }
    .insert(&store.conn)
    .await
    .expect("level step");
}

#[allow(clippy::too_many_arguments)]
async fn template(
    store: &Store,
    unit_id: i32,
    name: &str,
    rarity: i32,
    rank_min: i32,
    rank_max: i32,
    series: Option<i32>,
    disable_rank_up: bool,
) {
    unit_templates::ActiveModel {
        unit_id: Set(unit_id),
        name: Set(name.to_string()),
        rarity: Set(rarity),
        rank_min: Set(rank_min),
        rank_max: Set(rank_max),
        smile_max: Set(100),
        pure_max: Set(90),
        cool_max: Set(80),
        hp_max: Set(10),
        default_skill_id: Set(Some(7)),
        default_removable_skill_capacity: Set(2),
        max_removable_skill_capacity: Set(4),
        level_up_pattern_id: Set(10),
        album_series_id: Set(series),
        disable_rank_up: Set(disable_rank_up),
    }
    .insert(&store.conn)
    .await
    .expect("template");
}

/// Seeds a toy reference set.
///
/// Level curve (pattern 10): level 1 until 10 exp, level 2 until 25 exp,
/// then terminal level 3. The rarity-4 level-limit curve (id 1) extends to
/// level 4 at 40 exp.
pub async fn seed_reference(store: &Store) {
    // Rarity 3 carries the same bond cap on both sides of idolization.
    for (rarity, before_love, after_love) in [(2, 10i64, 20i64), (3, 15, 15), (4, 25, 50)] {
        unit_rarities::ActiveModel {
            rarity: Set(rarity),
            before_level_max: Set(2),
            after_level_max: Set(3),
            before_love_max: Set(before_love),
            after_love_max: Set(after_love),
        }
        .insert(&store.conn)
        .await
        .expect("rarity");
    }

    level_step(store, 10, 1, 10, (30, 30, 30, 3)).await;
    level_step(store, 10, 2, 25, (15, 15, 15, 1)).await;
    level_step(store, 10, 3, 0, (0, 0, 0, 0)).await;

    for (level, next_exp, diff) in [(3, 40i64, 10), (4, 0, 0)] {
        unit_level_limit_patterns::ActiveModel {
            level_limit_id: Set(1),
            level: Set(level),
            next_exp: Set(next_exp),
            smile_diff: Set(diff),
            pure_diff: Set(diff),
            cool_diff: Set(diff),
            hp_diff: Set(0),
            ..Default::default()
        }
        .insert(&store.conn)
        .await
        .expect("level limit step");
    }

    unit_skills::ActiveModel {
        skill_id: Set(7),
        name: Set("Timer Charm".to_string()),
        max_level: Set(2),
        skill_level_up_pattern_id: Set(70),
    }
    .insert(&store.conn)
    .await
    .expect("skill");

    for (skill_level, next_exp) in [(1, 5i64), (2, 0)] {
        unit_skill_level_up_patterns::ActiveModel {
            pattern_id: Set(70),
            skill_level: Set(skill_level),
            next_exp: Set(next_exp),
            ..Default::default()
        }
        .insert(&store.conn)
        .await
        .expect("skill step");
    }

    template(store, TPL_REGULAR, "Kousaka Honoka", 2, 1, 2, Some(1), false).await;
    template(store, TPL_REGULAR_B, "Sonoda Umi", 2, 1, 2, Some(1), false).await;
    template(store, TPL_BUDDY, "Koizumi Hanayo", 3, 1, 2, Some(1), false).await;
    template(store, TPL_PROMO, "Minami Kotori", 2, 1, 1, Some(1), false).await;
    template(store, TPL_RARE, "Yazawa Nico", 4, 1, 2, Some(2), false).await;
    template(store, TPL_SUPPORTER, "Alpaca", 2, 1, 1, None, true).await;

    removable_skills::ActiveModel {
        skill_id: Set(SKILL_SMILE_PCT),
        name: Set("Smile Aura".to_string()),
        effect_type: Set(1),
        effect_value: Set(10.0),
        fixed_value: Set(false),
    }
    .insert(&store.conn)
    .await
    .expect("removable skill");

    removable_skills::ActiveModel {
        skill_id: Set(SKILL_COOL_FIXED),
        name: Set("Cool Veil".to_string()),
        effect_type: Set(3),
        effect_value: Set(200.0),
        fixed_value: Set(true),
    }
    .insert(&store.conn)
    .await
    .expect("removable skill");

    removable_skills::ActiveModel {
        skill_id: Set(SKILL_PURE_PCT),
        name: Set("Pure Mist".to_string()),
        effect_type: Set(2),
        effect_value: Set(5.0),
        fixed_value: Set(false),
    }
    .insert(&store.conn)
    .await
    .expect("removable skill");
}

pub async fn create_player(state: &SharedState, name: &str) -> i64 {
    state
        .player_service
        .create(name, "en")
        .await
        .expect("player")
        .id
}
