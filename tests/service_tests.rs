mod common;

use common::*;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use stagelight::api::types::UnitInfoDto;
use stagelight::domain::events::AchievementKind;
use stagelight::entities::units;
use stagelight::services::{DeckError, SkillError, UnitError};
use stagelight::state::SharedState;

async fn acquire(state: &SharedState, player: i64, template: i32) -> UnitInfoDto {
    state
        .unit_service
        .acquire(player, template)
        .await
        .expect("acquire")
}

// ============================================================================
// Acquisition and derived info
// ============================================================================

#[tokio::test]
async fn acquire_derives_fresh_unit_info() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;

    let unit = acquire(&state, player, TPL_REGULAR).await;
    assert_eq!(unit.unit_id, TPL_REGULAR);
    assert_eq!(unit.level, 1);
    assert_eq!(unit.exp, 0);
    assert_eq!(unit.next_exp, 10);
    assert_eq!(unit.rank, 1);
    assert_eq!(unit.max_rank, 2);
    assert_eq!(unit.max_level, 2);
    assert_eq!(unit.max_love, 10);
    assert_eq!((unit.smile, unit.pure, unit.cool, unit.hp), (70, 60, 50, 7));
    assert_eq!(unit.skill_level, 1);
    assert_eq!(unit.removable_skill_capacity, 2);
    assert!(!unit.is_rank_max);
    assert!(!unit.is_level_max);
    assert!(!unit.is_love_max);
    assert!(!unit.is_skill_level_max);
    assert!(!unit.is_removable_skill_capacity_max);

    // Acquisition marks the album.
    let album = state.album_service.all(player).await.expect("album");
    assert_eq!(album.len(), 1);
    assert_eq!(album[0].unit_id, TPL_REGULAR);
    assert!(!album[0].rank_max_flag);
}

#[tokio::test]
async fn acquire_unknown_template_fails() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;

    let err = state.unit_service.acquire(player, 9999).await.unwrap_err();
    assert!(matches!(err, UnitError::TemplateNotFound(9999)));
}

#[tokio::test]
async fn promo_template_starts_at_max_rank() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;

    let unit = acquire(&state, player, TPL_PROMO).await;
    assert_eq!(unit.rank, 1);
    assert_eq!(unit.max_rank, 1);
    // Never idolizes, so it begins on the raised caps.
    assert_eq!(unit.max_level, 3);
    assert_eq!(unit.max_love, 20);
    assert!(unit.is_rank_max);

    let album = state.album_service.all(player).await.expect("album");
    assert!(album[0].rank_max_flag);
}

#[tokio::test]
async fn supporter_template_cannot_be_acquired_directly() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;

    // Support-only templates read like unknown ids on the acquire path.
    let err = state
        .unit_service
        .acquire(player, TPL_SUPPORTER)
        .await
        .unwrap_err();
    assert!(matches!(err, UnitError::TemplateNotFound(id) if id == TPL_SUPPORTER));
    let units = state.unit_service.list_units(player).await.expect("list");
    assert!(units.is_empty());

    // They stack through the supporter operation instead.
    let supporter = state
        .unit_service
        .add_supporter(player, TPL_SUPPORTER, 1)
        .await
        .expect("add");
    assert_eq!(supporter.unit_id, TPL_SUPPORTER);
    assert_eq!(supporter.amount, 1);

    // Supporter sighting fills the album entry completely.
    let album = state.album_service.all(player).await.expect("album");
    assert!(album[0].rank_max_flag && album[0].love_max_flag && album[0].rank_level_max_flag);
    assert!(album[0].all_max_flag);
}

#[tokio::test]
async fn level_curve_drives_derived_level() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;
    let unit = acquire(&state, player, TPL_REGULAR).await;

    let mut active: units::ActiveModel = stagelight::entities::prelude::Units::find_by_id(
        unit.unit_owning_id,
    )
    .one(&state.store.conn)
    .await
    .expect("query")
    .expect("unit row")
    .into();
    active.exp = Set(10);
    active.update(&state.store.conn).await.expect("update");

    let info = state
        .unit_service
        .get_unit(player, unit.unit_owning_id)
        .await
        .expect("info");
    assert_eq!(info.level, 2);
    assert_eq!((info.smile, info.pure, info.cool, info.hp), (85, 75, 65, 9));
    // Parked at the pre-idolization cap: nothing left to earn.
    assert_eq!(info.next_exp, 0);
    assert!(!info.is_level_max);
}

#[tokio::test]
async fn level_limit_pattern_extends_past_idolized_cap() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;
    let unit = acquire(&state, player, TPL_RARE).await;
    assert_eq!(unit.level_limit_id, 1);

    state
        .unit_service
        .idolize(player, unit.unit_owning_id)
        .await
        .expect("idolize");

    // Simulate a raised level cap with exp past the idolized terminal.
    let mut active: units::ActiveModel = stagelight::entities::prelude::Units::find_by_id(
        unit.unit_owning_id,
    )
    .one(&state.store.conn)
    .await
    .expect("query")
    .expect("unit row")
    .into();
    active.exp = Set(30);
    active.max_level = Set(4);
    active.update(&state.store.conn).await.expect("update");

    let info = state
        .unit_service
        .get_unit(player, unit.unit_owning_id)
        .await
        .expect("info");
    // The extended curve puts 30 exp at level 3 with 40 exp up next.
    assert_eq!(info.level, 3);
    assert_eq!(info.next_exp, 40);
    assert_eq!((info.smile, info.pure, info.cool), (90, 80, 70));
}

// ============================================================================
// Idolization and disposal
// ============================================================================

#[tokio::test]
async fn idolize_raises_caps_once() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;
    let unit = acquire(&state, player, TPL_REGULAR).await;

    let result = state
        .unit_service
        .idolize(player, unit.unit_owning_id)
        .await
        .expect("idolize");
    assert!(result.changed);
    assert_eq!(result.unit.rank, 2);
    assert_eq!(result.unit.display_rank, 2);
    assert_eq!(result.unit.max_level, 3);
    assert_eq!(result.unit.max_love, 20);
    assert!(result.unit.is_rank_max);

    let album = state.album_service.all(player).await.expect("album");
    assert!(album[0].rank_max_flag);

    let again = state
        .unit_service
        .idolize(player, unit.unit_owning_id)
        .await
        .expect("idolize");
    assert!(!again.changed);
}

#[tokio::test]
async fn dispose_clears_deck_slots_and_attachments() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;

    let mut members = [0i64; 9];
    for slot in &mut members {
        *slot = acquire(&state, player, TPL_REGULAR).await.unit_owning_id;
    }
    state
        .deck_service
        .save_deck(player, 1, members, None)
        .await
        .expect("save deck");

    state
        .skill_service
        .grant(player, SKILL_SMILE_PCT, 1)
        .await
        .expect("grant");
    assert!(
        state
            .skill_service
            .attach(player, members[0], SKILL_SMILE_PCT)
            .await
            .expect("attach")
    );

    state
        .unit_service
        .dispose(player, members[0])
        .await
        .expect("dispose");

    let err = state
        .unit_service
        .get_unit(player, members[0])
        .await
        .unwrap_err();
    assert!(matches!(err, UnitError::NotFound(_)));

    let deck = state
        .deck_service
        .get_deck(player, 1, false)
        .await
        .expect("deck")
        .expect("present");
    assert_eq!(deck.unit_owning_ids[0], 0);
    assert_ne!(deck.unit_owning_ids[1], 0);

    // The freed copy is attachable again.
    let summary = state.skill_service.summary(player).await.expect("summary");
    assert!(summary.equipped_by_unit.is_empty());
    assert_eq!(summary.owned[0].equipped_amount, 0);
}

#[tokio::test]
async fn dispose_rejects_foreign_unit() {
    let state = test_state().await;
    let alice = create_player(&state, "alice").await;
    let bob = create_player(&state, "bob").await;
    let unit = acquire(&state, alice, TPL_REGULAR).await;

    let err = state
        .unit_service
        .dispose(bob, unit.unit_owning_id)
        .await
        .unwrap_err();
    assert!(matches!(err, UnitError::NotFound(_)));
}

// ============================================================================
// Decks
// ============================================================================

#[tokio::test]
async fn deck_index_is_validated() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;

    for number in [0, 19, -1] {
        let err = state
            .deck_service
            .get_deck(player, number, false)
            .await
            .unwrap_err();
        assert!(matches!(err, DeckError::Validation(_)));
    }
}

#[tokio::test]
async fn deck_is_created_on_demand_with_default_name() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;

    let absent = state
        .deck_service
        .get_deck(player, 1, false)
        .await
        .expect("get");
    assert!(absent.is_none());

    let deck = state
        .deck_service
        .get_deck(player, 1, true)
        .await
        .expect("get")
        .expect("created");
    assert_eq!(deck.name, "Team A");
    assert_eq!(deck.unit_owning_ids, [0; 9]);

    let deck_r = state
        .deck_service
        .get_deck(player, 18, true)
        .await
        .expect("get")
        .expect("created");
    assert_eq!(deck_r.name, "Team R");
}

#[tokio::test]
async fn save_deck_rejects_foreign_and_duplicate_members() {
    let state = test_state().await;
    let alice = create_player(&state, "alice").await;
    let bob = create_player(&state, "bob").await;

    let mine = acquire(&state, alice, TPL_REGULAR).await.unit_owning_id;
    let theirs = acquire(&state, bob, TPL_REGULAR).await.unit_owning_id;

    let mut members = [0i64; 9];
    members[0] = theirs;
    let err = state
        .deck_service
        .save_deck(alice, 1, members, None)
        .await
        .unwrap_err();
    assert!(matches!(err, DeckError::Validation(_)));

    members[0] = mine;
    members[1] = mine;
    let err = state
        .deck_service
        .save_deck(alice, 1, members, None)
        .await
        .unwrap_err();
    assert!(matches!(err, DeckError::Validation(_)));
}

#[tokio::test]
async fn save_deck_replaces_members_and_drops_leftovers() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;

    let mut members = [0i64; 9];
    for slot in &mut members {
        *slot = acquire(&state, player, TPL_REGULAR).await.unit_owning_id;
    }
    state
        .deck_service
        .save_deck(player, 2, members, Some("Front Nine".to_string()))
        .await
        .expect("save");

    // Shrink to two members; the other slot rows must go away.
    let mut smaller = [0i64; 9];
    smaller[0] = members[3];
    smaller[4] = members[7];
    let deck = state
        .deck_service
        .save_deck(player, 2, smaller, None)
        .await
        .expect("save");
    assert_eq!(deck.name, "Front Nine");

    let reloaded = state
        .deck_service
        .get_deck(player, 2, false)
        .await
        .expect("get")
        .expect("present");
    assert_eq!(reloaded.unit_owning_ids, smaller);
}

#[tokio::test]
async fn resaving_a_deck_reshuffles_slots() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;

    let mut members = [0i64; 9];
    for slot in &mut members {
        *slot = acquire(&state, player, TPL_REGULAR).await.unit_owning_id;
    }
    state
        .deck_service
        .save_deck(player, 1, members, None)
        .await
        .expect("save");

    // Same units rotated one slot; every row changes occupant in place.
    let mut rotated = [0i64; 9];
    rotated[..8].copy_from_slice(&members[1..]);
    rotated[8] = members[0];
    state
        .deck_service
        .save_deck(player, 1, rotated, None)
        .await
        .expect("resave");

    // Shrink to two slots, then move those units to two different slots.
    let mut sparse = [0i64; 9];
    sparse[0] = members[2];
    sparse[4] = members[6];
    state
        .deck_service
        .save_deck(player, 1, sparse, None)
        .await
        .expect("resave");

    let mut moved = [0i64; 9];
    moved[3] = members[2];
    moved[7] = members[6];
    state
        .deck_service
        .save_deck(player, 1, moved, None)
        .await
        .expect("resave");

    let deck = state
        .deck_service
        .get_deck(player, 1, false)
        .await
        .expect("get")
        .expect("present");
    assert_eq!(deck.unit_owning_ids, moved);
}

// ============================================================================
// Love distribution
// ============================================================================

async fn full_deck(state: &SharedState, player: i64) -> [i64; 9] {
    let mut members = [0i64; 9];
    for slot in &mut members {
        *slot = acquire(state, player, TPL_REGULAR).await.unit_owning_id;
    }
    state
        .deck_service
        .save_deck(player, 1, members, None)
        .await
        .expect("save deck");
    members
}

#[tokio::test]
async fn love_goes_to_the_center_first() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;
    full_deck(&state, player).await;

    let result = state
        .deck_service
        .apply_love(player, 1, 5)
        .await
        .expect("love");
    assert_eq!(result.distributed, 5);
    assert_eq!(result.member_loves, [0, 0, 0, 0, 5, 0, 0, 0, 0]);

    let result = state
        .deck_service
        .apply_love(player, 1, 14)
        .await
        .expect("love");
    assert_eq!(result.distributed, 14);
    assert_eq!(result.member_loves, [2, 1, 1, 1, 10, 1, 1, 1, 1]);
}

#[tokio::test]
async fn love_overflow_is_discarded_at_the_caps() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;
    full_deck(&state, player).await;

    // Non-idolized members cap at 10 each.
    let result = state
        .deck_service
        .apply_love(player, 1, 1000)
        .await
        .expect("love");
    assert_eq!(result.distributed, 90);
    assert_eq!(result.member_loves, [10; 9]);
    // The pre-idolization cap is below the bond maximum, so no milestone.
    assert!(result.achievements.is_empty());
}

#[tokio::test]
async fn maxed_bond_marks_album_and_raises_achievement() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;
    let members = full_deck(&state, player).await;

    // Idolized center can reach the absolute bond cap of 20.
    state
        .deck_service
        .save_deck(player, 1, members, None)
        .await
        .expect("save");
    state
        .unit_service
        .idolize(player, members[4])
        .await
        .expect("idolize");

    let result = state
        .deck_service
        .apply_love(player, 1, 1000)
        .await
        .expect("love");
    assert_eq!(result.member_loves[4], 20);
    assert_eq!(result.distributed, 100);
    assert_eq!(result.achievements.len(), 1);
    assert_eq!(result.achievements[0].kind, AchievementKind::MaxLove);
    assert_eq!(result.achievements[0].unit_id, TPL_REGULAR);

    let album = state.album_service.all(player).await.expect("album");
    assert!(album[0].love_max_flag);
    assert!(album[0].rank_max_flag);
    assert_eq!(album[0].highest_love, 20);
}

#[tokio::test]
async fn bond_cap_alone_marks_rank_milestone() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;

    // Rarity 3 hits its absolute bond cap of 15 without idolizing, so the
    // rank milestone can only come from the bond path.
    let mut members = [0i64; 9];
    members[4] = acquire(&state, player, TPL_BUDDY).await.unit_owning_id;
    for slot in members.iter_mut().filter(|slot| **slot == 0) {
        *slot = acquire(&state, player, TPL_REGULAR).await.unit_owning_id;
    }
    state
        .deck_service
        .save_deck(player, 1, members, None)
        .await
        .expect("save");

    let result = state
        .deck_service
        .apply_love(player, 1, 1000)
        .await
        .expect("love");
    assert_eq!(result.member_loves[4], 15);

    let album = state.album_service.all(player).await.expect("album");
    let entry = album
        .iter()
        .find(|e| e.unit_id == TPL_BUDDY)
        .expect("entry");
    assert!(entry.love_max_flag);
    assert!(entry.rank_max_flag);

    // The neighbours stopped short of their true cap; no milestone there.
    let regular = album
        .iter()
        .find(|e| e.unit_id == TPL_REGULAR)
        .expect("entry");
    assert!(!regular.love_max_flag);
    assert!(!regular.rank_max_flag);
}

#[tokio::test]
async fn love_requires_a_full_deck() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;

    let mut members = [0i64; 9];
    members[0] = acquire(&state, player, TPL_REGULAR).await.unit_owning_id;
    state
        .deck_service
        .save_deck(player, 1, members, None)
        .await
        .expect("save");

    let err = state.deck_service.apply_love(player, 1, 5).await.unwrap_err();
    assert!(matches!(err, DeckError::Integrity(_)));

    let err = state.deck_service.apply_love(player, 3, 5).await.unwrap_err();
    assert!(matches!(err, DeckError::NotFound(3)));
}

// ============================================================================
// Supporters
// ============================================================================

#[tokio::test]
async fn supporter_stack_add_and_consume() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;

    let supporter = state
        .unit_service
        .add_supporter(player, TPL_SUPPORTER, 3)
        .await
        .expect("add");
    assert_eq!(supporter.amount, 3);

    let (consumed, supporter) = state
        .unit_service
        .sub_supporter(player, TPL_SUPPORTER, 2)
        .await
        .expect("sub");
    assert!(consumed);
    assert_eq!(supporter.amount, 1);

    // Insufficient stock leaves the stack untouched.
    let (consumed, supporter) = state
        .unit_service
        .sub_supporter(player, TPL_SUPPORTER, 5)
        .await
        .expect("sub");
    assert!(!consumed);
    assert_eq!(supporter.amount, 1);

    let err = state
        .unit_service
        .add_supporter(player, TPL_REGULAR, 1)
        .await
        .unwrap_err();
    assert!(matches!(err, UnitError::Validation(_)));
}

// ============================================================================
// Removable skills
// ============================================================================

#[tokio::test]
async fn attach_enforces_capacity_and_owned_copies() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;
    let unit_a = acquire(&state, player, TPL_REGULAR).await.unit_owning_id;
    let unit_b = acquire(&state, player, TPL_REGULAR_B).await.unit_owning_id;

    // Attaching an unowned skill is refused.
    let err = state
        .skill_service
        .attach(player, unit_a, SKILL_SMILE_PCT)
        .await
        .unwrap_err();
    assert!(matches!(err, SkillError::Validation(_)));

    state
        .skill_service
        .grant(player, SKILL_SMILE_PCT, 1)
        .await
        .expect("grant");
    assert!(
        state
            .skill_service
            .attach(player, unit_a, SKILL_SMILE_PCT)
            .await
            .expect("attach")
    );

    // Same pair again is a no-op.
    assert!(
        !state
            .skill_service
            .attach(player, unit_a, SKILL_SMILE_PCT)
            .await
            .expect("attach")
    );

    // The single owned copy is already in use elsewhere.
    let err = state
        .skill_service
        .attach(player, unit_b, SKILL_SMILE_PCT)
        .await
        .unwrap_err();
    assert!(matches!(err, SkillError::Validation(_)));

    // Fill unit A to its capacity of 2, then overflow.
    state
        .skill_service
        .grant(player, SKILL_COOL_FIXED, 2)
        .await
        .expect("grant");
    assert!(
        state
            .skill_service
            .attach(player, unit_a, SKILL_COOL_FIXED)
            .await
            .expect("attach")
    );
    state
        .skill_service
        .grant(player, SKILL_PURE_PCT, 1)
        .await
        .expect("grant");
    let err = state
        .skill_service
        .attach(player, unit_a, SKILL_PURE_PCT)
        .await
        .unwrap_err();
    assert!(matches!(err, SkillError::Validation(_)));

    // Detach frees the slot and the copy.
    assert!(
        state
            .skill_service
            .detach(player, unit_a, SKILL_SMILE_PCT)
            .await
            .expect("detach")
    );
    assert!(
        !state
            .skill_service
            .detach(player, unit_a, SKILL_SMILE_PCT)
            .await
            .expect("detach")
    );
    assert!(
        state
            .skill_service
            .attach(player, unit_b, SKILL_SMILE_PCT)
            .await
            .expect("attach")
    );
}

#[tokio::test]
async fn summary_reports_totals_and_attachments() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;
    let unit = acquire(&state, player, TPL_REGULAR).await.unit_owning_id;

    state
        .skill_service
        .grant(player, SKILL_SMILE_PCT, 3)
        .await
        .expect("grant");
    state
        .skill_service
        .attach(player, unit, SKILL_SMILE_PCT)
        .await
        .expect("attach");

    let summary = state.skill_service.summary(player).await.expect("summary");
    assert_eq!(summary.owned.len(), 1);
    assert_eq!(summary.owned[0].removable_skill_id, SKILL_SMILE_PCT);
    assert_eq!(summary.owned[0].total_amount, 3);
    assert_eq!(summary.owned[0].equipped_amount, 1);
    assert_eq!(summary.equipped_by_unit.len(), 1);
    assert_eq!(summary.equipped_by_unit[0].unit_owning_id, unit);
    assert_eq!(
        summary.equipped_by_unit[0].removable_skill_ids,
        vec![SKILL_SMILE_PCT]
    );
}

#[tokio::test]
async fn grant_validates_skill_and_amount() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;

    let err = state.skill_service.grant(player, 9999, 1).await.unwrap_err();
    assert!(matches!(err, SkillError::NotFound(9999)));

    let err = state
        .skill_service
        .grant(player, SKILL_SMILE_PCT, 0)
        .await
        .unwrap_err();
    assert!(matches!(err, SkillError::Validation(_)));
}

// ============================================================================
// Album
// ============================================================================

#[tokio::test]
async fn album_groups_by_series_with_unkeyed_trailing() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;

    acquire(&state, player, TPL_RARE).await;
    acquire(&state, player, TPL_REGULAR).await;
    state
        .unit_service
        .add_supporter(player, TPL_SUPPORTER, 1)
        .await
        .expect("supporter");

    let groups = state.album_service.by_series(player).await.expect("series");
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].series_id, Some(1));
    assert_eq!(groups[0].entries[0].unit_id, TPL_REGULAR);
    assert_eq!(groups[1].series_id, Some(2));
    assert_eq!(groups[1].entries[0].unit_id, TPL_RARE);
    assert_eq!(groups[2].series_id, None);
    assert_eq!(groups[2].entries[0].unit_id, TPL_SUPPORTER);
}

#[tokio::test]
async fn album_flags_never_regress() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;

    let unit = acquire(&state, player, TPL_REGULAR).await;
    state
        .unit_service
        .idolize(player, unit.unit_owning_id)
        .await
        .expect("idolize");

    // Disposing and re-acquiring must not clear the earned flag.
    state
        .unit_service
        .dispose(player, unit.unit_owning_id)
        .await
        .expect("dispose");
    acquire(&state, player, TPL_REGULAR).await;

    let album = state.album_service.all(player).await.expect("album");
    assert_eq!(album.len(), 1);
    assert!(album[0].rank_max_flag);
}

#[tokio::test]
async fn unit_count_tracks_acquisition_and_disposal() {
    let state = test_state().await;
    let player = create_player(&state, "alice").await;

    assert_eq!(state.unit_service.count_units(player).await.expect("count"), 0);

    let first = acquire(&state, player, TPL_REGULAR).await;
    acquire(&state, player, TPL_REGULAR_B).await;
    assert_eq!(state.unit_service.count_units(player).await.expect("count"), 2);

    state
        .unit_service
        .dispose(player, first.unit_owning_id)
        .await
        .expect("dispose");
    assert_eq!(state.unit_service.count_units(player).await.expect("count"), 1);
}
