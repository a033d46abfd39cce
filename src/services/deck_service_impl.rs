//! `SeaORM` implementation of the `DeckService` trait.

use crate::api::types::{DeckDto, LoveResultDto};
use crate::constants::deck;
use crate::db::Store;
use crate::db::repositories::{
    AlbumRepository, DeckRepository, PlayerRepository, ReferenceRepository, UnitRepository,
};
use crate::domain::events::{AchievementSignal, AchievementSink};
use crate::domain::{AlbumFlags, Locale, PlayerId, UnitOwningId};
use crate::entities::{unit_deck_positions, unit_decks, units};
use crate::progression::love::distribute_love;
use crate::services::deck_service::{DeckError, DeckService};
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, Set, TransactionTrait};
use std::sync::Arc;

pub struct SeaOrmDeckService {
    store: Store,
    achievements: Arc<dyn AchievementSink>,
}

impl SeaOrmDeckService {
    #[must_use]
    pub fn new(store: Store, achievements: Arc<dyn AchievementSink>) -> Self {
        Self {
            store,
            achievements,
        }
    }

    fn check_deck_number(deck_number: i32) -> Result<(), DeckError> {
        if (deck::MIN_INDEX..=deck::MAX_INDEX).contains(&deck_number) {
            Ok(())
        } else {
            Err(DeckError::Validation(format!(
                "deck number {deck_number} is outside {}..={}",
                deck::MIN_INDEX,
                deck::MAX_INDEX
            )))
        }
    }

    async fn player_locale<C: ConnectionTrait>(
        conn: &C,
        player_id: PlayerId,
    ) -> Result<Locale, DeckError> {
        let player = PlayerRepository::new(conn)
            .get(player_id)
            .await?
            .ok_or_else(|| DeckError::Validation(format!("player {player_id} not found")))?;
        Ok(Locale::from_tag(&player.locale))
    }

    async fn members_of<C: ConnectionTrait>(
        conn: &C,
        deck: &unit_decks::Model,
    ) -> Result<[i64; 9], DeckError> {
        let mut members = [0i64; 9];
        for row in DeckRepository::new(conn).positions(deck.id).await? {
            let slot = row.position as usize;
            if slot < members.len() {
                members[slot] = row.unit_owning_id;
            }
        }
        Ok(members)
    }
}

#[async_trait]
impl DeckService for SeaOrmDeckService {
    async fn get_deck(
        &self,
        player_id: PlayerId,
        deck_number: i32,
        ensure: bool,
    ) -> Result<Option<DeckDto>, DeckError> {
        Self::check_deck_number(deck_number)?;

        let conn = &self.store.conn;
        let decks = DeckRepository::new(conn);

        let deck = match decks.find(player_id, deck_number).await? {
            Some(deck) => deck,
            None if !ensure => return Ok(None),
            None => {
                let locale = Self::player_locale(conn, player_id).await?;
                decks
                    .create(player_id, deck_number, &locale.deck_default_name(deck_number))
                    .await?
            }
        };

        let members = Self::members_of(conn, &deck).await?;
        Ok(Some(DeckDto {
            deck_number,
            name: deck.name,
            unit_owning_ids: members,
        }))
    }

    async fn save_deck(
        &self,
        player_id: PlayerId,
        deck_number: i32,
        members: [UnitOwningId; 9],
        name: Option<String>,
    ) -> Result<DeckDto, DeckError> {
        Self::check_deck_number(deck_number)?;

        // A unit may occupy at most one slot.
        for (i, &id) in members.iter().enumerate() {
            if id > 0 && members[..i].contains(&id) {
                return Err(DeckError::Validation(format!(
                    "unit {id} appears in more than one slot"
                )));
            }
        }

        let txn = self.store.conn.begin().await?;

        let units = UnitRepository::new(&txn);
        for &id in members.iter().filter(|&&id| id > 0) {
            if units.get_for_player(id, player_id).await?.is_none() {
                return Err(DeckError::Validation(format!(
                    "unit {id} is not owned by player {player_id}"
                )));
            }
        }

        let decks = DeckRepository::new(&txn);
        let mut deck = match decks.find(player_id, deck_number).await? {
            Some(deck) => deck,
            None => {
                let locale = Self::player_locale(&txn, player_id).await?;
                decks
                    .create(player_id, deck_number, &locale.deck_default_name(deck_number))
                    .await?
            }
        };
        if let Some(name) = name {
            deck = decks.rename(deck, &name).await?;
        }

        // Rows already sitting at a wanted position stay put; the rest form
        // a reuse pool. The (deck_id, position) index stays conflict-free
        // because pooled rows only ever move onto positions nothing holds.
        let mut kept: [Option<unit_deck_positions::Model>; 9] = Default::default();
        let mut pool = Vec::new();
        for row in decks.positions(deck.id).await? {
            let slot = row.position as usize;
            if slot < members.len() && members[slot] > 0 {
                kept[slot] = Some(row);
            } else {
                pool.push(row);
            }
        }

        for (slot, &unit_owning_id) in members.iter().enumerate() {
            if unit_owning_id == 0 {
                continue;
            }
            match kept[slot].take() {
                Some(row) => {
                    if row.unit_owning_id != unit_owning_id {
                        decks
                            .update_position(row, slot as i32, unit_owning_id)
                            .await?;
                    }
                }
                None => match pool.pop() {
                    Some(row) => {
                        decks
                            .update_position(row, slot as i32, unit_owning_id)
                            .await?;
                    }
                    None => {
                        decks
                            .insert_position(deck.id, slot as i32, unit_owning_id)
                            .await?;
                    }
                },
            }
        }
        for row in pool {
            decks.delete_position(row).await?;
        }

        txn.commit().await?;

        Ok(DeckDto {
            deck_number,
            name: deck.name,
            unit_owning_ids: members,
        })
    }

    async fn apply_love(
        &self,
        player_id: PlayerId,
        deck_number: i32,
        amount: i64,
    ) -> Result<LoveResultDto, DeckError> {
        Self::check_deck_number(deck_number)?;
        if amount < 0 {
            return Err(DeckError::Validation(format!(
                "love amount must not be negative, got {amount}"
            )));
        }

        let txn = self.store.conn.begin().await?;

        let decks = DeckRepository::new(&txn);
        let deck = decks
            .find(player_id, deck_number)
            .await?
            .ok_or(DeckError::NotFound(deck_number))?;
        let members = Self::members_of(&txn, &deck).await?;
        if members.contains(&0) {
            return Err(DeckError::Integrity(format!(
                "deck {deck_number} is not fully populated"
            )));
        }

        // Resolve every member up front so a broken slot aborts before any
        // write happens.
        let unit_repo = UnitRepository::new(&txn);
        let refs = ReferenceRepository::new(&txn);
        let mut resolved: Vec<(units::Model, i64, i64)> = Vec::with_capacity(members.len());
        for &id in &members {
            let unit = unit_repo
                .get_for_player(id, player_id)
                .await?
                .ok_or_else(|| DeckError::Integrity(format!("deck unit {id} missing")))?;
            let template = refs.get_template(unit.unit_id).await?.ok_or_else(|| {
                DeckError::Integrity(format!("template {} missing", unit.unit_id))
            })?;
            let rarity = refs.get_rarity(template.rarity).await?.ok_or_else(|| {
                DeckError::Integrity(format!("rarity {} missing", template.rarity))
            })?;

            let max_love = if unit.rank >= template.rank_max {
                rarity.after_love_max
            } else {
                rarity.before_love_max
            };
            resolved.push((unit, max_love, rarity.after_love_max));
        }

        let mut loves = [0i64; 9];
        let mut max_loves = [0i64; 9];
        for (slot, (unit, max_love, _)) in resolved.iter().enumerate() {
            loves[slot] = unit.love;
            max_loves[slot] = *max_love;
        }

        let distributed = distribute_love(&mut loves, &max_loves, amount);

        let albums = AlbumRepository::new(&txn);
        let mut achievements = Vec::new();
        for (slot, (unit, _, absolute_love_max)) in resolved.into_iter().enumerate() {
            let new_love = loves[slot];
            let template_id = unit.unit_id;
            let hit_love_cap = new_love >= absolute_love_max;

            if new_love != unit.love {
                let mut active: units::ActiveModel = unit.into();
                active.love = Set(new_love);
                unit_repo.update(active).await?;
            }

            // A maxed bond is also a rank milestone in the album.
            albums
                .update(
                    player_id,
                    template_id,
                    AlbumFlags {
                        rank_max: hit_love_cap,
                        love_max: hit_love_cap,
                        ..Default::default()
                    },
                    new_love,
                )
                .await?;

            if hit_love_cap {
                let events = self
                    .achievements
                    .trigger(
                        player_id,
                        template_id,
                        AchievementSignal { max_love: true },
                    )
                    .await;
                achievements.extend(events);
            }
        }

        txn.commit().await?;

        Ok(LoveResultDto {
            distributed,
            member_loves: loves,
            achievements,
        })
    }
}
