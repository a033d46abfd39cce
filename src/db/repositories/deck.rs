use crate::entities::{prelude::*, unit_deck_positions, unit_decks};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};

pub struct DeckRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> DeckRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find(
        &self,
        player_id: i64,
        deck_number: i32,
    ) -> Result<Option<unit_decks::Model>, DbErr> {
        UnitDecks::find()
            .filter(unit_decks::Column::PlayerId.eq(player_id))
            .filter(unit_decks::Column::DeckNumber.eq(deck_number))
            .one(self.conn)
            .await
    }

    pub async fn create(
        &self,
        player_id: i64,
        deck_number: i32,
        name: &str,
    ) -> Result<unit_decks::Model, DbErr> {
        unit_decks::ActiveModel {
            player_id: Set(player_id),
            deck_number: Set(deck_number),
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    pub async fn rename(
        &self,
        deck: unit_decks::Model,
        name: &str,
    ) -> Result<unit_decks::Model, DbErr> {
        let mut active: unit_decks::ActiveModel = deck.into();
        active.name = Set(name.to_owned());
        active.update(self.conn).await
    }

    pub async fn positions(
        &self,
        deck_id: i64,
    ) -> Result<Vec<unit_deck_positions::Model>, DbErr> {
        UnitDeckPositions::find()
            .filter(unit_deck_positions::Column::DeckId.eq(deck_id))
            .order_by_asc(unit_deck_positions::Column::Position)
            .all(self.conn)
            .await
    }

    pub async fn insert_position(
        &self,
        deck_id: i64,
        position: i32,
        unit_owning_id: i64,
    ) -> Result<unit_deck_positions::Model, DbErr> {
        unit_deck_positions::ActiveModel {
            deck_id: Set(deck_id),
            position: Set(position),
            unit_owning_id: Set(unit_owning_id),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    pub async fn update_position(
        &self,
        row: unit_deck_positions::Model,
        position: i32,
        unit_owning_id: i64,
    ) -> Result<unit_deck_positions::Model, DbErr> {
        let mut active: unit_deck_positions::ActiveModel = row.into();
        active.position = Set(position);
        active.unit_owning_id = Set(unit_owning_id);
        active.update(self.conn).await
    }

    pub async fn delete_position(&self, row: unit_deck_positions::Model) -> Result<(), DbErr> {
        row.delete(self.conn).await?;
        Ok(())
    }

    /// Clears a unit out of every deck it occupies. Used when the unit is
    /// disposed of.
    pub async fn delete_positions_for_unit(&self, unit_owning_id: i64) -> Result<u64, DbErr> {
        let res = UnitDeckPositions::delete_many()
            .filter(unit_deck_positions::Column::UnitOwningId.eq(unit_owning_id))
            .exec(self.conn)
            .await?;
        Ok(res.rows_affected)
    }
}
