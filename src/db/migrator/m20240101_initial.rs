use crate::entities::prelude::*;
use crate::entities::{
    album_entries, removable_skill_inventory, unit_deck_positions, unit_decks,
    unit_removable_skills, units,
};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        manager
            .create_table(
                schema
                    .create_table_from_entity(Players)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Units)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(UnitDecks)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(UnitDeckPositions)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(RemovableSkillInventory)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(UnitRemovableSkills)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(AlbumEntries)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(UnitTemplates)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(UnitRarities)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(UnitLevelUpPatterns)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(UnitLevelLimitPatterns)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(UnitSkills)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(UnitSkillLevelUpPatterns)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(RemovableSkills)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_units_player_id")
                    .table(Units)
                    .col(units::Column::PlayerId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_unit_decks_player_number")
                    .table(UnitDecks)
                    .col(unit_decks::Column::PlayerId)
                    .col(unit_decks::Column::DeckNumber)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_unit_deck_positions_deck_position")
                    .table(UnitDeckPositions)
                    .col(unit_deck_positions::Column::DeckId)
                    .col(unit_deck_positions::Column::Position)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_removable_skill_inventory_player_skill")
                    .table(RemovableSkillInventory)
                    .col(removable_skill_inventory::Column::PlayerId)
                    .col(removable_skill_inventory::Column::RemovableSkillId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_unit_removable_skills_unit_skill")
                    .table(UnitRemovableSkills)
                    .col(unit_removable_skills::Column::UnitOwningId)
                    .col(unit_removable_skills::Column::RemovableSkillId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_album_entries_player_unit")
                    .table(AlbumEntries)
                    .col(album_entries::Column::PlayerId)
                    .col(album_entries::Column::UnitId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RemovableSkills).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UnitSkillLevelUpPatterns).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UnitSkills).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UnitLevelLimitPatterns).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UnitLevelUpPatterns).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UnitRarities).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UnitTemplates).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AlbumEntries).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UnitRemovableSkills).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RemovableSkillInventory).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UnitDeckPositions).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UnitDecks).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Units).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players).to_owned())
            .await?;

        Ok(())
    }
}
