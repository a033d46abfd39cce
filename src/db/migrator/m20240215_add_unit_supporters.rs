use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UnitSupporters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UnitSupporters::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UnitSupporters::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(UnitSupporters::UnitId).integer().not_null())
                    .col(
                        ColumnDef::new(UnitSupporters::Amount)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_unit_supporters_player_unit")
                    .table(UnitSupporters::Table)
                    .col(UnitSupporters::PlayerId)
                    .col(UnitSupporters::UnitId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UnitSupporters::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UnitSupporters {
    Table,
    Id,
    PlayerId,
    UnitId,
    Amount,
}
