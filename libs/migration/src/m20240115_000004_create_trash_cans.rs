use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrashCans::Table)
                    .if_not_exists()
                    .col(pk_auto(TrashCans::Id))
                    .col(string_len(TrashCans::Name, 255))
                    .col(string_len(TrashCans::Color, 7))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrashCans::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TrashCans {
    Table,
    Id,
    Name,
    Color,
}
