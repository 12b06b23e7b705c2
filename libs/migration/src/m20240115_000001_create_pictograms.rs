use sea_orm_migration::sea_query::extension::postgres::Type;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(PictogramKind::Enum)
                    .values([PictogramKind::Danger, PictogramKind::Obligation])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Pictograms::Table)
                    .if_not_exists()
                    .col(pk_auto(Pictograms::Id))
                    .col(string_len_uniq(Pictograms::Code, 16))
                    .col(string(Pictograms::Label))
                    .col(string(Pictograms::Image))
                    .col(
                        ColumnDef::new(Pictograms::Kind)
                            .enumeration(
                                PictogramKind::Enum,
                                [PictogramKind::Danger, PictogramKind::Obligation],
                            )
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pictograms_kind")
                    .table(Pictograms::Table)
                    .col(Pictograms::Kind)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pictograms::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(PictogramKind::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Pictograms {
    Table,
    Id,
    Code,
    Label,
    Image,
    Kind,
}

#[derive(DeriveIden)]
enum PictogramKind {
    #[sea_orm(iden = "pictogram_kind")]
    Enum,
    #[sea_orm(iden = "danger")]
    Danger,
    #[sea_orm(iden = "obligation")]
    Obligation,
}
