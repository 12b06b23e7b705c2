use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240115_000001_create_pictograms::Pictograms;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(string(Products::Slug))
                    .col(string(Products::FrenchName))
                    .col(string_null(Products::EnglishName))
                    .col(text(Products::Description).default(""))
                    .col(text(Products::SafetyInstructions).default(""))
                    .col(
                        timestamp_with_time_zone(Products::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing sorts by French name then id
        manager
            .create_index(
                Index::create()
                    .name("idx_products_french_name_id")
                    .table(Products::Table)
                    .col(Products::FrenchName)
                    .col(Products::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ProductPictograms::Table)
                    .if_not_exists()
                    .col(integer(ProductPictograms::ProductId))
                    .col(integer(ProductPictograms::PictogramId))
                    .primary_key(
                        Index::create()
                            .col(ProductPictograms::ProductId)
                            .col(ProductPictograms::PictogramId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_pictograms_product")
                            .from(ProductPictograms::Table, ProductPictograms::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_pictograms_pictogram")
                            .from(ProductPictograms::Table, ProductPictograms::PictogramId)
                            .to(Pictograms::Table, Pictograms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_product_pictograms_pictogram_id")
                    .table(ProductPictograms::Table)
                    .col(ProductPictograms::PictogramId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductPictograms::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Slug,
    FrenchName,
    EnglishName,
    Description,
    SafetyInstructions,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProductPictograms {
    Table,
    ProductId,
    PictogramId,
}
