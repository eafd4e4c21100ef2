use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261016_000001_shop_category::ShopCategory;

static FK_SHOP_PRODUCT_CATEGORY_ID: &str = "fk-shop_product-category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(ShopProduct::Id))
                    .col(integer(ShopProduct::CategoryId))
                    .col(string_uniq(ShopProduct::Sku))
                    .col(string(ShopProduct::Name))
                    .col(text(ShopProduct::Description))
                    .col(big_integer(ShopProduct::PriceCents))
                    .col(boolean(ShopProduct::InStock))
                    .col(timestamp(ShopProduct::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(ShopProduct::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SHOP_PRODUCT_CATEGORY_ID)
                            .from(ShopProduct::Table, ShopProduct::CategoryId)
                            .to(ShopCategory::Table, ShopCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShopProduct::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ShopProduct {
    Table,
    Id,
    CategoryId,
    Sku,
    Name,
    Description,
    PriceCents,
    InStock,
    CreatedAt,
    UpdatedAt,
}
