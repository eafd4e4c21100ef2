use sea_orm_migration::{prelude::*, schema::*};

static IDX_SHOP_CATEGORY_POSITION: &str = "idx_shop_category_position";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(ShopCategory::Id))
                    .col(string(ShopCategory::Name))
                    .col(text(ShopCategory::Description))
                    .col(boolean(ShopCategory::IncludeInMenu))
                    .col(integer(ShopCategory::Position))
                    .col(timestamp(ShopCategory::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(ShopCategory::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHOP_CATEGORY_POSITION)
                    .table(ShopCategory::Table)
                    .col(ShopCategory::Position)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SHOP_CATEGORY_POSITION)
                    .table(ShopCategory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ShopCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ShopCategory {
    Table,
    Id,
    Name,
    Description,
    IncludeInMenu,
    Position,
    CreatedAt,
    UpdatedAt,
}
