use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UrlRewrite::Table)
                    .if_not_exists()
                    .col(pk_auto(UrlRewrite::Id))
                    .col(string_uniq(UrlRewrite::Path))
                    .col(string(UrlRewrite::ContentType))
                    .col(integer(UrlRewrite::EntityId))
                    .col(timestamp(UrlRewrite::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UrlRewrite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UrlRewrite {
    Table,
    Id,
    Path,
    ContentType,
    EntityId,
    CreatedAt,
}
