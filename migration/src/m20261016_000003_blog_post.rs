use sea_orm_migration::{prelude::*, schema::*};

static IDX_BLOG_POST_PUBLISHED_AT: &str = "idx_blog_post_published_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPost::Table)
                    .if_not_exists()
                    .col(pk_auto(BlogPost::Id))
                    .col(string(BlogPost::Title))
                    .col(text(BlogPost::Excerpt))
                    .col(text(BlogPost::Content))
                    .col(timestamp(BlogPost::PublishedAt).default(Expr::current_timestamp()))
                    .col(timestamp(BlogPost::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(BlogPost::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BLOG_POST_PUBLISHED_AT)
                    .table(BlogPost::Table)
                    .col(BlogPost::PublishedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BLOG_POST_PUBLISHED_AT)
                    .table(BlogPost::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BlogPost::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BlogPost {
    Table,
    Id,
    Title,
    Excerpt,
    Content,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}
