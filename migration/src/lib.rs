pub use sea_orm_migration::prelude::*;

mod m20261016_000001_shop_category;
mod m20261016_000002_shop_product;
mod m20261016_000003_blog_post;
mod m20261016_000004_url_rewrite;
mod m20261016_000005_seed_demo_content;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_shop_category::Migration),
            Box::new(m20261016_000002_shop_product::Migration),
            Box::new(m20261016_000003_blog_post::Migration),
            Box::new(m20261016_000004_url_rewrite::Migration),
            Box::new(m20261016_000005_seed_demo_content::Migration),
        ]
    }
}
