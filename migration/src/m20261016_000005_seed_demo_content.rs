use sea_orm_migration::prelude::*;

use crate::{
    m20261016_000001_shop_category::ShopCategory, m20261016_000002_shop_product::ShopProduct,
    m20261016_000003_blog_post::BlogPost, m20261016_000004_url_rewrite::UrlRewrite,
};

/// (id, name, description, position, path)
const CATEGORIES: &[(i32, &str, &str, i32, &str)] = &[
    (1, "Women", "Tops, bottoms and everything in between.", 1, "/women.html"),
    (2, "Men", "Workout gear built to last.", 2, "/men.html"),
    (3, "Gear", "Bags, bottles and fitness equipment.", 3, "/gear.html"),
];

/// (id, category_id, sku, name, description, price_cents, path)
const PRODUCTS: &[(i32, i32, &str, &str, &str, i64, &str)] = &[
    (1, 1, "WT09", "Breathe-Easy Tank", "A loose tank that keeps you cool.", 3400, "/breathe-easy-tank.html"),
    (2, 2, "MT07", "Argus All-Weather Tank", "Sleeveless shirt for every season.", 2200, "/argus-all-weather-tank.html"),
    (3, 3, "24-MB02", "Fusion Backpack", "Spacious backpack with a laptop sleeve.", 5900, "/fusion-backpack.html"),
    (4, 3, "24-WB04", "Push It Messenger Bag", "Messenger bag with a padded strap.", 4500, "/push-it-messenger-bag.html"),
];

/// (id, title, excerpt, content, path)
const BLOG_POSTS: &[(i32, &str, &str, &str, &str)] = &[
    (1, "Hello world", "Welcome to the shop blog.", "This is the first post on the Deity shop blog.", "/hello-world.html"),
    (2, "Summer collection", "Our summer picks are in.", "Lightweight tanks and bags for the warm months.", "/summer-collection.html"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut categories = Query::insert()
            .into_table(ShopCategory::Table)
            .columns([
                ShopCategory::Id,
                ShopCategory::Name,
                ShopCategory::Description,
                ShopCategory::IncludeInMenu,
                ShopCategory::Position,
            ])
            .to_owned();
        let mut products = Query::insert()
            .into_table(ShopProduct::Table)
            .columns([
                ShopProduct::Id,
                ShopProduct::CategoryId,
                ShopProduct::Sku,
                ShopProduct::Name,
                ShopProduct::Description,
                ShopProduct::PriceCents,
                ShopProduct::InStock,
            ])
            .to_owned();
        let mut posts = Query::insert()
            .into_table(BlogPost::Table)
            .columns([
                BlogPost::Id,
                BlogPost::Title,
                BlogPost::Excerpt,
                BlogPost::Content,
            ])
            .to_owned();
        let mut rewrites = Query::insert()
            .into_table(UrlRewrite::Table)
            .columns([
                UrlRewrite::Path,
                UrlRewrite::ContentType,
                UrlRewrite::EntityId,
            ])
            .to_owned();

        for &(id, name, description, position, path) in CATEGORIES {
            categories.values_panic([
                id.into(),
                name.into(),
                description.into(),
                true.into(),
                position.into(),
            ]);
            rewrites.values_panic([path.into(), "shop-category".into(), id.into()]);
        }

        for &(id, category_id, sku, name, description, price_cents, path) in PRODUCTS {
            products.values_panic([
                id.into(),
                category_id.into(),
                sku.into(),
                name.into(),
                description.into(),
                price_cents.into(),
                true.into(),
            ]);
            rewrites.values_panic([path.into(), "shop-product".into(), id.into()]);
        }

        for &(id, title, excerpt, content, path) in BLOG_POSTS {
            posts.values_panic([id.into(), title.into(), excerpt.into(), content.into()]);
            rewrites.values_panic([path.into(), "blog-post".into(), id.into()]);
        }

        manager.exec_stmt(categories).await?;
        manager.exec_stmt(products).await?;
        manager.exec_stmt(posts).await?;
        manager.exec_stmt(rewrites).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(UrlRewrite::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(BlogPost::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(ShopProduct::Table).to_owned())
            .await?;
        manager
            .exec_stmt(Query::delete().from_table(ShopCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}
