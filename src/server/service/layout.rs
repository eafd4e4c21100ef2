use chrono::{Datelike, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        content::ContentType,
        layout::{FooterDto, FooterSectionDto, HeaderDto, LinkDto, MenuItemDto},
    },
    server::{
        data::{shop::category::CategoryRepository, url_rewrite::UrlRewriteRepository},
        error::Error,
        model::app::StoreSettings,
    },
};

pub struct LayoutService<'a> {
    db: &'a DatabaseConnection,
    settings: &'a StoreSettings,
}

impl<'a> LayoutService<'a> {
    pub fn new(db: &'a DatabaseConnection, settings: &'a StoreSettings) -> Self {
        Self { db, settings }
    }

    /// Header menu: menu categories in position order followed by the blog
    pub async fn header(&self) -> Result<HeaderDto, Error> {
        let mut menu: Vec<MenuItemDto> = self
            .category_links()
            .await?
            .into_iter()
            .map(|link| MenuItemDto {
                name: link.name,
                url: link.url,
            })
            .collect();

        menu.push(MenuItemDto {
            name: "Blog".to_string(),
            url: "/blog".to_string(),
        });

        Ok(HeaderDto {
            store_name: self.settings.store_name.clone(),
            menu,
        })
    }

    pub async fn footer(&self) -> Result<FooterDto, Error> {
        let shop = FooterSectionDto {
            name: "Shop".to_string(),
            links: self.category_links().await?,
        };

        let customer_service = FooterSectionDto {
            name: "Customer service".to_string(),
            links: vec![
                link("Cart", "/cart"),
                link("Checkout", "/checkout"),
                link("My account", "/account"),
                link("Reset password", "/reset-password"),
            ],
        };

        let about = FooterSectionDto {
            name: "About us".to_string(),
            links: vec![link("Blog", "/blog")],
        };

        Ok(FooterDto {
            sections: vec![shop, customer_service, about],
            copyright: format!("© {} {}", Utc::now().year(), self.settings.store_name),
        })
    }

    /// Menu categories that have a storefront path, in menu order
    async fn category_links(&self) -> Result<Vec<LinkDto>, Error> {
        let categories = CategoryRepository::new(self.db)
            .get_menu_categories()
            .await?;

        let mut paths = UrlRewriteRepository::new(self.db)
            .get_paths_for(
                ContentType::ShopCategory,
                categories.iter().map(|c| c.id).collect(),
            )
            .await?;

        Ok(categories
            .into_iter()
            .filter_map(|category| {
                paths.remove(&category.id).map(|url| LinkDto {
                    name: category.name,
                    url,
                })
            })
            .collect())
    }
}

fn link(name: &str, url: &str) -> LinkDto {
    LinkDto {
        name: name.to_string(),
        url: url.to_string(),
    }
}
