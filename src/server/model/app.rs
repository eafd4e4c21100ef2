use sea_orm::DatabaseConnection;

use crate::server::config::{Config, DEFAULT_BLOG_PAGE_SIZE, DEFAULT_STORE_NAME};

/// Storefront settings shared by the layout and blog services
#[derive(Clone, Debug)]
pub struct StoreSettings {
    pub store_name: String,
    pub blog_page_size: u64,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_string(),
            blog_page_size: DEFAULT_BLOG_PAGE_SIZE,
        }
    }
}

impl From<&Config> for StoreSettings {
    fn from(config: &Config) -> Self {
        Self {
            store_name: config.store_name.clone(),
            blog_page_size: config.blog_page_size,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub settings: StoreSettings,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            settings: StoreSettings::default(),
        }
    }
}
