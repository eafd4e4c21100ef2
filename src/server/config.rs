use crate::server::error::config::ConfigError;

pub const DEFAULT_STORE_NAME: &str = "Deity Shop with Blog";
pub const DEFAULT_BLOG_PAGE_SIZE: u64 = 5;

pub struct Config {
    pub database_url: String,
    pub store_name: String,
    pub blog_page_size: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let store_name = lookup("STORE_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORE_NAME.to_string());

        let blog_page_size = match lookup("BLOG_PAGE_SIZE") {
            Some(raw) => parse_page_size(&raw)?,
            None => DEFAULT_BLOG_PAGE_SIZE,
        };

        Ok(Self {
            database_url,
            store_name,
            blog_page_size,
        })
    }
}

fn parse_page_size(raw: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvValue {
        var: "BLOG_PAGE_SIZE".to_string(),
        reason: reason.to_string(),
    };

    match raw.trim().parse::<u64>() {
        Ok(0) => Err(invalid("must be greater than zero")),
        Ok(size) => Ok(size),
        Err(e) => Err(invalid(&e.to_string())),
    }
}
