use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PAGE_SIZE: u64 = 25;
pub const DEFAULT_MAX_PAGE_SIZE: u64 = 100;

#[derive(Clone, Debug)]
pub struct Config {
    /// PostgreSQL URL. Without one, orders are served from memory.
    pub database_url: Option<String>,
    pub port: u16,
    /// Page size used when a listing request does not give one
    pub default_page_size: u64,
    /// Largest page size a client may ask for
    pub max_page_size: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            port: DEFAULT_PORT,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let max_page_size = lookup("MAX_PAGE_SIZE")
            .and_then(|v| v.parse().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_MAX_PAGE_SIZE);

        Self {
            database_url: lookup("DATABASE_URL").filter(|v| !v.is_empty()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            default_page_size: lookup("DEFAULT_PAGE_SIZE")
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .min(max_page_size),
            max_page_size,
        }
    }
}
