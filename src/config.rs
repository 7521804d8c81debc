//! Application Configuration
//!
//! Build-time defaults, shared with components through `AppContext`.

use log::LevelFilter;

/// Public PokéAPI v2 root
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Number of references requested from the list endpoint
pub const DEFAULT_PAGE_SIZE: usize = 18;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// API root, without trailing slash
    pub api_base_url: String,
    /// Fixed page size for the listing
    pub page_size: usize,
    /// Console log level
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

impl AppConfig {
    /// URL of the list endpoint
    pub fn pokemon_index_url(&self) -> String {
        format!("{}/pokemon", self.api_base_url)
    }
}
