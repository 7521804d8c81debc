//! HTTP Catalog
//!
//! `reqwest` client for PokéAPI. On wasm32 reqwest runs on the browser's
//! `fetch`, so no TLS or runtime features are needed.

use async_trait::async_trait;

use super::{CatalogSource, FetchError};
use crate::config::AppConfig;
use crate::models::{PokemonDetails, PokemonIndex, PokemonRef};

#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    index_url: String,
}

impl HttpCatalog {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            index_url: config.pokemon_index_url(),
        }
    }
}

#[async_trait(?Send)]
impl CatalogSource for HttpCatalog {
    async fn fetch_index(&self, limit: usize) -> Result<Vec<PokemonRef>, FetchError> {
        let index: PokemonIndex = self
            .client
            .get(&self.index_url)
            .query(&[("limit", limit)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(index.results)
    }

    async fn fetch_details(&self, url: &str) -> Result<PokemonDetails, FetchError> {
        let details = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(details)
    }
}
