//! PokéAPI Access
//!
//! `CatalogSource` is the seam between pages and the network: `HttpCatalog`
//! talks to the real API, tests substitute an in-memory source.

mod catalog;
mod error;
mod loader;

use async_trait::async_trait;

use crate::models::{PokemonDetails, PokemonRef};

pub use catalog::HttpCatalog;
pub use error::FetchError;
pub use loader::load_pokemon;

/// Read-only access to the Pokémon catalog
///
/// Futures are `?Send`: everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Fetch the first `limit` item references
    async fn fetch_index(&self, limit: usize) -> Result<Vec<PokemonRef>, FetchError>;

    /// Fetch details for one reference locator
    async fn fetch_details(&self, url: &str) -> Result<PokemonDetails, FetchError>;
}
