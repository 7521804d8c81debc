//! Listing Loader
//!
//! Fan-out/fan-in: one index request, then every detail request at once.

use futures::future::join_all;

use super::{CatalogSource, FetchError};
use crate::models::Pokemon;

/// Load `limit` display records, in index order.
///
/// All detail requests run to completion; if any failed, the first failure
/// (in index order) is returned and no records are.
pub async fn load_pokemon<S>(source: &S, limit: usize) -> Result<Vec<Pokemon>, FetchError>
where
    S: CatalogSource + ?Sized,
{
    let references = source.fetch_index(limit).await?;
    log::debug!("fetched {} references, requesting details", references.len());

    let details = join_all(references.iter().map(|r| source.fetch_details(&r.url)))
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(references
        .into_iter()
        .zip(details)
        .map(|(reference, details)| Pokemon::from_parts(reference, details))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NamedResource, PokemonDetails, PokemonRef, Sprites, TypeSlot};
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// In-memory catalog of `count` entries named `mon-1..mon-N`
    struct FakeCatalog {
        count: usize,
        index_error: Option<FetchError>,
        failing: Vec<(String, FetchError)>,
        detail_calls: RefCell<Vec<String>>,
    }

    impl FakeCatalog {
        fn new(count: usize) -> Self {
            Self {
                count,
                index_error: None,
                failing: Vec::new(),
                detail_calls: RefCell::new(Vec::new()),
            }
        }

        fn failing_index(mut self, err: FetchError) -> Self {
            self.index_error = Some(err);
            self
        }

        fn failing_detail(mut self, n: usize, err: FetchError) -> Self {
            self.failing.push((url_for(n), err));
            self
        }
    }

    fn url_for(n: usize) -> String {
        format!("https://pokeapi.test/pokemon/{}/", n)
    }

    fn type_slot(slot: u32, name: &str) -> TypeSlot {
        TypeSlot {
            slot,
            kind: NamedResource {
                name: name.to_string(),
                url: format!("https://pokeapi.test/type/{}/", name),
            },
        }
    }

    #[async_trait(?Send)]
    impl CatalogSource for FakeCatalog {
        async fn fetch_index(&self, limit: usize) -> Result<Vec<PokemonRef>, FetchError> {
            if let Some(err) = &self.index_error {
                return Err(err.clone());
            }
            Ok((1..=self.count.min(limit))
                .map(|n| PokemonRef { name: format!("mon-{}", n), url: url_for(n) })
                .collect())
        }

        async fn fetch_details(&self, url: &str) -> Result<PokemonDetails, FetchError> {
            self.detail_calls.borrow_mut().push(url.to_string());
            if let Some((_, err)) = self.failing.iter().find(|(u, _)| u == url) {
                return Err(err.clone());
            }
            Ok(PokemonDetails {
                sprites: Sprites { front_default: Some(format!("{}sprite.png", url)) },
                types: vec![type_slot(1, "fire"), type_slot(2, "flying")],
            })
        }
    }

    #[test]
    fn test_loads_one_record_per_reference_in_order() {
        let catalog = FakeCatalog::new(18);
        let records = block_on(load_pokemon(&catalog, 18)).unwrap();

        assert_eq!(records.len(), 18);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.name, format!("mon-{}", i + 1));
            assert_eq!(record.url, url_for(i + 1));
            assert_eq!(record.types, vec!["fire", "flying"]);
        }
        assert_eq!(catalog.detail_calls.borrow().len(), 18);
    }

    #[test]
    fn test_limit_caps_requests() {
        let catalog = FakeCatalog::new(30);
        let records = block_on(load_pokemon(&catalog, 5)).unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(catalog.detail_calls.borrow().len(), 5);
    }

    #[test]
    fn test_empty_index_yields_empty_list() {
        let catalog = FakeCatalog::new(0);
        let records = block_on(load_pokemon(&catalog, 18)).unwrap();
        assert!(records.is_empty());
        assert!(catalog.detail_calls.borrow().is_empty());
    }

    #[test]
    fn test_index_failure_skips_details() {
        let catalog = FakeCatalog::new(18)
            .failing_index(FetchError::Network("offline".to_string()));
        let err = block_on(load_pokemon(&catalog, 18)).unwrap_err();

        assert_eq!(err, FetchError::Network("offline".to_string()));
        assert!(catalog.detail_calls.borrow().is_empty());
    }

    #[test]
    fn test_single_detail_failure_fails_whole_batch() {
        let catalog = FakeCatalog::new(18)
            .failing_detail(7, FetchError::Network("HTTP status server error (500)".to_string()));
        let result = block_on(load_pokemon(&catalog, 18));

        assert_eq!(
            result,
            Err(FetchError::Network("HTTP status server error (500)".to_string()))
        );
        // siblings are not cancelled
        assert_eq!(catalog.detail_calls.borrow().len(), 18);
    }

    #[test]
    fn test_first_failure_in_index_order_wins() {
        let catalog = FakeCatalog::new(10)
            .failing_detail(9, FetchError::Network("late".to_string()))
            .failing_detail(3, FetchError::Unexpected("bad shape".to_string()));
        let err = block_on(load_pokemon(&catalog, 10)).unwrap_err();

        assert_eq!(err, FetchError::Unexpected("bad shape".to_string()));
        assert_eq!(err.to_string(), "Some error occurred");
    }
}
