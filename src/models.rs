//! Frontend Models
//!
//! PokéAPI response shapes and the display records built from them.

use serde::{Deserialize, Serialize};

/// `{ name, url }` pair as returned by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Item reference: one entry of `GET /pokemon?limit=N`
pub type PokemonRef = NamedResource;

/// Body of `GET /pokemon?limit=N` (paging links are ignored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonIndex {
    pub results: Vec<PokemonRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    /// Null for some forms
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Subset of `GET /pokemon/{id}` used by the listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetails {
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
}

/// Display record: fully resolved, render-ready item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    pub url: String,
    /// Empty when the API has no sprite
    pub image: String,
    /// Type names in API order
    pub types: Vec<String>,
}

impl Pokemon {
    /// Combine a reference with its fetched details
    pub fn from_parts(reference: PokemonRef, details: PokemonDetails) -> Self {
        Self {
            name: reference.name,
            url: reference.url,
            image: details.sprites.front_default.unwrap_or_default(),
            types: details.types.into_iter().map(|t| t.kind.name).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: &str = r#"{
        "id": 1,
        "name": "bulbasaur",
        "sprites": { "front_default": "https://img/1.png", "back_default": null },
        "types": [
            { "slot": 1, "type": { "name": "grass", "url": "https://pokeapi.co/api/v2/type/12/" } },
            { "slot": 2, "type": { "name": "poison", "url": "https://pokeapi.co/api/v2/type/4/" } }
        ]
    }"#;

    fn bulbasaur_ref() -> PokemonRef {
        PokemonRef {
            name: "bulbasaur".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon/1/".to_string(),
        }
    }

    #[test]
    fn test_details_ignore_unknown_fields() {
        let details: PokemonDetails = serde_json::from_str(BULBASAUR).unwrap();
        assert_eq!(details.sprites.front_default.as_deref(), Some("https://img/1.png"));
        assert_eq!(details.types.len(), 2);
        assert_eq!(details.types[0].kind.name, "grass");
    }

    #[test]
    fn test_index_parses_results() {
        let body = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=18&limit=18",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        }"#;
        let index: PokemonIndex = serde_json::from_str(body).unwrap();
        assert_eq!(index.results.len(), 2);
        assert_eq!(index.results[1].name, "ivysaur");
    }

    #[test]
    fn test_from_parts_keeps_type_order() {
        let details: PokemonDetails = serde_json::from_str(BULBASAUR).unwrap();
        let pokemon = Pokemon::from_parts(bulbasaur_ref(), details);
        assert_eq!(pokemon.name, "bulbasaur");
        assert_eq!(pokemon.url, "https://pokeapi.co/api/v2/pokemon/1/");
        assert_eq!(pokemon.image, "https://img/1.png");
        assert_eq!(pokemon.types, vec!["grass", "poison"]);
    }

    #[test]
    fn test_missing_sprite_becomes_empty_image() {
        let details = PokemonDetails {
            sprites: Sprites { front_default: None },
            types: vec![],
        };
        let pokemon = Pokemon::from_parts(bulbasaur_ref(), details);
        assert_eq!(pokemon.image, "");
        assert!(pokemon.types.is_empty());
    }
}
