//! Pages
//!
//! One component per route.

mod form_page;
mod not_found_page;
mod pokemon_page;

pub use form_page::FormPage;
pub use not_found_page::NotFoundPage;
pub use pokemon_page::PokemonPage;
