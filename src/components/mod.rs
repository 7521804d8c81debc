//! UI Components
//!
//! Reusable Leptos components.

mod form_field;
mod layout;
mod nav_button;
mod page_header;
mod pokemon_card;
mod registration_form;
mod status_screen;

pub use form_field::{FormField, GenderSelect};
pub use layout::Layout;
pub use nav_button::{NavButton, NavDirection};
pub use page_header::PageHeader;
pub use pokemon_card::PokemonCard;
pub use registration_form::RegistrationForm;
pub use status_screen::{ErrorScreen, LoadingScreen};
