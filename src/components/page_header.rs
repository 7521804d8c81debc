//! Page Header Component
//!
//! Logo banner with the page's navigation control.

use leptos::prelude::*;

/// Bundled logo, served from `public/`
pub const LOGO_SRC: &str = "/public/pokemon-logo.svg";

#[component]
pub fn PageHeader(children: Children) -> impl IntoView {
    view! {
        <header class="page-header">
            <img src=LOGO_SRC alt="Pokémon logo" class="page-logo" />
            {children()}
        </header>
    }
}
