//! Not Found Page
//!
//! Shown for any path other than `/` and `/form`.

use leptos::prelude::*;

use crate::components::{NavButton, NavDirection, PageHeader};
use crate::router::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <PageHeader>
                <NavButton to=Route::Pokemon label="To Pokémons" direction=NavDirection::Back />
            </PageHeader>
            <p class="not-found-message">"Page not found"</p>
        </div>
    }
}
