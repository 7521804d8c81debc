//! Pokémon Listing Page
//!
//! Loads one fixed page of Pokémon on mount and renders them as cards.
//! Any failed request replaces the whole page with an error.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{load_pokemon, FetchError, HttpCatalog};
use crate::components::{
    ErrorScreen, LoadingScreen, NavButton, NavDirection, PageHeader, PokemonCard,
};
use crate::context::use_app_context;
use crate::models::Pokemon;
use crate::router::Route;

#[derive(Debug, Clone, PartialEq)]
enum ListingState {
    Loading,
    Failed(FetchError),
    Loaded(Vec<Pokemon>),
}

#[component]
pub fn PokemonPage() -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(ListingState::Loading);

    // Fetch once per mount; coming back to this page fetches again
    Effect::new(move |_| {
        let config = ctx.config();
        spawn_local(async move {
            let catalog = HttpCatalog::new(&config);
            log::info!("loading {} pokémon from {}", config.page_size, config.api_base_url);

            let next = match load_pokemon(&catalog, config.page_size).await {
                Ok(records) => {
                    log::info!("loaded {} pokémon", records.len());
                    ListingState::Loaded(records)
                }
                Err(err) => {
                    log::error!("listing failed: {}", err.detail());
                    ListingState::Failed(err)
                }
            };
            set_state.set(next);
        });
    });

    move || match state.get() {
        ListingState::Loading => view! { <LoadingScreen message="Loading Pokémon..." /> }.into_any(),
        ListingState::Failed(err) => view! { <ErrorScreen message=err.to_string() /> }.into_any(),
        ListingState::Loaded(records) => view! {
            <div class="pokemon-page">
                <PageHeader>
                    <NavButton to=Route::Form label="To Form" direction=NavDirection::Forward />
                </PageHeader>

                <div class="card-grid">
                    {records
                        .into_iter()
                        .enumerate()
                        .map(|(index, pokemon)| view! { <PokemonCard index pokemon /> })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),
    }
}
