//! Pokémon Card Component

use leptos::prelude::*;

use crate::format::{capitalize, format_types, position_badge};
use crate::models::Pokemon;

/// Card with position badge, sprite, name and types
#[component]
pub fn PokemonCard(index: usize, pokemon: Pokemon) -> impl IntoView {
    view! {
        <div class="pokemon-card">
            <div class="card-badge">{position_badge(index)}</div>
            <img src=pokemon.image alt=pokemon.name.clone() class="card-image" />
            <h2 class="card-name">{capitalize(&pokemon.name)}</h2>
            <p class="card-types">{format_types(&pokemon.types)}</p>
        </div>
    }
}
