//! Layout Component
//!
//! Full-height page background with a centered content column.

use leptos::prelude::*;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <div class="layout-inner">{children()}</div>
        </div>
    }
}
