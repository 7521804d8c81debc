//! Navigation Button Component
//!
//! The single control each page offers for moving to the other page.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::router::Route;

/// Which way the arrow points; also pins the button to that side of the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Back,
    Forward,
}

#[component]
pub fn NavButton(
    to: Route,
    #[prop(into)] label: String,
    direction: NavDirection,
) -> impl IntoView {
    let ctx = use_app_context();

    let (class, text) = match direction {
        NavDirection::Back => ("nav-btn nav-btn-left", format!("← {}", label)),
        NavDirection::Forward => ("nav-btn nav-btn-right", format!("{} →", label)),
    };

    view! {
        <button type="button" class=class on:click=move |_| ctx.navigate(to)>
            {text}
        </button>
    }
}
