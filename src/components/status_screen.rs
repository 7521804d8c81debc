//! Status Screens
//!
//! Full-page loading and error states; either one replaces page content.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="status-screen loading">
            <div class="status-message pulse">{message}</div>
        </div>
    }
}

#[component]
pub fn ErrorScreen(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="status-screen error">
            <div class="status-message">{format!("Error: {}", message)}</div>
        </div>
    }
}
