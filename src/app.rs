//! Pokédex Frontend App
//!
//! Root component: error boundary, layout and the route switch.

use leptos::ev;
use leptos::prelude::*;

use crate::components::Layout;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{FormPage, NotFoundPage, PokemonPage};
use crate::router::{self, Route};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let (route, set_route) = signal(Route::from_path(&router::current_path()));

    // Provide context to all children
    let ctx = AppContext::new(config, (route, set_route));
    provide_context(ctx);

    // Browser back/forward; lives as long as the app
    let _ = window_event_listener(ev::popstate, move |_| ctx.sync_with_location());

    view! {
        <ErrorBoundary fallback=|errors| view! {
            <div class="status-screen error">
                <div class="status-message">"Something went wrong"</div>
                <ul class="error-list">
                    {move || errors
                        .get()
                        .into_iter()
                        .map(|(_, err)| view! { <li>{err.to_string()}</li> })
                        .collect_view()}
                </ul>
            </div>
        }>
            <Layout>
                // Pages remount on every switch, so nothing carries over
                {move || match route.get() {
                    Route::Pokemon => view! { <PokemonPage /> }.into_any(),
                    Route::Form => view! { <FormPage /> }.into_any(),
                    Route::NotFound => view! { <NotFoundPage /> }.into_any(),
                }}
            </Layout>
        </ErrorBoundary>
    }
}
