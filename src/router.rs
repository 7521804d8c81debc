//! Client-side Routing
//!
//! Two pages addressed by path. The browser History API keeps the address
//! bar and back/forward buttons in step with the current `Route`.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`: Pokémon listing
    Pokemon,
    /// `/form`: registration form
    Form,
    /// Any other path
    NotFound,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Pokemon => "/",
            Route::Form => "/form",
            Route::NotFound => "/404",
        }
    }

    /// Map a location pathname to a route (a trailing slash is ignored)
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Pokemon,
            "/form" => Route::Form,
            _ => Route::NotFound,
        }
    }
}

/// Pathname of the current document, `/` outside a browser
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Add a history entry for `route` without reloading the page
pub fn push_history(route: Route) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(route.path()))
}
