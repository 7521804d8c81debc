//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::router::{self, Route};

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Read-only configuration
    config: StoredValue<AppConfig>,
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(config: AppConfig, route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            config: StoredValue::new(config),
            route: route.0,
            set_route: route.1,
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Switch page and record it in browser history
    pub fn navigate(&self, route: Route) {
        if self.route.get_untracked() == route {
            return;
        }
        if let Err(err) = router::push_history(route) {
            log::warn!("history push failed: {:?}", err);
        }
        log::debug!("navigate to {}", route.path());
        self.set_route.set(route);
    }

    /// Follow the address bar after back/forward
    pub fn sync_with_location(&self) {
        let route = Route::from_path(&router::current_path());
        log::debug!("history moved to {}", route.path());
        self.set_route.set(route);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
