//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use cht_core::config::AppConfig;
use cht_core::coordinate::Coordinate;
use cht_core::session::TrendSession;
use dioxus::prelude::*;

/// Shared state of the trend explorer view.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Endpoint, map and chart settings
    pub config: Signal<AppConfig>,
    /// Current map selection
    pub coordinate: Signal<Coordinate>,
    /// Form text, shown series, in-flight flag and messages
    pub session: Signal<TrendSession>,
}

impl AppState {
    /// Create a new AppState seeded from the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            coordinate: Signal::new(config.default_coordinate),
            session: Signal::new(TrendSession::new(&config.years)),
            config: Signal::new(config),
        }
    }
}
