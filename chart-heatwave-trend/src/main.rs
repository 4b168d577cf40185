//! Climate Hazard Trend Analyzer
//!
//! Pick a point on the map, choose a year range, and chart how many
//! heatwave events the analytics service counted for each year.
//!
//! Data flow:
//! 1. Map clicks and year inputs write straight into `AppState` signals.
//! 2. Analyze validates the inputs, takes a request ticket and POSTs the
//!    query to the analytics endpoint from a spawned task.
//! 3. The session applies the response only if its ticket is still the latest; the
//!    chart effect then redraws the series via D3.js.

use cht_core::config::AppConfig;
use cht_ui::components::{ErrorDisplay, LocationPicker, RangeForm, TrendChart};
use cht_ui::js_bridge;
use cht_ui::state::AppState;
use dioxus::prelude::*;

/// DOM id for the Leaflet map container div.
const MAP_CONTAINER_ID: &str = "location-picker-map";

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "heatwave-trend-chart";

/// Analytics endpoint override baked in at build time.
const ENDPOINT_OVERRIDE: Option<&str> = option_env!("CHT_ENDPOINT");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

fn app_config() -> AppConfig {
    let config = AppConfig::default();
    match ENDPOINT_OVERRIDE {
        Some(endpoint) => config.with_endpoint(endpoint),
        None => config,
    }
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| AppState::new(app_config()));

    // Load the Leaflet/D3 widget scripts once
    use_hook(move || {
        log::info!("Analytics endpoint: {}", state.config.peek().endpoint);
        js_bridge::init_scripts();
    });

    rsx! {
        div {
            style: "padding: 20px; font-family: system-ui, -apple-system, sans-serif;",

            h1 { "Climate Hazard Trend Analyzer" }

            RangeForm {}

            if let Some(notice) = state.session.read().notice() {
                ErrorDisplay { notice: notice.clone() }
            }

            LocationPicker { id: MAP_CONTAINER_ID.to_string() }

            TrendChart { id: CHART_CONTAINER_ID.to_string() }
        }
    }
}
