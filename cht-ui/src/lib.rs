//! Dioxus components and JS bridge for the heatwave trend explorer.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map and D3.js chart via `js_sys::eval()`
//! - `fetch`: a `TrendTransport` over the browser's `fetch`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `workflow`: the submit → fetch → resolve cycle
//! - `components`: RSX components (location picker, range form, chart, notices)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
pub mod workflow;
