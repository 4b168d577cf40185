//! Core types and trend API client for the climate hazard trend analyzer.
//!
//! Platform-neutral: the web app and the CLI both build on this crate and
//! supply their own [`client::TrendTransport`].

pub mod chart;
pub mod client;
pub mod config;
pub mod coordinate;
pub mod error;
pub mod session;
pub mod tracker;
pub mod trend;
pub mod year_range;
