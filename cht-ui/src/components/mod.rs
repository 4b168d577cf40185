//! Dioxus RSX components for the trend explorer view.

mod error_display;
mod loading_spinner;
mod location_picker;
mod range_form;
mod trend_chart;

pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use location_picker::LocationPicker;
pub use range_form::RangeForm;
pub use trend_chart::TrendChart;
