//! Inline in-flight indicator.

use dioxus::prelude::*;

/// Shown next to the Analyze button while the latest request is outstanding.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        span {
            style: "font-size: 13px; color: #666;",
            "Analyzing..."
        }
    }
}
