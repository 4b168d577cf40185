//! Fetch notice component.

use cht_core::tracker::{Notice, NoticeKind};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub notice: Notice,
}

fn heading(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::ServiceUnavailable => "Service unavailable: ",
        NoticeKind::UnexpectedResponse => "Unexpected response: ",
    }
}

/// Displays a fetch notice in a styled box. Non-blocking: the rest of the
/// view stays usable and the previous chart stays visible.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let title = heading(props.notice.kind);
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "{title}" }
            "{props.notice.message}"
        }
    }
}
