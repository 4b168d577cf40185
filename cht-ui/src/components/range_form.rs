//! Year range form with start/end inputs and the Analyze button.

use super::LoadingSpinner;
use crate::state::AppState;
use crate::workflow::submit_trend_query;
use dioxus::prelude::*;

/// Start/end year inputs plus the submit control.
///
/// Every input event is written straight into state, including text that
/// does not parse; validation happens on submit. The button stays enabled
/// while a request is outstanding.
#[component]
pub fn RangeForm() -> Element {
    let mut state = use_context::<AppState>();
    let (start, end, form_error, loading) = {
        let session = state.session.read();
        (
            session.start_year().to_string(),
            session.end_year().to_string(),
            session.form_error().map(str::to_string),
            session.is_loading(),
        )
    };

    let on_start_input = move |evt: Event<FormData>| {
        state.session.write().edit_start_year(evt.value());
    };

    let on_end_input = move |evt: Event<FormData>| {
        state.session.write().edit_end_year(evt.value());
    };

    rsx! {
        div {
            style: "margin-bottom: 10px;",
            div {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
                label {
                    style: "font-weight: bold;",
                    "Start Year: "
                    input {
                        id: "start-year",
                        r#type: "number",
                        value: "{start}",
                        style: "width: 80px;",
                        oninput: on_start_input,
                    }
                }
                label {
                    style: "font-weight: bold;",
                    "End Year: "
                    input {
                        id: "end-year",
                        r#type: "number",
                        value: "{end}",
                        style: "width: 80px;",
                        oninput: on_end_input,
                    }
                }
                button {
                    id: "analyze",
                    onclick: move |_| submit_trend_query(state),
                    "Analyze"
                }
                if loading {
                    LoadingSpinner {}
                }
            }
            if let Some(message) = form_error {
                p {
                    style: "margin: 6px 0 0 0; font-size: 13px; color: #C62828;",
                    "{message}"
                }
            }
        }
    }
}
