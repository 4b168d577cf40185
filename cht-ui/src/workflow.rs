//! Submit → fetch → settle cycle for the trend explorer.
//!
//! Validation and ticketing run synchronously on the click turn; the request
//! itself runs in a spawned task whose outcome goes back through
//! [`TrendSession::settle`](cht_core::session::TrendSession::settle).

use crate::fetch::BrowserTransport;
use crate::state::AppState;
use cht_core::client::{TrendClient, TrendTransport};
use dioxus::prelude::*;

/// Handle a click on the submit control.
pub fn submit_trend_query(state: AppState) {
    submit_with(state, BrowserTransport);
}

/// Submit the current form over `transport`.
pub fn submit_with<T: TrendTransport + 'static>(mut state: AppState, transport: T) {
    let config = state.config.peek().clone();
    let coordinate = *state.coordinate.peek();
    let submitted = state
        .session
        .write()
        .submit(coordinate, config.years.bounds());
    let Some((ticket, request)) = submitted else {
        return;
    };

    spawn(async move {
        let client = TrendClient::new(config.endpoint, transport);
        let outcome = client.fetch_trend(&request).await;
        state.session.write().settle(ticket, outcome);
    });
}
