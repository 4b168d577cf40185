//! Stale-response suppression for overlapping trend requests.
//!
//! Each submission takes a ticket. Only the response carrying the most
//! recently issued ticket may touch view state; everything older is dropped,
//! regardless of arrival order.

use crate::error::FetchError;
use crate::trend::TrendSeries;
use log::debug;

/// Generation number of one submitted request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Which user-facing notice a failed fetch maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Network failure or non-success status
    ServiceUnavailable,
    /// The service answered with something that is not a trend series
    UnexpectedResponse,
}

/// A visible, non-blocking message about the last fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl From<&FetchError> for Notice {
    fn from(err: &FetchError) -> Self {
        let (kind, message) = if err.is_unavailable() {
            (
                NoticeKind::ServiceUnavailable,
                format!("Could not reach the analytics service. {err}"),
            )
        } else {
            (
                NoticeKind::UnexpectedResponse,
                format!("The analytics service sent an unexpected response. {err}"),
            )
        };
        Notice { kind, message }
    }
}

/// What the view should do with a finished fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Replace the series.
    Apply(TrendSeries),
    /// Keep the series, show the notice.
    Reject(Notice),
    /// A newer request exists; change nothing.
    Discard,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the ticket for a new request, superseding all earlier ones.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    pub fn resolve(&self, ticket: Ticket, outcome: Result<TrendSeries, FetchError>) -> Resolution {
        if !self.is_current(ticket) {
            debug!(
                "Dropping stale trend response (generation {}, latest {})",
                ticket.0, self.latest
            );
            return Resolution::Discard;
        }
        match outcome {
            Ok(series) => Resolution::Apply(series),
            Err(e) => Resolution::Reject(Notice::from(&e)),
        }
    }
}
