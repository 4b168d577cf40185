//! View state of one trend explorer session.
//!
//! [`TrendSession`] holds the raw form text and everything a fetch can
//! change: the shown series, the in-flight flag and the two kinds of
//! message. Submitting takes a ticket; settling applies an outcome only if
//! its ticket is still the latest.

use crate::config::YearDefaults;
use crate::coordinate::Coordinate;
use crate::error::FetchError;
use crate::tracker::{Notice, RequestTracker, Resolution, Ticket};
use crate::trend::{TrendRequest, TrendSeries};
use crate::year_range::{validate_year_inputs, YearBounds};
use log::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct TrendSession {
    start_year: String,
    end_year: String,
    series: TrendSeries,
    loading: bool,
    form_error: Option<String>,
    notice: Option<Notice>,
    tracker: RequestTracker,
}

impl TrendSession {
    pub fn new(years: &YearDefaults) -> Self {
        Self {
            start_year: years.start.to_string(),
            end_year: years.end.to_string(),
            series: TrendSeries::default(),
            loading: false,
            form_error: None,
            notice: None,
            tracker: RequestTracker::new(),
        }
    }

    /// Raw text of the start year input, exactly as typed.
    pub fn start_year(&self) -> &str {
        &self.start_year
    }

    /// Raw text of the end year input, exactly as typed.
    pub fn end_year(&self) -> &str {
        &self.end_year
    }

    /// Last accepted series; empty until the first successful fetch.
    pub fn series(&self) -> &TrendSeries {
        &self.series
    }

    /// Whether the most recently issued request is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn edit_start_year(&mut self, text: impl Into<String>) {
        self.start_year = text.into();
    }

    pub fn edit_end_year(&mut self, text: impl Into<String>) {
        self.end_year = text.into();
    }

    /// Validate the form and issue a ticket for a new request.
    ///
    /// Returns `None` and sets the form error when the years do not
    /// validate; nothing should be sent in that case.
    pub fn submit(
        &mut self,
        coordinate: Coordinate,
        bounds: YearBounds,
    ) -> Option<(Ticket, TrendRequest)> {
        let range = match validate_year_inputs(&self.start_year, &self.end_year, bounds) {
            Ok(range) => range,
            Err(e) => {
                info!("Trend query rejected locally: {}", e);
                self.form_error = Some(e.to_string());
                return None;
            }
        };

        self.form_error = None;
        self.notice = None;
        self.loading = true;
        let ticket = self.tracker.begin();
        Some((ticket, TrendRequest::new(coordinate, range)))
    }

    /// Apply the outcome of the request behind `ticket`.
    ///
    /// Returns `false` when a newer request has been issued since; the
    /// session is then left untouched.
    pub fn settle(&mut self, ticket: Ticket, outcome: Result<TrendSeries, FetchError>) -> bool {
        match self.tracker.resolve(ticket, outcome) {
            Resolution::Apply(series) => {
                self.series = series;
                self.loading = false;
                true
            }
            Resolution::Reject(notice) => {
                self.notice = Some(notice);
                self.loading = false;
                true
            }
            Resolution::Discard => {
                debug!(
                    "Superseded trend response ignored (generation {})",
                    ticket.generation()
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::NoticeKind;
    use crate::trend::parse_trend_response;

    const BOUNDS: YearBounds = YearBounds {
        min: 1940,
        max: 2024,
    };

    fn session() -> TrendSession {
        TrendSession::new(&YearDefaults::default())
    }

    fn series(body: &str) -> TrendSeries {
        parse_trend_response(body).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let s = session();
        assert_eq!((s.start_year(), s.end_year()), ("2000", "2020"));
        assert!(s.series().is_empty());
        assert!(!s.is_loading());
        assert_eq!(s.form_error(), None);
        assert_eq!(s.notice(), None);
    }

    #[test]
    fn test_every_edit_is_kept_verbatim() {
        let mut s = session();
        for text in ["", "2", "20", "201", "2010"] {
            s.edit_start_year(text);
            assert_eq!(s.start_year(), text);
        }
        s.edit_end_year("20x5");
        assert_eq!(s.end_year(), "20x5");
    }

    #[test]
    fn test_invalid_range_sets_form_error_without_request() {
        let mut s = session();
        s.edit_start_year("2020");
        s.edit_end_year("2000");
        assert!(s.submit(Coordinate::default(), BOUNDS).is_none());
        assert!(s.form_error().is_some());
        assert!(!s.is_loading());

        // A valid submit clears it
        s.edit_start_year("2000");
        s.edit_end_year("2020");
        assert!(s.submit(Coordinate::default(), BOUNDS).is_some());
        assert_eq!(s.form_error(), None);
        assert!(s.is_loading());
    }

    #[test]
    fn test_failure_keeps_series_and_shows_notice() {
        let mut s = session();
        let (ticket, _) = s.submit(Coordinate::default(), BOUNDS).unwrap();
        assert!(s.settle(ticket, Ok(series(r#"[{"year":2001,"heatwave_events":3}]"#))));

        let (ticket, _) = s.submit(Coordinate::default(), BOUNDS).unwrap();
        assert!(s.settle(ticket, Err(FetchError::Network("connection refused".into()))));

        assert_eq!(s.series().years(), vec![2001]);
        assert!(!s.is_loading());
        assert_eq!(
            s.notice().map(|n| n.kind),
            Some(NoticeKind::ServiceUnavailable)
        );

        // The next submission clears the notice
        s.submit(Coordinate::default(), BOUNDS).unwrap();
        assert_eq!(s.notice(), None);
    }

    #[test]
    fn test_stale_response_changes_nothing() {
        let mut s = session();
        let (first, _) = s.submit(Coordinate::default(), BOUNDS).unwrap();
        let (second, _) = s.submit(Coordinate::default(), BOUNDS).unwrap();

        // The older request settles while the newer one is still in flight
        assert!(!s.settle(first, Ok(series(r#"[{"year":2001,"heatwave_events":3}]"#))));
        assert!(s.series().is_empty());
        assert!(s.is_loading());

        assert!(!s.settle(first, Err(FetchError::Status(503))));
        assert_eq!(s.notice(), None);

        assert!(s.settle(second, Ok(series(r#"[{"year":2002,"heatwave_events":5}]"#))));
        assert_eq!(s.series().years(), vec![2002]);
        assert!(!s.is_loading());
    }

    #[test]
    fn test_submit_builds_request_from_form_and_coordinate() {
        let mut s = session();
        s.edit_start_year(" 2010");
        s.edit_end_year("2015 ");
        let coordinate = Coordinate::from_map_click(40.0, -75.0).unwrap();
        let (_, request) = s.submit(coordinate, BOUNDS).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"lat": 40.0, "lon": -75.0, "start_year": 2010, "end_year": 2015})
        );
    }
}
