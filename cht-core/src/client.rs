//! Trend API client.
//!
//! [`TrendClient`] owns the fetch + transform pipeline: encode the request,
//! hand it to a [`TrendTransport`], classify the status and parse the body.
//! Transports only move bytes, so the browser, the CLI and tests each plug in
//! their own.

use crate::coordinate::Coordinate;
use crate::error::{FetchError, RangeError};
use crate::trend::{parse_trend_response, TrendRequest, TrendSeries};
use crate::year_range::{validate_year_inputs, YearBounds};
use log::{info, warn};

/// Status and body of an HTTP response, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON body with `POST` and returns whatever came back.
///
/// Implementations report transport-level failures as
/// [`FetchError::Network`]; status codes are left to the caller.
#[allow(async_fn_in_trait)]
pub trait TrendTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, FetchError>;
}

/// Validate the form inputs and build the outbound request.
///
/// Nothing is sent when this fails.
pub fn prepare_request(
    coordinate: Coordinate,
    start_year: &str,
    end_year: &str,
    bounds: YearBounds,
) -> Result<TrendRequest, RangeError> {
    let range = validate_year_inputs(start_year, end_year, bounds)?;
    Ok(TrendRequest::new(coordinate, range))
}

#[derive(Debug, Clone)]
pub struct TrendClient<T> {
    endpoint: String,
    transport: T,
}

impl<T: TrendTransport> TrendClient<T> {
    pub fn new(endpoint: impl Into<String>, transport: T) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the request and turn the response into a series.
    pub async fn fetch_trend(&self, request: &TrendRequest) -> Result<TrendSeries, FetchError> {
        let body = serde_json::to_string(request).map_err(|e| FetchError::Encode(e.to_string()))?;
        info!(
            "Requesting heatwave trend for ({:.4}, {:.4}) {}-{}",
            request.lat, request.lon, request.start_year, request.end_year
        );

        let response = match self.transport.post_json(&self.endpoint, body).await {
            Ok(r) => r,
            Err(e) => {
                warn!("Trend request to {} failed: {}", self.endpoint, e);
                return Err(e);
            }
        };

        if !response.is_success() {
            warn!(
                "Trend request to {} returned status {}",
                self.endpoint, response.status
            );
            return Err(FetchError::Status(response.status));
        }

        let series = parse_trend_response(&response.body).inspect_err(|e| {
            warn!("Rejected trend response from {}: {}", self.endpoint, e);
        })?;
        info!("Received {} trend points", series.len());
        Ok(series)
    }
}

/// Native transport backed by `reqwest`.
#[cfg(feature = "api")]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(feature = "api")]
impl ReqwestTransport {
    pub fn new(timeout: std::time::Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client })
    }
}

#[cfg(feature = "api")]
impl TrendTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, FetchError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::chart::ChartSeries;
    use crate::config::{AppConfig, YearDefaults};
    use crate::session::TrendSession;
    use crate::tracker::{NoticeKind, Ticket};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use tokio::sync::oneshot;

    const URL: &str = "http://localhost:8000/api/heatwave-trend";

    const BOUNDS: YearBounds = YearBounds {
        min: 1940,
        max: 2024,
    };

    /// Replays canned outcomes and records every request it was given.
    #[derive(Default)]
    struct ScriptedTransport {
        replies: RefCell<VecDeque<Result<RawResponse, FetchError>>>,
        sent: RefCell<Vec<(String, serde_json::Value)>>,
    }

    impl ScriptedTransport {
        fn replying(replies: Vec<Result<RawResponse, FetchError>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                sent: RefCell::default(),
            }
        }
    }

    impl TrendTransport for &ScriptedTransport {
        async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, FetchError> {
            let json = serde_json::from_str(&body).expect("request body is JSON");
            self.sent.borrow_mut().push((url.to_string(), json));
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Network("no scripted reply".into())))
        }
    }

    /// Each call waits for its own externally-released response.
    struct GatedTransport {
        gates: RefCell<VecDeque<oneshot::Receiver<RawResponse>>>,
    }

    impl TrendTransport for &GatedTransport {
        async fn post_json(&self, _url: &str, _body: String) -> Result<RawResponse, FetchError> {
            let gate = self.gates.borrow_mut().pop_front().expect("gate available");
            gate.await.map_err(|e| FetchError::Network(e.to_string()))
        }
    }

    fn ok(body: &str) -> Result<RawResponse, FetchError> {
        Ok(RawResponse {
            status: 200,
            body: body.to_string(),
        })
    }

    fn request(start: i32, end: i32) -> TrendRequest {
        prepare_request(
            Coordinate::default(),
            &start.to_string(),
            &end.to_string(),
            BOUNDS,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_success_replaces_series() {
        let transport = ScriptedTransport::replying(vec![ok(
            r#"[{"year":2001,"heatwave_events":3},{"year":2002,"heatwave_events":5}]"#,
        )]);
        let client = TrendClient::new(URL, &transport);
        let series = client.fetch_trend(&request(2001, 2002)).await.unwrap();
        assert_eq!(series.years(), vec![2001, 2002]);
        assert_eq!(series.events(), vec![3.0, 5.0]);
    }

    #[tokio::test]
    async fn test_non_success_status_ignores_body() {
        let transport = ScriptedTransport::replying(vec![Ok(RawResponse {
            status: 500,
            body: r#"[{"year":2001,"heatwave_events":3}]"#.to_string(),
        })]);
        let client = TrendClient::new(URL, &transport);
        assert_eq!(
            client.fetch_trend(&request(2001, 2001)).await,
            Err(FetchError::Status(500))
        );
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        let transport = ScriptedTransport::replying(vec![ok(r#"{"detail":"Not Found"}"#)]);
        let client = TrendClient::new(URL, &transport);
        assert!(matches!(
            client.fetch_trend(&request(2001, 2001)).await,
            Err(FetchError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_network_failure_keeps_previous_series() {
        let transport = ScriptedTransport::replying(vec![
            ok(r#"[{"year":2001,"heatwave_events":3}]"#),
            Err(FetchError::Network("connection refused".into())),
        ]);
        let client = TrendClient::new(URL, &transport);
        let mut session = TrendSession::new(&YearDefaults::default());

        for _ in 0..2 {
            let (ticket, request) = session.submit(Coordinate::default(), BOUNDS).unwrap();
            let outcome = client.fetch_trend(&request).await;
            assert!(session.settle(ticket, outcome));
        }

        assert_eq!(session.series().years(), vec![2001]);
        assert!(!session.is_loading());
        assert_eq!(
            session.notice().map(|n| n.kind),
            Some(NoticeKind::ServiceUnavailable)
        );
    }

    #[test]
    fn test_invalid_range_builds_no_request() {
        assert!(prepare_request(Coordinate::default(), "2020", "2000", BOUNDS).is_err());
        assert!(prepare_request(Coordinate::default(), "abc", "2000", BOUNDS).is_err());
    }

    #[tokio::test]
    async fn test_overlapping_requests_latest_issued_wins() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let transport = GatedTransport {
            gates: RefCell::new(VecDeque::from([first_rx, second_rx])),
        };
        let client = TrendClient::new(URL, &transport);

        let session = RefCell::new(TrendSession::new(&YearDefaults::default()));
        session.borrow_mut().edit_start_year("2001");
        session.borrow_mut().edit_end_year("2001");
        let (first_ticket, first_request) =
            session.borrow_mut().submit(Coordinate::default(), BOUNDS).unwrap();
        session.borrow_mut().edit_start_year("2002");
        session.borrow_mut().edit_end_year("2002");
        let (second_ticket, second_request) =
            session.borrow_mut().submit(Coordinate::default(), BOUNDS).unwrap();

        let arrivals = RefCell::new(Vec::new());

        let settle = |ticket: Ticket, outcome: Result<TrendSeries, FetchError>| {
            arrivals.borrow_mut().push(ticket);
            session.borrow_mut().settle(ticket, outcome);
        };

        tokio::join!(
            async {
                let outcome = client.fetch_trend(&first_request).await;
                settle(first_ticket, outcome);
            },
            async {
                let outcome = client.fetch_trend(&second_request).await;
                settle(second_ticket, outcome);
            },
            async {
                second_tx
                    .send(RawResponse {
                        status: 200,
                        body: r#"[{"year":2002,"heatwave_events":5}]"#.to_string(),
                    })
                    .unwrap();
                while arrivals.borrow().is_empty() {
                    tokio::task::yield_now().await;
                }
                first_tx
                    .send(RawResponse {
                        status: 200,
                        body: r#"[{"year":2001,"heatwave_events":3}]"#.to_string(),
                    })
                    .unwrap();
            },
        );

        assert_eq!(*arrivals.borrow(), vec![second_ticket, first_ticket]);
        let session = session.borrow();
        assert_eq!(session.series().years(), vec![2002]);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn test_end_to_end_trend_query() {
        // Default load
        let config = AppConfig::default();
        let mut coordinate = config.default_coordinate;
        assert_eq!((coordinate.latitude, coordinate.longitude), (28.61, 77.23));
        let mut session = TrendSession::new(&config.years);
        assert!(ChartSeries::from_series(session.series(), &config.chart).is_empty());

        // Map click, then year edits
        coordinate = Coordinate::from_map_click(40.0, -75.0).unwrap();
        session.edit_start_year("2010");
        session.edit_end_year("2015");

        let transport = ScriptedTransport::replying(vec![ok(r#"[
            {"year":2010,"heatwave_events":1},
            {"year":2011,"heatwave_events":0},
            {"year":2012,"heatwave_events":2},
            {"year":2013,"heatwave_events":3},
            {"year":2014,"heatwave_events":2},
            {"year":2015,"heatwave_events":4}
        ]"#)]);
        let client = TrendClient::new(URL, &transport);

        let (ticket, request) = session.submit(coordinate, BOUNDS).unwrap();
        assert!(session.is_loading());
        let outcome = client.fetch_trend(&request).await;
        assert!(session.settle(ticket, outcome));

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, URL);
        assert_eq!(
            sent[0].1,
            serde_json::json!({"lat": 40.0, "lon": -75.0, "start_year": 2010, "end_year": 2015})
        );

        let chart = ChartSeries::from_series(session.series(), &config.chart);
        assert_eq!(chart.points().len(), 6);
        assert_eq!(chart.labels, (2010..=2015).collect::<Vec<_>>());
        assert_eq!(chart.values, vec![1.0, 0.0, 2.0, 3.0, 2.0, 4.0]);
    }
}
