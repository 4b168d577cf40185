//! Trend request/response wire types.

use crate::coordinate::Coordinate;
use crate::error::FetchError;
use crate::year_range::YearRange;
use serde::{Deserialize, Serialize};

/// Outbound body for `POST <endpoint>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendRequest {
    pub lat: f64,
    pub lon: f64,
    pub start_year: i32,
    pub end_year: i32,
}

impl TrendRequest {
    pub fn new(coordinate: Coordinate, range: YearRange) -> Self {
        Self {
            lat: coordinate.latitude,
            lon: coordinate.longitude,
            start_year: range.start_year,
            end_year: range.end_year,
        }
    }

    pub fn range(&self) -> YearRange {
        YearRange {
            start_year: self.start_year,
            end_year: self.end_year,
        }
    }
}

/// A single (year, event count) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i32,
    pub heatwave_events: f64,
}

/// Heatwave event counts in the order the endpoint returned them.
///
/// No sorting or de-duplication is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TrendSeries(Vec<TrendPoint>);

impl TrendSeries {
    pub fn new(points: Vec<TrendPoint>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[TrendPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn years(&self) -> Vec<i32> {
        self.0.iter().map(|p| p.year).collect()
    }

    pub fn events(&self) -> Vec<f64> {
        self.0.iter().map(|p| p.heatwave_events).collect()
    }

    /// Years in `range` that the series has no point for.
    pub fn missing_years(&self, range: &YearRange) -> Vec<i32> {
        range
            .years()
            .filter(|y| !self.0.iter().any(|p| p.year == *y))
            .collect()
    }
}

impl From<Vec<TrendPoint>> for TrendSeries {
    fn from(points: Vec<TrendPoint>) -> Self {
        Self(points)
    }
}

/// Parse a response body into a series.
///
/// The body must be a JSON array whose records all carry an integer `year`
/// and a numeric `heatwave_events`; extra fields are ignored. Anything else
/// is rejected as a whole.
pub fn parse_trend_response(body: &str) -> Result<TrendSeries, FetchError> {
    serde_json::from_str::<Vec<TrendPoint>>(body)
        .map(TrendSeries)
        .map_err(|e| FetchError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = TrendRequest::new(
            Coordinate::new(40.0, -75.0).unwrap(),
            YearRange {
                start_year: 2010,
                end_year: 2015,
            },
        );
        let value = serde_json::to_value(request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"lat": 40.0, "lon": -75.0, "start_year": 2010, "end_year": 2015})
        );
    }

    #[test]
    fn test_parse_response_keeps_order() {
        let series = parse_trend_response(
            r#"[{"year":2002,"heatwave_events":5},{"year":2001,"heatwave_events":3},{"year":2002,"heatwave_events":1}]"#,
        )
        .unwrap();
        assert_eq!(series.years(), vec![2002, 2001, 2002]);
        assert_eq!(series.events(), vec![5.0, 3.0, 1.0]);
    }

    #[test]
    fn test_parse_response_ignores_extra_fields() {
        let series =
            parse_trend_response(r#"[{"year":2001,"heatwave_events":3,"threshold":41.2}]"#).unwrap();
        assert_eq!(series.points(), &[TrendPoint { year: 2001, heatwave_events: 3.0 }]);
    }

    #[test]
    fn test_parse_empty_array() {
        let series = parse_trend_response("[]").unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for body in [
            r#"{"year":2001,"heatwave_events":3}"#,
            r#"[{"year":2001}]"#,
            r#"[{"heatwave_events":3}]"#,
            r#"[{"year":"2001","heatwave_events":3}]"#,
            r#"[{"year":2001.5,"heatwave_events":3}]"#,
            r#"[{"year":2001,"heatwave_events":null}]"#,
            "<html>Bad Gateway</html>",
            "",
        ] {
            assert!(
                matches!(parse_trend_response(body), Err(FetchError::MalformedResponse(_))),
                "accepted {body:?}"
            );
        }
    }

    #[test]
    fn test_missing_years() {
        let series = TrendSeries::new(vec![
            TrendPoint { year: 2010, heatwave_events: 1.0 },
            TrendPoint { year: 2012, heatwave_events: 2.0 },
        ]);
        let range = YearRange {
            start_year: 2010,
            end_year: 2013,
        };
        assert_eq!(series.missing_years(&range), vec![2011, 2013]);
    }
}
