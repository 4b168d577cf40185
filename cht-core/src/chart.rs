//! Projection of a trend series into line chart input.

use crate::config::ChartStyle;
use crate::trend::TrendSeries;
use serde::Serialize;

/// One plotted point, keyed by its position so repeated years stay distinct.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub index: usize,
    pub year: i32,
    pub value: f64,
}

/// Everything the chart needs to draw a single-line trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    /// X-axis labels, in series order.
    pub labels: Vec<i32>,
    /// Y values, aligned with `labels`.
    pub values: Vec<f64>,
    pub label: String,
    pub border_color: String,
    pub background_color: String,
}

impl ChartSeries {
    /// Rebuild the chart input from scratch. Nothing is cached between calls.
    pub fn from_series(series: &TrendSeries, style: &ChartStyle) -> Self {
        Self {
            labels: series.years(),
            values: series.events(),
            label: style.label.clone(),
            border_color: style.border_color.clone(),
            background_color: style.background_color.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn points(&self) -> Vec<ChartPoint> {
        self.labels
            .iter()
            .zip(&self.values)
            .enumerate()
            .map(|(index, (&year, &value))| ChartPoint { index, year, value })
            .collect()
    }

    /// Point data as JSON for the D3 bridge.
    pub fn points_json(&self) -> String {
        serde_json::to_string(&self.points()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Styling and labels as JSON for the D3 bridge.
    pub fn config_json(&self, title: &str) -> String {
        serde_json::json!({
            "title": title,
            "label": self.label,
            "xAxisLabel": "Year",
            "yAxisLabel": self.label,
            "borderColor": self.border_color,
            "backgroundColor": self.background_color,
        })
        .to_string()
    }
}
