//! Heatwave trend line chart.

use crate::js_bridge;
use crate::state::AppState;
use cht_core::chart::ChartSeries;
use dioxus::prelude::*;

const TITLE: &str = "Heatwave Events per Year";

#[derive(Props, Clone, PartialEq)]
pub struct TrendChartProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    #[props(default = 360)]
    pub min_height: u32,
}

/// Line chart of the current series, redrawn from scratch whenever the
/// series changes.
#[component]
pub fn TrendChart(props: TrendChartProps) -> Element {
    let state = use_context::<AppState>();
    // Only a new series triggers a redraw, not form edits.
    let series = use_memo(move || state.session.read().series().clone());
    let points = series.read().len();

    let drop_id = props.id.clone();
    use_drop(move || js_bridge::destroy_chart(&drop_id));

    let container_id = props.id.clone();
    use_effect(move || {
        let style = state.config.read().chart.clone();
        let chart = ChartSeries::from_series(&series.read(), &style);
        js_bridge::render_trend_chart(
            &container_id,
            &chart.points_json(),
            &chart.config_json(TITLE),
        );
    });

    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "margin-top: 40px; width: 90%; max-width: 700px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{TITLE}"
            }
            if points > 0 {
                p {
                    style: "margin: 0 0 8px 0; font-size: 12px; color: #666;",
                    "{points} data points"
                }
            }
            div {
                style: "{style}",
                div {
                    id: "{props.id}",
                    style: "width: 100%;",
                }
            }
        }
    }
}
