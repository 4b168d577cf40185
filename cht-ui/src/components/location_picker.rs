//! Map-based coordinate picker.

use crate::js_bridge;
use crate::state::AppState;
use cht_core::coordinate::Coordinate;
use dioxus::prelude::*;
use log::{debug, warn};

#[derive(Props, Clone, PartialEq)]
pub struct LocationPickerProps {
    /// The DOM id for the map container (Leaflet will render into this)
    pub id: String,
}

/// Leaflet map with a single marker at the selected coordinate.
///
/// Clicking the map moves the selection and the marker. The map is centered
/// once, on the coordinate at mount time, and is not recentered afterwards.
#[component]
pub fn LocationPicker(props: LocationPickerProps) -> Element {
    let mut state = use_context::<AppState>();
    let coordinate = (state.coordinate)();

    // One-time map construction.
    let init_id = props.id.clone();
    use_hook(move || {
        js_bridge::set_map_click_handler(move |lat, lon| {
            match Coordinate::from_map_click(lat, lon) {
                Some(c) => {
                    debug!("Map click at {}", c);
                    state.coordinate.set(c);
                }
                None => warn!("Ignoring map click with invalid position ({lat}, {lon})"),
            }
        });

        let start = *state.coordinate.peek();
        match serde_json::to_string(&state.config.peek().map) {
            Ok(map_json) => js_bridge::init_location_picker(
                &init_id,
                &map_json,
                start.latitude,
                start.longitude,
            ),
            Err(e) => warn!("Failed to serialize map config: {}", e),
        }
    });

    // Keep the marker on the selected coordinate.
    let marker_id = props.id.clone();
    use_effect(move || {
        let c = (state.coordinate)();
        js_bridge::set_location_marker(&marker_id, c.latitude, c.longitude);
    });

    let height = state.config.read().map.height_px;

    rsx! {
        div {
            strong { "Selected Coordinates: " }
            "{coordinate}"
        }
        div {
            id: "{props.id}",
            style: "height: {height}px; width: 100%; margin-top: 20px;",
        }
    }
}
