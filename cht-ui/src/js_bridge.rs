//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet map and D3.js chart functions live in `assets/js/*.js` and are
//! loaded at runtime. They are evaluated as globals (no ES modules) and
//! exposed via `window.*`. This module provides Rust wrappers that serialize
//! data and call those globals.
//!
//! Map clicks travel the other way through a `wasm_bindgen` closure that is
//! installed on `window.__chtOnMapClick`.

use wasm_bindgen::prelude::*;

// Embed the widget scripts at compile time
static LOCATION_PICKER_JS: &str = include_str!("../assets/js/location-picker.js");
static TREND_CHART_JS: &str = include_str!("../assets/js/trend-chart.js");

/// Name of the window property the map script calls on every click.
const MAP_CLICK_HANDLER: &str = "__chtOnMapClick";

/// Quote a string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CHT JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Wrap `body` in a polling loop that waits until both libraries and the
/// widget scripts are ready and `container_id` is in the DOM.
fn when_ready(container_id: &str, global_fn: &str, body: &str) -> String {
    let id = js_string(container_id);
    format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__chtScriptsReady &&
                    typeof window.{global_fn} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        {body}
                    }} catch(e) {{ console.error('[CHT] {global_fn} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Initialize widget scripts with a wait-for-libraries polling loop.
///
/// The scripts define functions like `initLocationPicker(...)` via
/// `function` declarations. To make them globally accessible (not
/// block-scoped inside the setInterval callback), they are evaluated at
/// global scope with an indirect `eval()` once Leaflet and D3 are loaded,
/// then each function is promoted to `window.*`.
pub fn init_scripts() {
    let all_js = [LOCATION_PICKER_JS, TREND_CHART_JS].join("\n");

    let store_js = format!("window.__chtScripts = {};", js_string(&all_js));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__chtScriptsReady || window.__chtScriptsPending) { return; }
            window.__chtScriptsPending = true;
            var waitForLibs = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof L !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__chtScripts);
                    delete window.__chtScripts;
                    if (typeof initLocationPicker !== 'undefined') window.initLocationPicker = initLocationPicker;
                    if (typeof setLocationMarker !== 'undefined') window.setLocationMarker = setLocationMarker;
                    if (typeof renderTrendChart !== 'undefined') window.renderTrendChart = renderTrendChart;
                    window.__chtScriptsReady = true;
                    console.log('CHT widgets initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Install the Rust callback invoked with `(lat, lng)` on every map click.
///
/// The closure lives for the rest of the page; a later call replaces the
/// handler the map script sees.
pub fn set_map_click_handler(handler: impl FnMut(f64, f64) + 'static) {
    let closure = Closure::<dyn FnMut(f64, f64)>::new(handler);
    if let Some(window) = web_sys::window() {
        if let Err(e) = js_sys::Reflect::set(
            &window,
            &JsValue::from_str(MAP_CLICK_HANDLER),
            closure.as_ref(),
        ) {
            log::warn!("Failed to install map click handler: {:?}", e);
        }
    }
    closure.forget();
}

/// Create the Leaflet map inside `container_id`, centered on `(lat, lon)`
/// with its marker there. `map_config_json` is a serialized `MapConfig`.
pub fn init_location_picker(container_id: &str, map_config_json: &str, lat: f64, lon: f64) {
    let body = format!(
        "window.initLocationPicker({}, {}, {lat}, {lon}, '{MAP_CLICK_HANDLER}');",
        js_string(container_id),
        js_string(map_config_json),
    );
    call_js(&when_ready(container_id, "initLocationPicker", &body));
}

/// Move the marker of the map in `container_id`. The view is not recentered.
pub fn set_location_marker(container_id: &str, lat: f64, lon: f64) {
    let body = format!(
        "window.setLocationMarker({}, {lat}, {lon});",
        js_string(container_id)
    );
    call_js(&when_ready(container_id, "setLocationMarker", &body));
}

/// Render the trend line chart, replacing whatever the container held.
pub fn render_trend_chart(container_id: &str, data_json: &str, config_json: &str) {
    let body = format!(
        "window.renderTrendChart({}, {}, {});",
        js_string(container_id),
        js_string(data_json),
        js_string(config_json),
    );
    call_js(&when_ready(container_id, "renderTrendChart", &body));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string(container_id)
    ));
}
