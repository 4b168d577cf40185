//! Browser transport over `window.fetch`.

use cht_core::client::{RawResponse, TrendTransport};
use cht_core::error::FetchError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// `TrendTransport` backed by the Fetch API. CORS mode, JSON body.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

fn js_error(value: JsValue) -> FetchError {
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value));
    FetchError::Network(message)
}

impl TrendTransport for BrowserTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, FetchError> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let window = web_sys::window()
            .ok_or_else(|| FetchError::Network("no window available".to_string()))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        let status = response.status();
        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;

        Ok(RawResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}
