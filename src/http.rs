//! Items Endpoint Client
//!
//! `fetch` GET returning the inbound record's items as JSON.

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use admin_behaviors::{ItemRow, ItemsClient, UiError, UiResult};

pub struct FetchItemsClient {
    timeout_ms: Option<u32>,
}

impl FetchItemsClient {
    pub fn new(timeout_ms: Option<u32>) -> Self {
        Self { timeout_ms }
    }
}

#[async_trait(?Send)]
impl ItemsClient for FetchItemsClient {
    async fn fetch_items(&self, url: &str) -> UiResult<Vec<ItemRow>> {
        let Some(ms) = self.timeout_ms else {
            return get_items(url).await;
        };

        let request = Box::pin(get_items(url));
        let timer = Box::pin(TimeoutFuture::new(ms));
        match future::select(request, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(UiError::Timeout(ms)),
        }
    }
}

async fn get_items(url: &str) -> UiResult<Vec<ItemRow>> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| UiError::Js(format!("{:?}", e)))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| UiError::Js(format!("{:?}", e)))?;

    let window = web_sys::window().ok_or_else(|| UiError::Js("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| UiError::Network(format!("{:?}", e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| UiError::Js(format!("{:?}", e)))?;

    if !resp.ok() {
        return Err(UiError::Http { status: resp.status() });
    }

    let json = JsFuture::from(resp.json().map_err(|e| UiError::Decode(format!("{:?}", e)))?)
        .await
        .map_err(|e| UiError::Decode(format!("{:?}", e)))?;
    decode_items(json)
}

/// Parsed response body (a JS array of objects) to item rows
fn decode_items(json: JsValue) -> UiResult<Vec<ItemRow>> {
    serde_wasm_bindgen::from_value(json).map_err(|e| UiError::Decode(e.to_string()))
}
