//! Network fetching utilities with timeout support.
//!
//! All page data comes from static same-origin assets (the episode feed and
//! the header/footer partials). Requests go through the browser Fetch API and
//! are raced against a timeout so a stalled request degrades into a regional
//! placeholder instead of hanging the page.

use js_sys::{Array, Promise};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::FetchError;
use crate::utils::cache;

/// Race a promise against a timeout via `Promise.race`.
///
/// The timeout promise resolves to `undefined`, which the fetch promise can
/// never produce, so an undefined winner means the timeout fired first.
async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> Result<JsValue, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let timeout = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let contenders = Array::new();
    contenders.push(&promise);
    contenders.push(&timeout);

    match JsFuture::from(Promise::race(&contenders)).await {
        Ok(value) if value.is_undefined() => Err(FetchError::Timeout),
        Ok(value) => Ok(value),
        Err(err) => Err(FetchError::NetworkError(
            err.as_string().unwrap_or_else(|| "unknown error".to_string()),
        )),
    }
}

/// Fetch text from a same-origin URL, failing on non-2xx responses.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| FetchError::RequestCreationFailed)?;

    let value = race_with_timeout(window.fetch_with_request(&request), FETCH_TIMEOUT_MS).await?;
    let response: Response = value.dyn_into().map_err(|_| FetchError::InvalidContent)?;

    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::InvalidContent)
}

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_text(url).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Fetch and parse JSON with sessionStorage caching.
///
/// The episode feed is requested by all three pages; caching it for the
/// session avoids refetching on every navigation while still picking up
/// feed changes on the next visit.
pub async fn fetch_json_cached<T>(url: &str, cache_key: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned + Serialize,
{
    if let Some(cached) = cache::get::<T>(cache_key) {
        return Ok(cached);
    }

    let data = fetch_json::<T>(url).await?;

    // Caching is best-effort; a full sessionStorage is not an error.
    let _ = cache::set(cache_key, &data);

    Ok(data)
}
