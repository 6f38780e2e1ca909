//! HTTP backend for the remote content document store.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`.
//! Native builds and tests: every call reports
//! `StoreError::Unavailable`, which the repository treats like any other
//! remote failure.
//!
//! Records live at `{base}/{url-encoded content key}`: `GET` returns the JSON
//! document (404 or a `null` body when absent) and `PUT` overwrites it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use content::{EditorSettings, RemoteStore, StoreError};

#[cfg(any(test, feature = "csr"))]
const NOT_FOUND: u16 = 404;

#[cfg(any(test, feature = "csr"))]
fn content_endpoint(base_url: &str, encoded_key: &str) -> String {
    format!("{base_url}/{encoded_key}")
}

/// A document store answers a missing key with `null` or an empty body.
#[cfg(any(test, feature = "csr"))]
fn is_absent_body(body: &str) -> bool {
    let body = body.trim();
    body.is_empty() || body == "null"
}

#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16) -> Result<Option<String>, StoreError> {
    if status == NOT_FOUND { Ok(None) } else { Err(StoreError::Status(status)) }
}

#[cfg(feature = "csr")]
fn encode_key(key: &str) -> String {
    String::from(js_sys::encode_uri_component(key))
}

/// Remote store reached over HTTP.
#[derive(Clone, Debug)]
pub struct HttpContentStore {
    base_url: String,
}

impl HttpContentStore {
    pub fn new(settings: &EditorSettings) -> Self {
        Self {
            base_url: settings.remote_base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl RemoteStore for HttpContentStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            let url = content_endpoint(&self.base_url, &encode_key(key));
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;
            if !resp.ok() {
                return status_error(resp.status());
            }
            let body = resp.text().await.map_err(|e| StoreError::Transport(e.to_string()))?;
            if is_absent_body(&body) {
                return Ok(None);
            }
            Ok(Some(body))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    async fn put(&self, key: &str, payload: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            let url = content_endpoint(&self.base_url, &encode_key(key));
            let resp = gloo_net::http::Request::put(&url)
                .header("Content-Type", "application/json")
                .body(payload.to_owned())
                .map_err(|e| StoreError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| StoreError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(StoreError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, payload);
            Err(StoreError::Unavailable)
        }
    }
}
