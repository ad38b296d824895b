//! Browser fetch transport for the core API client.

use gloo_net::http::Request;
use serde_json::Value;

use rickdex_core::api::{Transport, Url};
use rickdex_core::error::ApiError;

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn get_json(&self, url: &Url) -> Result<Value, ApiError> {
        let resp = Request::get(url.as_str())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        match resp.status() {
            404 => Err(ApiError::NotFound {
                url: url.to_string(),
            }),
            status if !resp.ok() => Err(ApiError::Status {
                status,
                url: url.to_string(),
            }),
            _ => {
                let body = resp
                    .text()
                    .await
                    .map_err(|e| ApiError::Transport(e.to_string()))?;
                Ok(serde_json::from_str(&body)?)
            }
        }
    }
}
