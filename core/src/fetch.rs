//! Network half of the todos fetch.
//!
//! # Design
//! `Fetcher::execute` performs exactly one GET and reads the whole body; it
//! is the only code in the crate that does I/O. Status and JSON decoding
//! live in `decode_response`, which works on an already-read
//! `HttpResponse` so it can be tested without a server.
//!
//! No timeouts or retries are configured beyond the reqwest defaults.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    http: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `request` and return the response as plain data.
    ///
    /// Any status is returned as `Ok`; only transport failures are errors.
    pub async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!("GET {}", request.url);

        let network = |source: reqwest::Error| {
            warn!("request to {} failed: {}", request.url, source);
            ApiError::Network {
                url: request.url.clone(),
                source,
            }
        };

        let response = self.http.get(&request.url).send().await.map_err(network)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(network)?.to_vec();

        debug!("received HTTP {} ({} bytes)", status, body.len());
        Ok(HttpResponse { status, body })
    }

    /// Execute `request` and decode its body into an untyped JSON value.
    pub async fn fetch_raw(&self, request: &HttpRequest) -> Result<Value, ApiError> {
        let response = self.execute(request).await?;
        decode_response(&response)
    }
}

/// Reject non-2xx responses, then parse the body as JSON.
///
/// The body is parsed from its raw bytes, so invalid UTF-8 is a decode
/// failure rather than being replaced.
pub fn decode_response(response: &HttpResponse) -> Result<Value, ApiError> {
    if !response.is_success() {
        warn!("server returned HTTP {}", response.status);
        return Err(ApiError::HttpStatus {
            status: response.status,
            body: String::from_utf8_lossy(&response.body).into_owned(),
        });
    }
    serde_json::from_slice(&response.body).map_err(|e| {
        warn!("response body is not valid JSON: {}", e);
        ApiError::MalformedResponse(e)
    })
}
