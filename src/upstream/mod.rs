//! HTTP client for the book-search API.
//!
//! A thin GET wrapper: fixed timeout, transport policy applied at client
//! build, status codes classified into [`GatewayError`] before the body is
//! touched. Retry and caching live above this layer.

use std::time::Duration;

use reqwest::Client;

use crate::error::{GatewayError, Result, parse_retry_after};
use crate::tls::TlsTrust;
use crate::types::SearchRequest;

pub(crate) mod volumes;

use volumes::VolumesResponse;

/// Default base URL for the book-search API.
pub const DEFAULT_BOOKS_API_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Outbound client for the book-search API.
///
/// The transport policy is baked into the underlying client once and
/// shared by every call.
pub struct UpstreamClient {
    http: Client,
    base_url: String,
}

impl UpstreamClient {
    /// Build a client with the given base URL, transport policy, and timeout.
    pub fn new(
        base_url: impl Into<String>,
        tls: Option<&TlsTrust>,
        timeout: Duration,
    ) -> Result<Self> {
        let mut builder = Client::builder().timeout(timeout);
        if let Some(tls) = tls {
            builder = tls.apply(builder);
        }
        let http = builder.build().map_err(|e| {
            GatewayError::Configuration(format!("failed to build HTTP client: {e}"))
        })?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetch one page of volumes for an already-normalized request.
    ///
    /// Non-success statuses and transport failures come back classified;
    /// the raw upstream body is never part of the error.
    pub(crate) async fn fetch_volumes(&self, request: &SearchRequest) -> Result<VolumesResponse> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", request.query.clone()),
                ("orderBy", request.order_by.as_str().to_string()),
                ("startIndex", request.start_index.to_string()),
                ("maxResults", request.max_results.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = parse_retry_after(&response);
            return Err(GatewayError::from_status(status.as_u16(), retry_after));
        }

        response
            .json::<VolumesResponse>()
            .await
            .map_err(|e| GatewayError::Unknown(format!("failed to decode upstream response: {e}")))
    }
}
