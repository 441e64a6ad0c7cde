//! Single-pass client for the time-tracking API.
//!
//! Unlike the book-search path there is no caching and no retry here: one
//! GET per call, status codes mapped straight into the shared error
//! taxonomy. The API key travels in the `X-Api-Key` header.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{GatewayError, Result, parse_retry_after};
use crate::upstream::DEFAULT_TIMEOUT;

/// Default base URL for the time-tracking API.
pub const DEFAULT_TIMETRACK_API_URL: &str = "https://api.clockify.me/api/v1";

/// A tracked time entry as returned to the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub time_interval: TimeInterval,
}

/// Start/end/duration of a time entry; fields the upstream leaves out for
/// running timers stay absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInterval {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// Client for the time-tracking API.
pub struct TimeTrackingClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl TimeTrackingClient {
    /// Create a client against the default API endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_TIMETRACK_API_URL)
    }

    /// Create a client with a custom base URL (also used by tests pointing
    /// at a mock server).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder().timeout(DEFAULT_TIMEOUT).build().map_err(|e| {
            GatewayError::Configuration(format!("failed to build HTTP client: {e}"))
        })?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Fetch the time entries of one user in one workspace.
    pub async fn time_entries(&self, workspace_id: &str, user_id: &str) -> Result<Vec<TimeEntry>> {
        let url = format!(
            "{}/workspaces/{}/user/{}/time-entries",
            self.base_url, workspace_id, user_id
        );
        let response = self
            .http
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = parse_retry_after(&response);
            return Err(GatewayError::from_status(status.as_u16(), retry_after));
        }

        response
            .json::<Vec<TimeEntry>>()
            .await
            .map_err(|e| GatewayError::Unknown(format!("failed to decode time entries: {e}")))
    }
}
