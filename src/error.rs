//! Bookgate error taxonomy.
//!
//! [`GatewayError`] is the only error shape that crosses a service boundary.
//! Upstream failures are classified exactly once: HTTP status codes through
//! [`GatewayError::from_status()`], transport failures through the
//! `From<reqwest::Error>` conversion. The retry loop consults
//! [`GatewayError::is_transient()`] on the already-classified error, so the
//! retry predicate and the surfaced kind never disagree.

use std::time::Duration;

/// Bookgate error types.
///
/// The routing layer maps each variant to an HTTP status for the frontend
/// (`Unauthorized` → 401, `BadRequest`/`InvalidInput` → 400, everything
/// else → 5xx). Raw upstream payloads and retry counts are never carried
/// in these variants.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Upstream returned 401; the gateway's credentials were rejected.
    #[error("upstream rejected credentials")]
    Unauthorized,

    /// Upstream returned a 4xx other than 401/429.
    #[error("upstream rejected the request (status {status})")]
    BadRequest { status: u16 },

    /// Upstream returned 429.
    #[error("upstream received too many requests")]
    Overloaded { retry_after: Option<Duration> },

    /// Upstream returned 5xx.
    #[error("upstream unavailable (status {status})")]
    UpstreamUnavailable { status: u16 },

    /// The request did not complete within the client timeout, or the
    /// connection was aborted mid-flight.
    #[error("upstream request timed out")]
    Timeout,

    /// The upstream host could not be reached at all.
    #[error("upstream network unreachable")]
    NetworkUnreachable,

    /// The upstream certificate chain could not be verified.
    #[error(
        "TLS certificate validation failed: {0}. Supply a CA bundle via \
         TLS_CA_CERT or TLS_CA_FILE, or set TLS_REJECT_UNAUTHORIZED=false \
         to disable verification"
    )]
    TlsValidationFailed(String),

    /// Caller-supplied input was rejected before any upstream call.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    /// Anything that does not fit the taxonomy above.
    #[error("upstream request failed: {0}")]
    Unknown(String),
}

impl GatewayError {
    /// Classify a non-success upstream status code.
    ///
    /// `retry_after` is the parsed `Retry-After` hint, honoured only for 429.
    pub fn from_status(status: u16, retry_after: Option<Duration>) -> Self {
        match status {
            401 => GatewayError::Unauthorized,
            429 => GatewayError::Overloaded { retry_after },
            s if (400..500).contains(&s) => GatewayError::BadRequest { status: s },
            s if s >= 500 => GatewayError::UpstreamUnavailable { status: s },
            s => GatewayError::Unknown(format!("unexpected upstream status {s}")),
        }
    }

    /// Whether a retry may succeed.
    ///
    /// Transient conditions are 429, 503, timeouts, and unreachable
    /// networks. Other 5xx codes fail fast: a 500 from the upstream is
    /// just as likely on the next attempt.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            GatewayError::Overloaded { .. }
                | GatewayError::UpstreamUnavailable { status: 503 }
                | GatewayError::Timeout
                | GatewayError::NetworkUnreachable
        )
    }

    /// Upstream-provided delay hint, if any.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            GatewayError::Overloaded { retry_after } => *retry_after,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return GatewayError::Timeout;
        }
        let msg = chain_message(&err);
        if let Some(classified) = classify_transport_message(&msg) {
            return classified;
        }
        if err.is_connect() {
            return GatewayError::NetworkUnreachable;
        }
        GatewayError::Unknown(msg)
    }
}

/// Classify a transport failure by its flattened message.
///
/// rustls and hyper errors reach reqwest as opaque boxed sources, so
/// certificate and connectivity failures are recognised by substring.
fn classify_transport_message(msg: &str) -> Option<GatewayError> {
    let lower = msg.to_lowercase();
    if lower.contains("certificate")
        || lower.contains("unknownissuer")
        || lower.contains("self signed")
        || lower.contains("self-signed")
    {
        return Some(GatewayError::TlsValidationFailed(msg.to_string()));
    }
    if lower.contains("aborted") {
        return Some(GatewayError::Timeout);
    }
    if lower.contains("unreachable") || lower.contains("refused") {
        return Some(GatewayError::NetworkUnreachable);
    }
    None
}

/// Parse a seconds-valued `Retry-After` header, if present.
pub(crate) fn parse_retry_after(response: &reqwest::Response) -> Option<Duration> {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Flatten a reqwest error's source chain into one message.
///
/// reqwest's top-level display hides the interesting part (e.g. the rustls
/// certificate error three levels down), so classification needs the whole
/// chain.
fn chain_message(err: &reqwest::Error) -> String {
    let mut msg = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        msg.push_str(": ");
        msg.push_str(&inner.to_string());
        source = inner.source();
    }
    msg
}

/// Result type alias for bookgate operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
