//! Telemetry metric name constants.
//!
//! Centralised metric names for bookgate operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! All metrics are prefixed with `bookgate_`. Counters end in `_total`,
//! histograms use meaningful units.

/// Total upstream requests dispatched, after cache and retry resolution.
///
/// Labels: `operation`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "bookgate_requests_total";

/// Upstream request duration in seconds, including retries.
///
/// Labels: `operation`.
pub const REQUEST_DURATION_SECONDS: &str = "bookgate_request_duration_seconds";

/// Total retry attempts (not counting the initial request).
///
/// Labels: `operation`.
pub const RETRIES_TOTAL: &str = "bookgate_retries_total";

/// Total search-cache hits.
pub const CACHE_HITS_TOTAL: &str = "bookgate_cache_hits_total";

/// Total search-cache misses.
pub const CACHE_MISSES_TOTAL: &str = "bookgate_cache_misses_total";
