//! Book-search orchestration.
//!
//! [`BookSearchService`] composes the layers below it: input validation,
//! cache lookup on the normalized request shape, a retrying upstream
//! fetch, response mapping, and cache update. Every failure leaves this
//! module as a classified [`GatewayError`]; retry counts and raw upstream
//! payloads stay internal.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::{Clock, DEFAULT_TTL, SearchCache, SystemClock};
use crate::config::Settings;
use crate::error::{GatewayError, Result};
use crate::retry::{RetryConfig, with_retry};
use crate::telemetry;
use crate::tls::TlsTrust;
use crate::types::{SearchRequest, SearchResult};
use crate::upstream::{DEFAULT_BOOKS_API_URL, DEFAULT_TIMEOUT, UpstreamClient};
use crate::upstream::volumes::into_search_result;

/// Gateway service for the book-search API.
///
/// ```rust,no_run
/// use bookgate::{BookSearchService, SearchRequest, Settings};
///
/// # async fn run() -> bookgate::Result<()> {
/// let service = BookSearchService::from_settings(&Settings::from_env())?;
/// let result = service.search_books(&SearchRequest::new("clean code")).await?;
/// println!("{} books", result.total_items);
/// # Ok(())
/// # }
/// ```
pub struct BookSearchService {
    upstream: UpstreamClient,
    cache: SearchCache,
    retry: RetryConfig,
}

impl BookSearchService {
    /// Create a builder with default URL, TTL, timeout, and retry policy.
    pub fn builder() -> BookSearchServiceBuilder {
        BookSearchServiceBuilder::new()
    }

    /// Build a service from process configuration, deriving the TLS trust
    /// policy once for the service's lifetime.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut builder = Self::builder();
        if let Some(url) = &settings.books_base_url {
            builder = builder.base_url(url);
        }
        if let Some(tls) = TlsTrust::from_settings(settings) {
            builder = builder.tls(tls);
        }
        builder.build()
    }

    /// Search for books, serving from cache when a fresh entry exists.
    ///
    /// The request is normalized (page size capped) before the cache key
    /// is built, so over-limit requests share entries with capped ones.
    /// Transient upstream failures are retried transparently; the error
    /// that finally surfaces is always one of the classified kinds.
    pub async fn search_books(&self, request: &SearchRequest) -> Result<SearchResult> {
        if request.query.trim().is_empty() {
            // validation belongs to the routing layer; guard anyway
            return Err(GatewayError::InvalidInput(
                "query must not be empty".to_string(),
            ));
        }

        let request = request.normalized();
        let key = request.cache_key();
        if let Some(hit) = self.cache.get(&key) {
            debug!(key = %key, "serving search result from cache");
            return Ok(hit);
        }
        debug!(key = %key, "cache miss, fetching from upstream");

        let started = Instant::now();
        let outcome = with_retry(&self.retry, "search_books", || {
            self.upstream.fetch_volumes(&request)
        })
        .await;
        metrics::histogram!(
            telemetry::REQUEST_DURATION_SECONDS,
            "operation" => "search_books"
        )
        .record(started.elapsed().as_secs_f64());

        match outcome {
            Ok(raw) => {
                metrics::counter!(
                    telemetry::REQUESTS_TOTAL,
                    "operation" => "search_books",
                    "status" => "ok"
                )
                .increment(1);
                let result = into_search_result(raw);
                self.cache.put(key, result.clone());
                Ok(result)
            }
            Err(e) => {
                metrics::counter!(
                    telemetry::REQUESTS_TOTAL,
                    "operation" => "search_books",
                    "status" => "error"
                )
                .increment(1);
                Err(e)
            }
        }
    }
}

/// Builder for [`BookSearchService`].
pub struct BookSearchServiceBuilder {
    base_url: String,
    tls: Option<TlsTrust>,
    timeout: Duration,
    cache_ttl: Duration,
    clock: Arc<dyn Clock>,
    retry: RetryConfig,
}

impl BookSearchServiceBuilder {
    fn new() -> Self {
        Self {
            base_url: DEFAULT_BOOKS_API_URL.to_string(),
            tls: None,
            timeout: DEFAULT_TIMEOUT,
            cache_ttl: DEFAULT_TTL,
            clock: Arc::new(SystemClock),
            retry: RetryConfig::default(),
        }
    }

    /// Override the book-search API base URL (also used by tests pointing
    /// at a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Apply a TLS trust policy to the outbound client.
    pub fn tls(mut self, tls: TlsTrust) -> Self {
        self.tls = Some(tls);
        self
    }

    /// Override the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the cache TTL.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Inject a clock for cache expiry (used by tests).
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Override the retry policy.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Build the service.
    pub fn build(self) -> Result<BookSearchService> {
        let upstream = UpstreamClient::new(self.base_url, self.tls.as_ref(), self.timeout)?;
        Ok(BookSearchService {
            upstream,
            cache: SearchCache::with_clock(self.cache_ttl, self.clock),
            retry: self.retry,
        })
    }
}
