//! Bookgate - backend gateway for book-search and time-tracking APIs
//!
//! This crate sits between a frontend and two third-party HTTP APIs. The
//! book-search path adds input validation, response normalization into a
//! stable schema, a short-lived in-memory result cache, bounded retry with
//! exponential backoff, and configurable TLS trust for the outbound
//! client. The time-tracking path is a single-pass call with status-code
//! mapping only.
//!
//! # Search Example
//!
//! ```rust,no_run
//! use bookgate::{BookSearchService, OrderBy, SearchRequest, Settings};
//!
//! #[tokio::main]
//! async fn main() -> bookgate::Result<()> {
//!     let service = BookSearchService::from_settings(&Settings::from_env())?;
//!
//!     let result = service
//!         .search_books(
//!             &SearchRequest::new("clean code")
//!                 .order_by(OrderBy::Newest)
//!                 .max_results(20),
//!         )
//!         .await?;
//!
//!     for book in &result.items {
//!         println!("{} — {}", book.title, book.authors.join(", "));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Failures cross the service boundary only as [`GatewayError`] kinds; the
//! routing layer maps those to HTTP statuses for the frontend.

pub mod cache;
pub mod config;
pub mod error;
pub mod retry;
pub mod search;
pub mod telemetry;
pub mod timetrack;
pub mod tls;
pub mod types;
pub mod upstream;

// Re-export main types at crate root
pub use cache::{Clock, DEFAULT_TTL, SearchCache, SystemClock};
pub use config::Settings;
pub use error::{GatewayError, Result};
pub use retry::RetryConfig;
pub use search::{BookSearchService, BookSearchServiceBuilder};
pub use timetrack::{TimeEntry, TimeInterval, TimeTrackingClient};
pub use tls::TlsTrust;
pub use types::{BookRecord, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, OrderBy, SearchRequest, SearchResult};
