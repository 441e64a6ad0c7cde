//! Raw volume schema from the book-search API and conversion into the
//! gateway's stable output types.
//!
//! Every upstream field is optional; conversion fills the documented
//! defaults so the frontend never sees holes. This module is separate from
//! the HTTP client to keep fetch logic focused.

use serde::Deserialize;

use crate::types::{BookRecord, SearchResult};

pub(crate) const UNKNOWN_TITLE: &str = "Unknown Title";
pub(crate) const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub(crate) const UNKNOWN_PUBLISHER: &str = "Unknown Publisher";
pub(crate) const UNKNOWN_DATE: &str = "Unknown";

/// Book-search API volume list response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VolumesResponse {
    #[serde(default)]
    pub total_items: Option<u32>,
    #[serde(default)]
    pub items: Option<Vec<VolumeEntry>>,
}

/// A single volume entry from the book-search API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VolumeEntry {
    pub id: String,
    #[serde(default)]
    pub volume_info: Option<VolumeInfo>,
}

/// Nested volume metadata.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VolumeInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_links: Option<ImageLinks>,
}

/// Cover image links; the full thumbnail is preferred over the small one.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub small_thumbnail: Option<String>,
}

/// Convert a raw upstream payload into a [`SearchResult`].
///
/// `totalItems` defaults to the mapped item count when absent. Item order
/// is preserved.
pub(crate) fn into_search_result(raw: VolumesResponse) -> SearchResult {
    let items: Vec<BookRecord> = raw
        .items
        .unwrap_or_default()
        .into_iter()
        .map(into_book_record)
        .collect();
    let total_items = raw.total_items.unwrap_or(items.len() as u32);
    SearchResult { total_items, items }
}

fn into_book_record(entry: VolumeEntry) -> BookRecord {
    let info = entry.volume_info.unwrap_or_default();
    let thumbnail = info
        .image_links
        .and_then(|links| links.thumbnail.or(links.small_thumbnail));
    BookRecord {
        id: entry.id,
        title: info.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        authors: info
            .authors
            .unwrap_or_else(|| vec![UNKNOWN_AUTHOR.to_string()]),
        publisher: info
            .publisher
            .unwrap_or_else(|| UNKNOWN_PUBLISHER.to_string()),
        published_date: info
            .published_date
            .unwrap_or_else(|| UNKNOWN_DATE.to_string()),
        page_count: info.page_count.unwrap_or(0),
        description: info.description,
        thumbnail,
    }
}
