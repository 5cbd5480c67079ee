//! Data models for scraped ekantipur.com content.
//!
//! This module defines the record structures produced by one run:
//! - [`Cartoon`]: The "Cartoon of the Day" from the cartoon page
//! - [`Article`]: One entertainment-section article card
//! - [`DailyReport`]: The full per-run output, serialized to JSON
//!
//! Records are constructed once by the extraction layer and are immutable
//! afterwards. Optional fields hold `None` when the page had no qualifying
//! value; an empty string is never stored.

use serde::{Deserialize, Serialize};

/// Fixed fallback label for articles whose card carries no category link.
/// The entertainment section's own label ("मनोरञ्जन" / Entertainment).
pub const DEFAULT_CATEGORY: &str = "मनोरञ्जन";

/// The Cartoon of the Day.
///
/// The cartoon page does not always carry a headline or a byline, so every
/// field is optional. `image_url`, when present, is an absolute URL with
/// any thumbnail-proxy wrapper already stripped.
#[derive(Debug, Deserialize, Serialize)]
pub struct Cartoon {
    /// The cartoon headline, if the page shows one.
    pub title: Option<String>,
    /// Absolute URL of the cartoon image.
    pub image_url: Option<String>,
    /// The cartoonist's byline, if an author link is present.
    pub cartoonist: Option<String>,
}

/// One entertainment-section article card.
#[derive(Debug, Deserialize, Serialize)]
pub struct Article {
    /// The headline. Required: a card without one is skipped upstream.
    pub title: String,
    /// Absolute URL of the card's thumbnail image.
    pub image_url: Option<String>,
    /// The per-card category label, or [`DEFAULT_CATEGORY`] when the card
    /// carries none.
    pub category: String,
    /// The author's byline, if an author link is present.
    pub author: Option<String>,
}

/// The full output of one scraper run.
///
/// Serialized as `{"cartoon": ..., "entertainment_articles": [...]}`; the
/// top-level key names are part of the output contract.
#[derive(Debug, Deserialize, Serialize)]
pub struct DailyReport {
    /// The Cartoon of the Day.
    pub cartoon: Cartoon,
    /// The top entertainment articles, in page order.
    pub entertainment_articles: Vec<Article>,
}
