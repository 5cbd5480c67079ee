//! Page scrapers for ekantipur.com.
//!
//! The scraper layer is the boundary between the live site and the pure
//! extraction core. It fetches rendered pages, runs DOM queries, and
//! captures each entity's raw attribute values into a
//! [`RawAttributeSet`](crate::extract::RawAttributeSet); the extraction
//! core never touches the network or the DOM.
//!
//! # Pattern
//!
//! Each page has a pure `parse_*` function (HTML in, records out) and a
//! thin async `fetch_*` wrapper that downloads the page and delegates to
//! it. Failed cards are logged and skipped rather than failing the run.

pub mod ekantipur;
