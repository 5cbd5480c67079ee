//! Attribute normalization core: turning raw scraped attribute values into
//! clean record fields.
//!
//! This module and its submodules contain the only non-trivial logic in the
//! application. The scraper layer hands each entity's raw attribute values
//! over as a [`RawAttributeSet`]; the pipeline here picks a winner among
//! fallback candidates, resolves it to an absolute URL, and strips the
//! site's thumbnail-proxy wrapper.
//!
//! # Submodules
//!
//! - [`srcset`]: First-candidate extraction from `srcset` attribute strings
//! - [`resolve`]: Relative/protocol-relative URL resolution
//! - [`thumb`]: `thumb.php?src=...` proxy unwrapping
//! - [`fallback`]: Ordered first-non-empty candidate selection and text trimming
//! - [`fields`]: The fixed image-extraction pipeline composed from the above
//! - [`record`]: Per-entity record assembly (cartoon, article)
//!
//! Everything here is pure and synchronous. No function in this module tree
//! touches the network or the DOM, so every `assemble` call is independent
//! and reentrant.

pub mod fallback;
pub mod fields;
pub mod record;
pub mod resolve;
pub mod srcset;
pub mod thumb;

use thiserror::Error;

/// A fault detected while assembling a record.
///
/// Missing optional values are represented as `None` inside records and are
/// never errors; this type only covers genuinely required data that was
/// absent from the page.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A field the record schema documents as required produced no value.
    #[error("required field `{field}` missing for {entity}")]
    RequiredFieldAbsent {
        /// The kind of entity being assembled (e.g. "article").
        entity: &'static str,
        /// The name of the missing field.
        field: &'static str,
    },
}

/// The raw attribute values captured for one markup element, in fallback
/// priority order.
///
/// The scraper layer fills this once per entity and the extraction core
/// only ever reads it. A value of `None` means the attribute (or the
/// selector that would have produced it) was absent from the element;
/// empty strings are kept as-is and filtered later by the fallback chain.
#[derive(Debug, Default)]
pub struct RawAttributeSet {
    entries: Vec<(String, Option<String>)>,
}

impl RawAttributeSet {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named value. Insertion order encodes fallback priority.
    pub fn push(&mut self, name: impl Into<String>, value: Option<String>) {
        self.entries.push((name.into(), value));
    }

    /// Look up the first entry recorded under `name`.
    ///
    /// Returns `None` both when the name was never recorded and when it was
    /// recorded with no value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_first_entry_for_name() {
        let mut attrs = RawAttributeSet::new();
        attrs.push("src", Some("first.jpg".to_string()));
        attrs.push("src", Some("second.jpg".to_string()));
        assert_eq!(attrs.get("src"), Some("first.jpg"));
    }

    #[test]
    fn test_get_missing_and_empty() {
        let mut attrs = RawAttributeSet::new();
        attrs.push("data-src", None);
        assert_eq!(attrs.get("data-src"), None);
        assert_eq!(attrs.get("never-recorded"), None);
    }

    #[test]
    fn test_required_field_error_display() {
        let e = ExtractError::RequiredFieldAbsent {
            entity: "article",
            field: "title",
        };
        assert_eq!(e.to_string(), "required field `title` missing for article");
    }
}
