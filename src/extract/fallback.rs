//! Ordered fallback selection and text-field trimming.
//!
//! Lazy-loading image widgets stash the real URL in any of several
//! attributes, so fields are extracted by walking an ordered candidate list
//! and taking the first value that actually holds something. The same
//! "empty means absent" rule applies to plain text fields.

/// Return the first candidate that is present and non-empty after trimming.
///
/// Candidates are evaluated strictly in order and the iterator is not
/// advanced past the first match, so lazily produced candidates are only
/// materialized on demand.
pub fn first_present<'a, I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

/// Normalize a raw text value into a record field.
///
/// Trims surrounding whitespace; a value that is empty after trimming is
/// treated as absent. Records never store empty strings.
pub fn text_field(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_present_skips_none_and_blank() {
        let got = first_present([None, Some(""), Some("  "), Some("value")]);
        assert_eq!(got, Some("value".to_string()));
    }

    #[test]
    fn test_first_present_all_absent() {
        assert_eq!(first_present([None, None]), None);
        assert_eq!(first_present::<[Option<&str>; 0]>([]), None);
    }

    #[test]
    fn test_first_present_trims_winner() {
        assert_eq!(
            first_present([Some("  /a.jpg  "), Some("/b.jpg")]),
            Some("/a.jpg".to_string())
        );
    }

    #[test]
    fn test_first_present_short_circuits() {
        // Later candidates must not be evaluated once a match is found.
        let mut evaluated = 0;
        let candidates = ["", "hit", "never"].iter().map(|v| {
            evaluated += 1;
            Some(*v)
        });
        assert_eq!(first_present(candidates), Some("hit".to_string()));
        assert_eq!(evaluated, 2);
    }

    #[test]
    fn test_text_field_trims() {
        assert_eq!(text_field(Some("  शीर्षक  ")), Some("शीर्षक".to_string()));
    }

    #[test]
    fn test_text_field_empty_is_none() {
        assert_eq!(text_field(None), None);
        assert_eq!(text_field(Some("")), None);
        assert_eq!(text_field(Some("   \n\t ")), None);
    }
}
