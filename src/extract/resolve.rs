//! Resolution of scraped URL candidates to absolute URLs.
//!
//! Image references on rendered news pages come in every flavor: absolute,
//! root-relative (`/path/x.jpg`), relative to the current page, and
//! protocol-relative (`//host/x.jpg`). This module collapses them all to an
//! absolute URL against the page the value was scraped from.

use url::Url;

/// Resolve a possibly relative candidate against `base_url`.
///
/// Protocol-relative candidates are given the `https` scheme. Everything
/// else goes through standard relative-URL join semantics, so an already
/// absolute candidate comes back unchanged.
///
/// This function never fails: if either the base or the join cannot be
/// parsed, the trimmed candidate is returned as-is. Unexpected markup must
/// degrade to best-effort data, not crash the run.
///
/// # Returns
///
/// `None` only when the candidate is absent or empty after trimming.
pub fn resolve_to_absolute(base_url: &str, candidate: Option<&str>) -> Option<String> {
    let raw = candidate?.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.starts_with("//") {
        return Some(format!("https:{raw}"));
    }
    match Url::parse(base_url) {
        Ok(base) => match base.join(raw) {
            Ok(resolved) => Some(resolved.to_string()),
            Err(_) => Some(raw.to_string()),
        },
        Err(_) => Some(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://ekantipur.com/entertainment";

    #[test]
    fn test_protocol_relative_gets_https() {
        assert_eq!(
            resolve_to_absolute(BASE, Some("//cdn.ekantipur.com/pic.jpg")),
            Some("https://cdn.ekantipur.com/pic.jpg".to_string())
        );
    }

    #[test]
    fn test_root_relative_resolved_against_origin() {
        assert_eq!(
            resolve_to_absolute("https://site.com/a/b", Some("/x.jpg")),
            Some("https://site.com/x.jpg".to_string())
        );
    }

    #[test]
    fn test_path_relative_resolved_against_base_path() {
        assert_eq!(
            resolve_to_absolute("https://site.com/section/page", Some("img/x.jpg")),
            Some("https://site.com/section/img/x.jpg".to_string())
        );
    }

    #[test]
    fn test_absolute_candidate_unchanged() {
        assert_eq!(
            resolve_to_absolute(BASE, Some("https://other.com/pic.png")),
            Some("https://other.com/pic.png".to_string())
        );
    }

    #[test]
    fn test_none_and_empty_candidates() {
        assert_eq!(resolve_to_absolute(BASE, None), None);
        assert_eq!(resolve_to_absolute(BASE, Some("")), None);
        assert_eq!(resolve_to_absolute(BASE, Some("   ")), None);
    }

    #[test]
    fn test_unparseable_base_returns_candidate() {
        assert_eq!(
            resolve_to_absolute("not a url", Some("/x.jpg")),
            Some("/x.jpg".to_string())
        );
    }

    #[test]
    fn test_candidate_trimmed_before_resolution() {
        assert_eq!(
            resolve_to_absolute(BASE, Some("  /x.jpg  ")),
            Some("https://ekantipur.com/x.jpg".to_string())
        );
    }
}
