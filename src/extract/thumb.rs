//! Unwrapping of `thumb.php` thumbnail-proxy URLs.
//!
//! ekantipur.com (like many content sites) often serves images through a
//! resizing endpoint of the form
//! `https://host/path/thumb.php?src=<percent-encoded original>&w=...`.
//! The record should always carry the original asset URL, not the proxy
//! link, so this module detects the pattern and pulls the `src` parameter
//! out.

use url::Url;

/// If `url` is a `thumb.php?src=...` wrapper, return the decoded `src` URL;
/// otherwise return the URL unchanged.
///
/// A wrapper without a usable `src` parameter is returned as-is — a
/// degenerate proxy link is still better than losing the image entirely.
/// Applying this function to an already-unwrapped URL is a no-op, so the
/// operation is idempotent.
pub fn unwrap_thumb_php(url: Option<&str>) -> Option<String> {
    let u = url?.trim();
    let Ok(parsed) = Url::parse(u) else {
        // Best-effort strings from a failed resolution pass through.
        return Some(u.to_string());
    };
    if !parsed.path().ends_with("/thumb.php") {
        return Some(u.to_string());
    }
    let Some(query) = parsed.query() else {
        return Some(u.to_string());
    };
    let raw_src = query
        .split('&')
        .find_map(|pair| pair.strip_prefix("src=").filter(|v| !v.is_empty()));
    match raw_src {
        Some(raw) => {
            let decoded = urlencoding::decode(raw)
                .map(|c| c.into_owned())
                .unwrap_or_else(|_| raw.to_string());
            if decoded.is_empty() {
                Some(u.to_string())
            } else {
                Some(decoded)
            }
        }
        None => Some(u.to_string()),
    }
}
