//! First-candidate extraction from `srcset` attribute strings.
//!
//! A `srcset` value is a comma-separated list of `"<url> <descriptor>"`
//! entries, e.g. `"https://a.jpg 1x, https://b.jpg 2x"`. We only ever want
//! one usable URL out of it, and the first candidate is as good as any.

/// Parse a `srcset` value and return the first candidate URL, if any.
///
/// The descriptor (`1x`, `480w`, ...) is discarded. No URL validation
/// happens here; downstream resolution deals with malformed values.
///
/// # Returns
///
/// `None` when the input is absent, empty, or its first comma-separated
/// segment contains no token.
pub fn first_url_from_srcset(srcset: Option<&str>) -> Option<String> {
    let first_entry = srcset?.split(',').next()?.trim();
    first_entry.split_whitespace().next().map(str::to_string)
}
