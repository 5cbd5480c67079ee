//! The image-extraction pipeline.
//!
//! Picking an image URL off a rendered card is a fixed five-step pipeline:
//!
//! 1. Walk the direct URL-bearing attributes in priority order
//!    (`src`, then the lazy-load alternates) and take the first non-empty.
//! 2. Only if none qualified, fall back to parsing the `srcset` attribute.
//! 3. Resolve the winning candidate against the page URL.
//! 4. Unwrap a `thumb.php` proxy wrapper, if present.
//! 5. Return the result (`None` when every step came up empty).
//!
//! The order matters and is pinned by tests: direct attributes beat
//! `srcset`, and unwrapping runs after resolution so that an
//! already-absolute `thumb.php` URL is still unwrapped.

use super::fallback::first_present;
use super::resolve::resolve_to_absolute;
use super::srcset::first_url_from_srcset;
use super::thumb::unwrap_thumb_php;
use super::RawAttributeSet;

/// Direct URL-bearing attributes in fallback priority order. `src` first,
/// then the lazy-load alternates the site's image widgets are known to use.
pub const IMAGE_ATTR_PRIORITY: [&str; 5] =
    ["src", "data-src", "data-original", "data-lazy", "data-srcset"];

/// Extract and normalize the image URL for one card.
///
/// # Arguments
///
/// * `base_url` - The URL of the page the attributes were scraped from
/// * `attrs` - The card's captured attribute values
///
/// # Returns
///
/// A fully absolute, proxy-free URL, or `None` when no candidate attribute
/// held a usable value.
pub fn extract_image_url(base_url: &str, attrs: &RawAttributeSet) -> Option<String> {
    let candidate = first_present(IMAGE_ATTR_PRIORITY.iter().map(|name| attrs.get(name)))
        .or_else(|| first_url_from_srcset(attrs.get("srcset")));
    let resolved = resolve_to_absolute(base_url, candidate.as_deref());
    unwrap_thumb_php(resolved.as_deref())
}
