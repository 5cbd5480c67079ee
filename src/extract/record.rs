//! Record assembly for scraped entities.
//!
//! Applies the per-field extraction policies across the fixed field set of
//! each entity kind. Field extraction is independent: one field coming up
//! empty never blocks the others.

use super::fallback::text_field;
use super::fields::extract_image_url;
use super::{ExtractError, RawAttributeSet};
use crate::models::{Article, Cartoon, DEFAULT_CATEGORY};

/// Assemble the Cartoon of the Day record.
///
/// Every field is optional: a cartoon page without a byline or headline
/// still yields a record.
pub fn assemble_cartoon(base_url: &str, attrs: &RawAttributeSet) -> Cartoon {
    Cartoon {
        title: text_field(attrs.get("title")),
        image_url: extract_image_url(base_url, attrs),
        cartoonist: text_field(attrs.get("author")),
    }
}

/// Assemble one entertainment article record.
///
/// The title is required; a card without one is a data-quality fault and
/// surfaces as [`ExtractError::RequiredFieldAbsent`] so the caller can
/// decide whether to skip the card or abort. A missing category falls back
/// to the section's fixed label.
pub fn assemble_article(
    base_url: &str,
    attrs: &RawAttributeSet,
) -> Result<Article, ExtractError> {
    let title =
        text_field(attrs.get("title")).ok_or(ExtractError::RequiredFieldAbsent {
            entity: "article",
            field: "title",
        })?;
    Ok(Article {
        title,
        image_url: extract_image_url(base_url, attrs),
        category: text_field(attrs.get("category"))
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        author: text_field(attrs.get("author")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://ekantipur.com/entertainment";

    fn attrs_from(pairs: &[(&str, Option<&str>)]) -> RawAttributeSet {
        let mut attrs = RawAttributeSet::new();
        for (name, value) in pairs {
            attrs.push(*name, value.map(str::to_string));
        }
        attrs
    }

    #[test]
    fn test_cartoon_full_record() {
        let attrs = attrs_from(&[
            ("title", Some("  आजको कार्टुन  ")),
            ("src", Some("/cartoon/today.jpg")),
            ("author", Some("अभिन")),
        ]);
        let cartoon = assemble_cartoon("https://ekantipur.com/cartoon", &attrs);
        assert_eq!(cartoon.title, Some("आजको कार्टुन".to_string()));
        assert_eq!(
            cartoon.image_url,
            Some("https://ekantipur.com/cartoon/today.jpg".to_string())
        );
        assert_eq!(cartoon.cartoonist, Some("अभिन".to_string()));
    }

    #[test]
    fn test_cartoon_all_fields_optional() {
        let attrs = attrs_from(&[("title", Some("   ")), ("src", None), ("author", None)]);
        let cartoon = assemble_cartoon("https://ekantipur.com/cartoon", &attrs);
        assert_eq!(cartoon.title, None);
        assert_eq!(cartoon.image_url, None);
        assert_eq!(cartoon.cartoonist, None);
    }

    #[test]
    fn test_article_category_falls_back_to_section_label() {
        let attrs = attrs_from(&[
            ("title", Some("नयाँ चलचित्र")),
            ("category", None),
            ("author", None),
        ]);
        let article = assemble_article(BASE, &attrs).unwrap();
        assert_eq!(article.category, "मनोरञ्जन");
        assert_eq!(article.author, None);
    }

    #[test]
    fn test_article_explicit_category_kept() {
        let attrs = attrs_from(&[
            ("title", Some("नयाँ चलचित्र")),
            ("category", Some("चलचित्र")),
        ]);
        let article = assemble_article(BASE, &attrs).unwrap();
        assert_eq!(article.category, "चलचित्र");
    }

    #[test]
    fn test_article_title_required() {
        let attrs = attrs_from(&[("title", Some("   ")), ("category", Some("चलचित्र"))]);
        let err = assemble_article(BASE, &attrs).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::RequiredFieldAbsent {
                entity: "article",
                field: "title"
            }
        ));
    }

    #[test]
    fn test_article_image_failure_does_not_block_other_fields() {
        let attrs = attrs_from(&[
            ("title", Some("शीर्षक")),
            ("src", Some("")),
            ("author", Some("लेखक")),
        ]);
        let article = assemble_article(BASE, &attrs).unwrap();
        assert_eq!(article.image_url, None);
        assert_eq!(article.title, "शीर्षक");
        assert_eq!(article.author, Some("लेखक".to_string()));
    }

    #[test]
    fn test_article_end_to_end_srcset_fallback() {
        let attrs = attrs_from(&[
            ("title", Some("शीर्षक")),
            ("src", None),
            ("data-src", None),
            ("data-original", None),
            ("data-lazy", None),
            ("srcset", Some("https://cdn/x.jpg 1x")),
        ]);
        let article = assemble_article(BASE, &attrs).unwrap();
        assert_eq!(article.image_url, Some("https://cdn/x.jpg".to_string()));
    }
}
