//! ekantipur.com scraper.
//!
//! Scrapes two pages per run:
//!
//! - `/cartoon` — the dedicated cartoon page, which reliably shows the
//!   current "Cartoon of the Day"
//! - `/entertainment` — the मनोरञ्जन section, for the top article cards
//!
//! Semantic selectors (`main article`, `h2 a`) are preferred over
//! class-based ones since they survive site redesigns better. Image URLs
//! on both pages may be relative, lazy-loaded, or wrapped in the site's
//! `thumb.php` resizer; all of that is handled by the extraction core.

use crate::extract::fields::IMAGE_ATTR_PRIORITY;
use crate::extract::record::{assemble_article, assemble_cartoon};
use crate::extract::RawAttributeSet;
use crate::models::{Article, Cartoon};
use crate::utils::truncate_for_log;
use reqwest::get;
use scraper::{ElementRef, Html, Selector};
use std::error::Error;
use tracing::{debug, error, info, instrument};

/// Author links appear either root-relative or fully qualified.
const AUTHOR_LINKS: &str = r#"a[href^="/author/"], a[href^="https://ekantipur.com/author/"]"#;

/// Common patterns for category/tag links in news card UIs.
const CATEGORY_LINKS: &str =
    r#"a[href^="/tag/"], a[href^="/category/"], a[class*="tag"], a[class*="category"]"#;

/// Fetch and parse the Cartoon of the Day.
///
/// # Arguments
///
/// * `site_base` - The site root, e.g. `https://ekantipur.com`
///
/// # Returns
///
/// The assembled [`Cartoon`] record, or an error if the page fetch fails.
/// A page with no recognizable cartoon content still yields a record with
/// all fields `None`.
#[instrument(level = "info", skip_all, fields(%site_base))]
pub async fn fetch_cartoon(site_base: &str) -> Result<Cartoon, Box<dyn Error>> {
    let url = format!("{}/cartoon", site_base.trim_end_matches('/'));
    let response = get(&url).await?;
    // Resolve against the final URL in case the site redirected us.
    let page_url = response.url().to_string();
    let html = response.text().await?;
    debug!(
        bytes = html.len(),
        preview = %truncate_for_log(&html, 200),
        "Fetched cartoon page"
    );

    let cartoon = parse_cartoon_page(&html, &page_url)?;
    info!(
        has_title = cartoon.title.is_some(),
        has_image = cartoon.image_url.is_some(),
        has_cartoonist = cartoon.cartoonist.is_some(),
        "Parsed Cartoon of the Day"
    );
    Ok(cartoon)
}

/// Fetch and parse the top entertainment articles.
///
/// # Arguments
///
/// * `site_base` - The site root, e.g. `https://ekantipur.com`
/// * `limit` - Maximum number of article cards to extract
///
/// # Returns
///
/// The assembled [`Article`] records in page order. Cards missing required
/// data are logged and skipped, so fewer than `limit` records may come back.
#[instrument(level = "info", skip_all, fields(%site_base, limit))]
pub async fn fetch_entertainment(
    site_base: &str,
    limit: usize,
) -> Result<Vec<Article>, Box<dyn Error>> {
    let url = format!("{}/entertainment", site_base.trim_end_matches('/'));
    let response = get(&url).await?;
    let page_url = response.url().to_string();
    let html = response.text().await?;
    debug!(
        bytes = html.len(),
        preview = %truncate_for_log(&html, 200),
        "Fetched entertainment page"
    );

    let articles = parse_entertainment_page(&html, &page_url, limit)?;
    info!(count = articles.len(), "Parsed entertainment articles");
    Ok(articles)
}

/// Parse the cartoon page into a [`Cartoon`] record.
///
/// `page_url` is the URL the HTML was served from; relative image URLs are
/// resolved against it.
pub fn parse_cartoon_page(html: &str, page_url: &str) -> Result<Cartoon, Box<dyn Error>> {
    let document = Html::parse_document(html);
    let title_selector = Selector::parse("main h1, article h1")?;
    let image_selector = Selector::parse("main img, article img")?;
    let author_selector = Selector::parse(AUTHOR_LINKS)?;

    let mut attrs = RawAttributeSet::new();
    attrs.push(
        "title",
        document.select(&title_selector).next().map(inner_text),
    );
    if let Some(img) = document.select(&image_selector).next() {
        capture_image_attributes(img, &mut attrs);
    }
    attrs.push(
        "author",
        document.select(&author_selector).next().map(inner_text),
    );

    Ok(assemble_cartoon(page_url, &attrs))
}

/// Parse the entertainment section page into up to `limit` [`Article`]s.
///
/// A card whose required title is absent is a data-quality fault; it is
/// logged at error level and skipped so the remaining cards still come
/// through.
pub fn parse_entertainment_page(
    html: &str,
    page_url: &str,
    limit: usize,
) -> Result<Vec<Article>, Box<dyn Error>> {
    let document = Html::parse_document(html);
    let card_selector = Selector::parse("main article")?;
    let title_selector = Selector::parse("h2 a")?;
    let category_selector = Selector::parse(CATEGORY_LINKS)?;
    let author_selector = Selector::parse(AUTHOR_LINKS)?;
    let image_selector = Selector::parse("img")?;

    let mut articles = Vec::new();
    for (index, card) in document.select(&card_selector).take(limit).enumerate() {
        let mut attrs = RawAttributeSet::new();
        attrs.push("title", card.select(&title_selector).next().map(inner_text));
        attrs.push(
            "category",
            card.select(&category_selector).next().map(inner_text),
        );
        attrs.push(
            "author",
            card.select(&author_selector).next().map(inner_text),
        );
        if let Some(img) = card.select(&image_selector).next() {
            capture_image_attributes(img, &mut attrs);
        }

        match assemble_article(page_url, &attrs) {
            Ok(article) => {
                debug!(index, title = %article.title, "Assembled article card");
                articles.push(article);
            }
            Err(e) => {
                error!(index, error = %e, "Skipping article card with missing required data");
            }
        }
    }

    Ok(articles)
}

/// Capture an `img` element's URL-bearing attributes in fallback priority
/// order, plus its `srcset`.
fn capture_image_attributes(img: ElementRef, attrs: &mut RawAttributeSet) {
    for name in IMAGE_ATTR_PRIORITY {
        attrs.push(name, img.value().attr(name).map(str::to_string));
    }
    attrs.push("srcset", img.value().attr("srcset").map(str::to_string));
}

/// Collect an element's text content, joining nested text nodes.
fn inner_text(element: ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ")
}
