//! # ekantipur_news
//!
//! A scraper that pulls structured data from ekantipur.com and writes a
//! JSON report per run:
//!
//! - The "Cartoon of the Day" from the dedicated cartoon page
//! - The top entertainment (मनोरञ्जन) articles with title, image,
//!   category, and author
//!
//! Image URLs on the site may be relative, lazy-loaded, protocol-relative,
//! or wrapped behind the site's `thumb.php` thumbnail resizer; the
//! extraction core normalizes all of them to direct absolute URLs.
//!
//! ## Usage
//!
//! ```sh
//! ekantipur_news -j ./json
//! ```
//!
//! ## Architecture
//!
//! 1. **Fetching**: Download the cartoon and entertainment pages
//! 2. **Extraction**: Capture raw attribute values per entity and run them
//!    through the normalization pipeline in [`extract`]
//! 3. **Output**: Write the assembled [`models::DailyReport`] as JSON

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;
mod extract;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use models::DailyReport;
use outputs::json;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("ekantipur_news starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.json_output_dir, ?args.site_url, args.article_count, "Parsed CLI arguments");

    // Early check: ensure JSON output dir is writable
    if let Err(e) = ensure_writable_dir(&args.json_output_dir).await {
        error!(
            path = %args.json_output_dir,
            error = %e,
            "JSON output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Cartoon of the Day ----
    let cartoon = scrapers::ekantipur::fetch_cartoon(&args.site_url).await?;
    info!(
        title = ?cartoon.title,
        image_url = ?cartoon.image_url,
        cartoonist = ?cartoon.cartoonist,
        "Cartoon of the Day"
    );

    // ---- Entertainment section ----
    let entertainment_articles =
        scrapers::ekantipur::fetch_entertainment(&args.site_url, args.article_count).await?;
    info!(
        count = entertainment_articles.len(),
        requested = args.article_count,
        "Top entertainment articles"
    );
    for (index, article) in entertainment_articles.iter().enumerate() {
        debug!(
            index,
            title = %article.title,
            image_url = ?article.image_url,
            category = %article.category,
            author = ?article.author,
            "Entertainment article"
        );
    }

    // ---- JSON output ----
    let report = DailyReport {
        cartoon,
        entertainment_articles,
    };
    match json::write_report(&report, &args.json_output_dir).await {
        Ok(path) => info!(%path, "Report written"),
        Err(e) => {
            error!(error = %e, "Failed to write JSON report");
            return Err(e);
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
