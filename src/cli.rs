//! Command-line interface definitions.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! All arguments can be provided via command-line flags or environment
//! variables.

use clap::Parser;

/// Command-line arguments for the ekantipur scraper.
///
/// # Examples
///
/// ```sh
/// # Basic usage
/// ekantipur_news -j ./json
///
/// # Fewer articles, alternate mirror
/// ekantipur_news -j ./json -n 3 --site-url https://ekantipur.com
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for the JSON report file
    #[arg(short, long)]
    pub json_output_dir: String,

    /// Site root to scrape
    #[arg(long, env = "EKANTIPUR_SITE_URL", default_value = "https://ekantipur.com")]
    pub site_url: String,

    /// Number of entertainment articles to extract
    #[arg(short = 'n', long, default_value_t = 5)]
    pub article_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_defaults() {
        let cli = Cli::parse_from(&["ekantipur_news", "--json-output-dir", "./json"]);

        assert_eq!(cli.json_output_dir, "./json");
        assert_eq!(cli.site_url, "https://ekantipur.com");
        assert_eq!(cli.article_count, 5);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(&["ekantipur_news", "-j", "/tmp/json", "-n", "3"]);

        assert_eq!(cli.json_output_dir, "/tmp/json");
        assert_eq!(cli.article_count, 3);
    }
}
