//! JSON report output.
//!
//! Serializes the daily report for consumption by external clients. The
//! top-level JSON shape is fixed:
//!
//! ```json
//! {"cartoon": {...}, "entertainment_articles": [...]}
//! ```

use crate::models::DailyReport;
use chrono::Local;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`DailyReport`] to `{json_output_dir}/{YYYY-MM-DD}.json`.
///
/// Creates the output directory if needed. The filename uses the local
/// date so repeated runs on the same day overwrite each other.
///
/// # Returns
///
/// The path of the written file, or an error if directory creation,
/// serialization, or the write fails.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_report(
    report: &DailyReport,
    json_output_dir: &str,
) -> Result<String, Box<dyn Error>> {
    let json = serde_json::to_string(report)?;

    if let Err(e) = fs::create_dir_all(json_output_dir).await {
        error!(%json_output_dir, error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let local_date = Local::now().date_naive().to_string();
    let output_json_filename = format!(
        "{}/{}.json",
        json_output_dir.trim_end_matches('/'),
        local_date
    );

    info!(path = %output_json_filename, "Writing JSON");
    fs::write(&output_json_filename, json).await?;
    info!(path = %output_json_filename, "Wrote JSON report file");

    Ok(output_json_filename)
}
