//! Output generation for the scraped daily report.
//!
//! # Submodules
//!
//! - [`json`]: Writes the [`DailyReport`](crate::models::DailyReport) to a
//!   date-stamped JSON file
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! ├── 2026-08-23.json
//! └── 2026-08-24.json
//! ```

pub mod json;
