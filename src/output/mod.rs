//! Report writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - member compliance table, semicolon delimited - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - one report document (summary, members, posts) - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - one post per line with its reactions - requires `json-output` feature
//!
//! # Choosing a Format
//!
//! | Format | Use Case |
//! |--------|----------|
//! | CSV | Spreadsheets, the weekly compliance review |
//! | JSON | Dashboards, APIs |
//! | JSONL | Appending to a post history, streaming ingestion |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> linkpulse::Result<()> {
//! use linkpulse::output::{to_csv, write_csv, write_json, write_jsonl};
//! use linkpulse::{Roster, RosterMember, parse_chat};
//!
//! let roster = Roster::new(vec![RosterMember::new(1, "Alice")]);
//! let result = parse_chat("1/15/24, 10:30 - Alice: https://linkedin.com/posts/abc", &roster)?;
//!
//! // Write to files
//! write_csv(&result, &roster, "report.csv")?;
//! write_json(&result, &roster, "report.json")?;
//! write_jsonl(&result, &roster, "posts.jsonl")?;
//!
//! // Or get as strings
//! let csv_string = to_csv(&result, &roster)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{Report, to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// Flat timestamp layout of the JSONL writer.
#[cfg(feature = "json-output")]
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
