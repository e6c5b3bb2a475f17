//! Report format types for the linkpulse library.
//!
//! These types don't depend on CLI frameworks, so library callers can pick a
//! writer without pulling in `clap`.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> linkpulse::Result<()> {
//! use linkpulse::format::{OutputFormat, write_to_format};
//! use linkpulse::{Roster, RosterMember, parse_chat};
//!
//! let roster = Roster::new(vec![RosterMember::new(1, "Alice")]);
//! let result = parse_chat("1/15/24, 10:30 - Alice: hi", &roster)?;
//!
//! // Write using format enum
//! write_to_format(&result, &roster, "report.csv", OutputFormat::Csv)?;
//!
//! // Or use format detection from extension
//! let format = OutputFormat::from_path("report.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::engine::ParseResult;
use crate::error::LinkpulseError;
use crate::roster::Roster;

/// Output format for compliance reports.
///
/// - [`Csv`](OutputFormat::Csv) - member compliance table
/// - [`Json`](OutputFormat::Json) - full report document
/// - [`Jsonl`](OutputFormat::Jsonl) - one post per line
///
/// # Example
///
/// ```rust
/// use linkpulse::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Member table, semicolon delimited (default)
    #[default]
    Csv,

    /// Summary, member table and posts in one document
    Json,

    /// JSON Lines - one post with its reactions per line
    ///
    /// Also known as NDJSON.
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use linkpulse::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("report.json").unwrap();
    /// assert_eq!(format, OutputFormat::Json);
    /// ```
    pub fn from_path(path: &str) -> Result<Self, LinkpulseError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(LinkpulseError::invalid_format(
                "output",
                format!(
                    "Unknown file extension: '.{}'. Expected one of: csv, json, jsonl",
                    ext
                ),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

fn missing_feature(format: OutputFormat) -> LinkpulseError {
    LinkpulseError::invalid_format(
        "output",
        format!(
            "Output format {:?} requires the '{}' feature to be enabled",
            format,
            match format {
                OutputFormat::Csv => "csv-output",
                OutputFormat::Json | OutputFormat::Jsonl => "json-output",
            }
        ),
    )
}

/// Writes a report to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    result: &ParseResult,
    roster: &Roster,
    path: &str,
    format: OutputFormat,
) -> Result<(), LinkpulseError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::write_csv(result, roster, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::write_json(result, roster, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::output::write_jsonl(result, roster, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Renders a report to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    result: &ParseResult,
    roster: &Roster,
    format: OutputFormat,
) -> Result<String, LinkpulseError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::to_csv(result, roster),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::to_json(result, roster),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::output::to_jsonl(result, roster),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}
