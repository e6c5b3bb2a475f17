//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - report format options
//! - [`SelfSupport`] - self-support policy options
//!
//! The value enums mirror their library counterparts and convert into them,
//! so the library itself never depends on clap.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::SelfSupportPolicy;

/// Default ceiling for the chat export size (10 MB).
pub const DEFAULT_MAX_SIZE: usize = 10 * 1024 * 1024;

/// Build a LinkedIn-posting compliance report from a WhatsApp group export.
#[derive(Parser, Debug, Clone)]
#[command(name = "linkpulse")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    linkpulse chat.txt --roster members.json
    linkpulse chat.txt -r members.csv -o week12.json
    linkpulse chat.txt -r members.json -f jsonl --self-support ignore")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: String,

    /// Roster file with `id` and `name` per member (.json or .csv)
    #[arg(short, long, value_name = "FILE")]
    pub roster: String,

    /// Path to output file
    #[arg(short, long, default_value = "compliance_report.csv")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// How to treat members reacting to their own post
    #[arg(long, value_enum, default_value = "allow")]
    pub self_support: SelfSupport,

    /// Refuse exports larger than this many bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_SIZE)]
    pub max_size: usize,
}

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Member compliance table, semicolon delimited (default)
    #[default]
    Csv,

    /// Full report document
    Json,

    /// One post per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        crate::format::OutputFormat::from(*self).extension()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

/// Self-support policy options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfSupport {
    /// Count reactions to one's own post (default)
    #[default]
    Allow,

    /// Drop reactions to one's own post
    Ignore,
}

impl From<SelfSupport> for SelfSupportPolicy {
    fn from(value: SelfSupport) -> Self {
        match value {
            SelfSupport::Allow => SelfSupportPolicy::Allow,
            SelfSupport::Ignore => SelfSupportPolicy::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["linkpulse", "chat.txt", "-r", "roster.json"]).unwrap();

        assert_eq!(args.input, "chat.txt");
        assert_eq!(args.roster, "roster.json");
        assert_eq!(args.output, "compliance_report.csv");
        assert_eq!(args.format, OutputFormat::Csv);
        assert_eq!(args.self_support, SelfSupport::Allow);
        assert_eq!(args.max_size, DEFAULT_MAX_SIZE);
    }

    #[test]
    fn test_args_all_options() {
        let args = Args::try_parse_from([
            "linkpulse",
            "chat.txt",
            "--roster",
            "roster.csv",
            "-o",
            "out.jsonl",
            "-f",
            "ndjson",
            "--self-support",
            "ignore",
            "--max-size",
            "1024",
        ])
        .unwrap();

        assert_eq!(args.format, OutputFormat::Jsonl);
        assert_eq!(args.self_support, SelfSupport::Ignore);
        assert_eq!(args.max_size, 1024);
    }

    #[test]
    fn test_roster_is_required() {
        assert!(Args::try_parse_from(["linkpulse", "chat.txt"]).is_err());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(
            crate::format::OutputFormat::from(OutputFormat::Json),
            crate::format::OutputFormat::Json
        );
        assert_eq!(
            SelfSupportPolicy::from(SelfSupport::Ignore),
            SelfSupportPolicy::Ignore
        );
        assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
        assert_eq!(OutputFormat::Csv.to_string(), "CSV");
    }
}
