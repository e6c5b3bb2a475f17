//! JSON output writer.

use std::fs::File;
use std::io::Write;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::engine::ParseResult;
use crate::error::Result;
use crate::linker::LinkedInPost;
use crate::roster::Roster;
use crate::summary::{MemberStats, Summary, compliant_members};

/// The JSON report document.
///
/// Borrowed from a [`ParseResult`]; only the member table is computed.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub summary: &'a Summary,
    /// `[start, end]` of the export, absent for an export without a single
    /// valid timestamp. Serialized like every other timestamp in the report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<[NaiveDateTime; 2]>,
    pub compliant_members: usize,
    pub members: Vec<MemberStats>,
    pub posts: &'a [LinkedInPost],
}

impl<'a> Report<'a> {
    pub fn new(result: &'a ParseResult, roster: &Roster) -> Self {
        let members = result.member_stats(roster);
        let period = result
            .summary
            .first_message_at
            .zip(result.summary.last_message_at)
            .map(|(first, last)| [first, last]);

        Self {
            summary: &result.summary,
            period,
            compliant_members: compliant_members(&members),
            members,
            posts: &result.posts,
        }
    }
}

/// Writes the report to a JSON file.
///
/// # Format
/// ```json
/// {
///   "summary": {"total_messages": 2, "total_posts": 1, ...},
///   "period": ["2024-01-15T10:30:00", "2024-01-15T10:31:00"],
///   "compliant_members": 1,
///   "members": [{"member_id": 1, "name": "Alice", "status": "compliant", ...}],
///   "posts": [{"url": "https://linkedin.com/posts/abc", "reactions": [...], ...}]
/// }
/// ```
pub fn write_json(result: &ParseResult, roster: &Roster, output_path: &str) -> Result<()> {
    let json = to_json(result, roster)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the report to a pretty-printed JSON string.
pub fn to_json(result: &ParseResult, roster: &Roster) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Report::new(result, roster))?)
}
