//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::engine::ParseResult;
use crate::error::{LinkpulseError, Result};
use crate::roster::Roster;
use crate::summary::MemberStats;

const HEADER: [&str; 6] = [
    "MemberId",
    "Name",
    "Posts",
    "SupportGiven",
    "SupportReceived",
    "Status",
];

/// Writes the member compliance table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `MemberId`, `Name`, `Posts`, `SupportGiven`, `SupportReceived`, `Status`
/// - One row per roster member, most active first
/// - Encoding: UTF-8
pub fn write_csv(result: &ParseResult, roster: &Roster, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_table(&result.member_stats(roster), file)
}

/// Converts the member compliance table to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to file.
pub fn to_csv(result: &ParseResult, roster: &Roster) -> Result<String> {
    let mut buffer = Vec::new();
    write_table(&result.member_stats(roster), &mut buffer)?;

    String::from_utf8(buffer).map_err(|e| LinkpulseError::invalid_format("csv", e.to_string()))
}

fn write_table<W: Write>(rows: &[MemberStats], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;
    for row in rows {
        writer.write_record(build_record(row))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_record(row: &MemberStats) -> [String; 6] {
    [
        row.member_id.to_string(),
        row.name.clone(),
        row.posts_count.to_string(),
        row.support_given.to_string(),
        row.support_received.to_string(),
        row.status.to_string(),
    ]
}
