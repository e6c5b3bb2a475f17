//! JSON Lines (JSONL) output writer.
//!
//! One line per shared post, so a week's file can be appended to a running
//! post history without re-reading it.

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::engine::ParseResult;
use crate::error::Result;
use crate::linker::LinkedInPost;
use crate::roster::Roster;

use super::TIMESTAMP_FORMAT;

/// Flattened post record for JSONL output.
#[derive(Serialize)]
struct JsonlPost<'a> {
    url: &'a str,
    author_member_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    author_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shared_at: Option<String>,
    message_index: usize,
    reaction_count: usize,
    /// Supporter ids in link order; repeats are kept.
    supporters: Vec<u64>,
}

impl<'a> JsonlPost<'a> {
    fn from_post(post: &'a LinkedInPost, roster: &'a Roster) -> Self {
        Self {
            url: &post.url,
            author_member_id: post.author_member_id,
            author_name: roster
                .get(post.author_member_id)
                .map(|member| member.name.as_str()),
            shared_at: post
                .shared_at
                .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string()),
            message_index: post.message_index,
            reaction_count: post.reaction_count(),
            supporters: post
                .reactions
                .iter()
                .map(|event| event.supporter_member_id)
                .collect(),
        }
    }
}

/// Writes posts to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"url":"https://linkedin.com/posts/abc","author_member_id":1,"author_name":"Alice","message_index":0,"reaction_count":1,"supporters":[2]}
/// ```
pub fn write_jsonl(result: &ParseResult, roster: &Roster, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    write_lines(result, roster, &mut writer)?;

    writer.flush()?;
    Ok(())
}

/// Converts posts to a JSONL string.
pub fn to_jsonl(result: &ParseResult, roster: &Roster) -> Result<String> {
    let mut output = String::new();
    for post in &result.posts {
        output.push_str(&serde_json::to_string(&JsonlPost::from_post(post, roster))?);
        output.push('\n');
    }
    Ok(output)
}

fn write_lines<W: Write>(result: &ParseResult, roster: &Roster, writer: &mut W) -> Result<()> {
    for post in &result.posts {
        let line = serde_json::to_string(&JsonlPost::from_post(post, roster))?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
