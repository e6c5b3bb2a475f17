//! Line tokenizer for WhatsApp TXT exports.
//!
//! Splits raw export text into messages. A message starts at a header line
//!
//! ```text
//! 1/15/24, 10:30 AM - John Doe: Check this out
//! 1/15/24 22:30:05 - Jane Smith: 👍
//! ```
//!
//! and swallows every following non-header line as continuation text until
//! the next header. Lines before the first header are dropped and blank lines
//! are skipped everywhere.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::message::ParsedMessage;
use crate::parsing::timestamp::normalize_timestamp;

/// Header grammar: `D/M/Y[,] H:MM[:SS][ AM|PM] - Sender: message`.
///
/// Digits are ASCII only. Capture groups: 1 = date, 2 = time (with
/// marker), 3 = sender, 4 = text.
pub const HEADER_PATTERN: &str =
    r"^([0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}),?\s([0-9]{1,2}:[0-9]{2}(?::[0-9]{2})?\s?(?:AM|PM)?)\s-\s([^:]+):\s(.+)";

static HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADER_PATTERN).expect("header pattern is a valid regex"));

/// Byte-order mark and directional marks some clients put in front of a line.
const LEADING_MARKS: [char; 3] = ['\u{feff}', '\u{200e}', '\u{200f}'];

/// The part of a line the header grammar is matched against.
fn header_candidate(line: &str) -> &str {
    line.trim().trim_start_matches(LEADING_MARKS).trim_start()
}

/// A header line split into its captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLine<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub sender: &'a str,
    pub text: &'a str,
}

impl<'a> HeaderLine<'a> {
    /// Matches a single physical line against the header grammar.
    ///
    /// Surrounding whitespace and a leading byte-order or directional mark
    /// are ignored. Sender and text are returned trimmed.
    ///
    /// ```
    /// use linkpulse::parsing::HeaderLine;
    ///
    /// let header = HeaderLine::parse("1/15/24, 10:30 AM - John Doe: Hi all").unwrap();
    /// assert_eq!(header.date, "1/15/24");
    /// assert_eq!(header.time, "10:30 AM");
    /// assert_eq!(header.sender, "John Doe");
    /// assert_eq!(header.text, "Hi all");
    ///
    /// assert!(HeaderLine::parse("just some text").is_none());
    /// ```
    pub fn parse(line: &'a str) -> Option<Self> {
        HEADER_REGEX
            .captures(header_candidate(line))
            .map(|caps| Self::from_captures(&caps))
    }

    fn from_captures(caps: &Captures<'a>) -> Self {
        let group = |i| caps.get(i).map_or("", |m| m.as_str());
        Self {
            date: group(1),
            time: group(2),
            sender: group(3).trim(),
            text: group(4).trim(),
        }
    }
}

/// Returns `true` if the line starts a new message.
pub fn is_header_line(line: &str) -> bool {
    HEADER_REGEX.is_match(header_candidate(line))
}

/// Lazy, single-pass iterator over the messages of an export.
///
/// Messages are yielded in file order with consecutive `index` values
/// starting at 0. `resolved_member_id` is left empty; resolution needs a
/// roster and happens in the engine.
///
/// # Example
///
/// ```
/// use linkpulse::parsing::LineTokenizer;
///
/// let text = "\
/// 1/15/24, 10:30 AM - Alice: First line
/// second line
/// 1/15/24, 10:31 AM - Bob: Hi";
///
/// let messages: Vec<_> = LineTokenizer::new(text).collect();
/// assert_eq!(messages.len(), 2);
/// assert_eq!(messages[0].body, "First line\nsecond line");
/// assert_eq!(messages[1].index, 1);
/// ```
pub struct LineTokenizer<'a> {
    lines: std::str::Lines<'a>,
    open: Option<ParsedMessage>,
    next_index: usize,
}

impl<'a> LineTokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            open: None,
            next_index: 0,
        }
    }
}

fn start_message(index: usize, header: &HeaderLine<'_>) -> ParsedMessage {
    ParsedMessage::new(
        index,
        header.sender,
        header.text,
        normalize_timestamp(header.date, header.time),
    )
}

impl Iterator for LineTokenizer<'_> {
    type Item = ParsedMessage;

    fn next(&mut self) -> Option<ParsedMessage> {
        for line in self.lines.by_ref() {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(header) = HeaderLine::parse(line) {
                let started = start_message(self.next_index, &header);
                self.next_index += 1;
                if let Some(finished) = self.open.replace(started) {
                    return Some(finished);
                }
            } else if let Some(open) = self.open.as_mut() {
                // Continuation of the open message (multiline)
                open.body.push('\n');
                open.body.push_str(line);
            }
            // No open message: orphan line before the first header, skipped
        }

        self.open.take()
    }
}
