//! Parsed chat message.
//!
//! [`ParsedMessage`] is what the tokenizer produces for every header line of
//! an export, with the continuation lines that followed it folded into the
//! body. The engine fills in the resolution fields once it has matched the
//! sender against the roster.
//!
//! # Example
//!
//! ```
//! use linkpulse::ParsedMessage;
//!
//! let msg = ParsedMessage::new(0, "John Doe", "Check this out", None);
//! assert_eq!(msg.sender, "John Doe");
//! assert!(!msg.is_resolved());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::resolver::{MatchKind, Resolution};

/// A single message of a chat export.
///
/// | Field | Description |
/// |-------|-------------|
/// | `index` | 0-based position among matched messages |
/// | `sender` | Sender name exactly as printed (trimmed) |
/// | `body` | Message text, newline-joined with its continuation lines |
/// | `timestamp` | Local time from the header, `None` if not a real date |
/// | `resolved_member_id` | Roster id the sender resolved to |
/// | `match_kind` | How confidently the sender resolved |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMessage {
    pub index: usize,

    pub sender: String,

    /// May contain newlines for multiline messages.
    pub body: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub resolved_member_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub match_kind: Option<MatchKind>,
}

impl ParsedMessage {
    /// Creates an unresolved message.
    pub fn new(
        index: usize,
        sender: impl Into<String>,
        body: impl Into<String>,
        timestamp: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            index,
            sender: sender.into(),
            body: body.into(),
            timestamp,
            resolved_member_id: None,
            match_kind: None,
        }
    }

    /// Records the roster resolution of the sender.
    pub fn resolve(&mut self, resolution: Option<Resolution>) {
        self.resolved_member_id = resolution.map(|r| r.member_id);
        self.match_kind = resolution.map(|r| r.kind);
    }

    /// Returns `true` if the sender resolved to a roster member.
    pub fn is_resolved(&self) -> bool {
        self.resolved_member_id.is_some()
    }
}
