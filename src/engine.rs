//! The chat ingestion and compliance-linking engine.
//!
//! [`ComplianceEngine::parse`] runs the whole pipeline over one export:
//!
//! 1. tokenize lines into messages (with normalized timestamps)
//! 2. resolve each sender against the roster
//! 3. turn every LinkedIn URL of a resolved message into a post
//! 4. link supportive messages to the latest post in the window
//! 5. aggregate the summary
//!
//! A parse is a pure, single-pass transformation. It keeps no state between
//! calls, so one engine can serve concurrent uploads.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::classify::{extract_linkedin_urls, is_support_message};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::linker::{LinkedInPost, SupportEvent, WindowedLinker};
use crate::message::ParsedMessage;
use crate::parsing::LineTokenizer;
use crate::resolver::MemberResolver;
use crate::roster::Roster;
use crate::summary::{MemberStats, Summary, member_stats, summarize};

/// Output of one parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub total_messages: usize,
    /// Every matched message, in export order.
    pub messages: Vec<ParsedMessage>,
    pub posts: Vec<LinkedInPost>,
    /// Every support event, in link order.
    pub support_events: Vec<SupportEvent>,
    pub summary: Summary,
}

impl ParseResult {
    /// Builds the per-member compliance table for this result.
    pub fn member_stats(&self, roster: &Roster) -> Vec<MemberStats> {
        member_stats(roster, &self.posts, &self.support_events)
    }
}

/// Parses chat exports against a roster.
///
/// # Example
///
/// ```
/// use linkpulse::{ComplianceEngine, Roster, RosterMember};
///
/// let roster = Roster::new(vec![
///     RosterMember::new(7, "John Doe"),
///     RosterMember::new(9, "Jane Smith"),
/// ]);
/// let chat = "\
/// 1/15/24, 10:30 AM - John Doe: Check this out https://linkedin.com/posts/abc123
/// 1/15/24, 10:35 AM - Jane Smith: 👍";
///
/// let result = ComplianceEngine::new().parse(chat, &roster)?;
///
/// assert_eq!(result.posts.len(), 1);
/// assert_eq!(result.posts[0].author_member_id, 7);
/// assert_eq!(result.support_events[0].supporter_member_id, 9);
/// assert_eq!(result.posts[0].reactions.len(), 1);
/// # Ok::<(), linkpulse::LinkpulseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComplianceEngine {
    config: EngineConfig,
}

impl ComplianceEngine {
    /// Creates an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with custom configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parses one export.
    ///
    /// Fails only with [`InvalidInput`](crate::LinkpulseError::InvalidInput)
    /// when the roster breaks its contract, before any parsing happens.
    pub fn parse(&self, chat_text: &str, roster: &Roster) -> Result<ParseResult> {
        roster.validate()?;

        let resolver = MemberResolver::new(roster);
        let mut linker = WindowedLinker::new(self.config.self_support);
        let mut messages = Vec::new();
        let mut unresolved = 0usize;

        for mut message in LineTokenizer::new(chat_text) {
            message.resolve(resolver.resolve(&message.sender));

            if message.timestamp.is_none() {
                warn!(
                    index = message.index,
                    sender = %message.sender,
                    "header date/time is not a valid calendar time"
                );
            }

            match message.resolved_member_id {
                Some(member) => {
                    for url in extract_linkedin_urls(&message.body) {
                        linker.record_post(member, url, message.timestamp, message.index);
                    }
                    if is_support_message(&message.body) {
                        linker.record_support(
                            member,
                            &message.body,
                            message.timestamp,
                            message.index,
                        );
                    }
                }
                None => unresolved += 1,
            }

            messages.push(message);
        }

        let (posts, support_events) = linker.finish();
        let summary = summarize(&messages, &posts, &support_events);

        debug!(
            messages = summary.total_messages,
            unresolved,
            posts = summary.total_posts,
            support = summary.total_support,
            "parsed chat export"
        );

        Ok(ParseResult {
            total_messages: messages.len(),
            messages,
            posts,
            support_events,
            summary,
        })
    }
}

/// Parses one export with the default configuration.
///
/// Shorthand for `ComplianceEngine::new().parse(chat_text, roster)`.
pub fn parse_chat(chat_text: &str, roster: &Roster) -> Result<ParseResult> {
    ComplianceEngine::new().parse(chat_text, roster)
}
