//! Result aggregation.
//!
//! Everything here is a pure function of the finished message, post and
//! support lists: no hidden state, and the results don't depend on list
//! order.
//!
//! - [`summarize`] - headline counts and the covered period
//! - [`member_stats`] - per-member compliance table

use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::linker::{LinkedInPost, SupportEvent};
use crate::message::ParsedMessage;
use crate::roster::Roster;

/// Headline counts for one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of header-matched messages.
    pub total_messages: usize,
    /// Distinct roster members who sent at least one message.
    pub total_members: usize,
    /// Distinct post authors.
    pub members_posted: usize,
    pub total_posts: usize,
    pub total_support: usize,
    /// Earliest known message timestamp.
    #[serde(default)]
    pub first_message_at: Option<NaiveDateTime>,
    /// Latest known message timestamp.
    #[serde(default)]
    pub last_message_at: Option<NaiveDateTime>,
}

impl Summary {
    /// The calendar dates the export covers, used as the default report
    /// period when the uploader doesn't name one.
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((
            self.first_message_at?.date(),
            self.last_message_at?.date(),
        ))
    }
}

/// Computes the [`Summary`] of a parse.
pub fn summarize(
    messages: &[ParsedMessage],
    posts: &[LinkedInPost],
    events: &[SupportEvent],
) -> Summary {
    let total_members = messages
        .iter()
        .filter_map(|m| m.resolved_member_id)
        .collect::<HashSet<_>>()
        .len();
    let members_posted = posts
        .iter()
        .map(|p| p.author_member_id)
        .collect::<HashSet<_>>()
        .len();

    // Min/max rather than first/last: exports are not guaranteed to be in
    // timestamp order
    let timestamps = messages.iter().filter_map(|m| m.timestamp);

    Summary {
        total_messages: messages.len(),
        total_members,
        members_posted,
        total_posts: posts.len(),
        total_support: events.len(),
        first_message_at: timestamps.clone().min(),
        last_message_at: timestamps.max(),
    }
}

/// Compliance standing of a member for one export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// Shared at least one post.
    Compliant,
    /// Didn't post, but supported others.
    Partial,
    /// Neither posted nor supported.
    NonCompliant,
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceStatus::Compliant => write!(f, "compliant"),
            ComplianceStatus::Partial => write!(f, "partial"),
            ComplianceStatus::NonCompliant => write!(f, "non-compliant"),
        }
    }
}

/// One row of the member compliance table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStats {
    pub member_id: u64,
    pub name: String,
    pub posts_count: usize,
    pub support_given: usize,
    pub support_received: usize,
    pub status: ComplianceStatus,
}

#[derive(Default)]
struct Tally {
    posts: usize,
    given: usize,
    received: usize,
}

/// Builds the compliance table: one row per roster member, including those
/// who never appeared in the chat.
///
/// Rows are ordered by posts (desc), then support given (desc), then roster
/// order.
///
/// # Example
///
/// ```
/// use linkpulse::{Roster, RosterMember, parse_chat};
/// use linkpulse::summary::{ComplianceStatus, member_stats};
///
/// let roster = Roster::new(vec![
///     RosterMember::new(1, "Alice"),
///     RosterMember::new(2, "Bob"),
///     RosterMember::new(3, "Carol"),
/// ]);
/// let chat = "\
/// 1/15/24, 10:30 - Alice: https://linkedin.com/posts/abc
/// 1/15/24, 10:31 - Bob: 👍";
///
/// let result = parse_chat(chat, &roster)?;
/// let table = member_stats(&roster, &result.posts, &result.support_events);
///
/// assert_eq!(table[0].status, ComplianceStatus::Compliant);
/// assert_eq!(table[0].support_received, 1);
/// assert_eq!(table[1].status, ComplianceStatus::Partial);
/// assert_eq!(table[2].status, ComplianceStatus::NonCompliant);
/// # Ok::<(), linkpulse::LinkpulseError>(())
/// ```
pub fn member_stats(
    roster: &Roster,
    posts: &[LinkedInPost],
    events: &[SupportEvent],
) -> Vec<MemberStats> {
    let mut tallies: HashMap<u64, Tally> = HashMap::new();

    for post in posts {
        tallies.entry(post.author_member_id).or_default().posts += 1;
    }
    for event in events {
        tallies.entry(event.supporter_member_id).or_default().given += 1;
        tallies.entry(event.post_author_member_id).or_default().received += 1;
    }

    let mut rows: Vec<MemberStats> = roster
        .iter()
        .map(|member| {
            let tally = tallies.remove(&member.id).unwrap_or_default();
            let status = if tally.posts > 0 {
                ComplianceStatus::Compliant
            } else if tally.given > 0 {
                ComplianceStatus::Partial
            } else {
                ComplianceStatus::NonCompliant
            };

            MemberStats {
                member_id: member.id,
                name: member.name.clone(),
                posts_count: tally.posts,
                support_given: tally.given,
                support_received: tally.received,
                status,
            }
        })
        .collect();

    // Stable: ties keep roster order
    rows.sort_by(|a, b| {
        b.posts_count
            .cmp(&a.posts_count)
            .then(b.support_given.cmp(&a.support_given))
    });
    rows
}

/// Number of members with [`ComplianceStatus::Compliant`].
pub fn compliant_members(stats: &[MemberStats]) -> usize {
    stats
        .iter()
        .filter(|s| s.status == ComplianceStatus::Compliant)
        .count()
}
