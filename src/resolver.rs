//! Sender-name resolution against the roster.
//!
//! Chat exports show whatever name the phone has saved for a contact
//! ("John", "john doe", "Johnny D"), so senders are matched loosely:
//!
//! 1. **Exact**: the case-folded, trimmed sender equals a roster name.
//! 2. **Containment**: in roster order, the first entry with a name token
//!    that appears inside the sender, or that contains the whole sender.
//!
//! The first success wins. When several entries could match by containment,
//! roster order decides; [`MemberResolver::rank`] exposes every candidate for
//! callers that want to review ambiguous names.
//!
//! # Example
//!
//! ```
//! use linkpulse::{Roster, RosterMember};
//! use linkpulse::resolver::{MatchKind, MemberResolver};
//!
//! let roster = Roster::new(vec![
//!     RosterMember::new(1, "John Doe"),
//!     RosterMember::new(2, "Jane Smith"),
//! ]);
//! let resolver = MemberResolver::new(&roster);
//!
//! let hit = resolver.resolve("JANE SMITH").unwrap();
//! assert_eq!((hit.member_id, hit.kind), (2, MatchKind::Exact));
//!
//! let hit = resolver.resolve("John").unwrap();
//! assert_eq!((hit.member_id, hit.kind), (1, MatchKind::Token));
//!
//! assert!(resolver.resolve("Mallory").is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::roster::Roster;

/// How a sender name matched its roster entry, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Full name equal after case folding.
    Exact,
    /// A roster name token equals a whole word of the sender.
    Token,
    /// Substring containment only (e.g. "jo" or "johnny" vs "John").
    Partial,
}

/// A successful resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub member_id: u64,
    pub kind: MatchKind,
}

/// Pre-normalized roster entry.
struct Candidate {
    member_id: u64,
    full: String,
    tokens: Vec<String>,
}

impl Candidate {
    /// Classifies `sender` (already normalized) against this entry.
    fn classify(&self, sender: &str) -> Option<MatchKind> {
        if self.full == sender {
            return Some(MatchKind::Exact);
        }

        let contained = self
            .tokens
            .iter()
            .any(|token| sender.contains(token.as_str()) || token.contains(sender));
        if !contained {
            return None;
        }

        let whole_word = sender
            .split_whitespace()
            .any(|word| self.tokens.iter().any(|token| token == word));
        Some(if whole_word {
            MatchKind::Token
        } else {
            MatchKind::Partial
        })
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Resolves sender names against one roster snapshot.
///
/// Construction normalizes the roster once; lookups are then linear in the
/// roster size.
pub struct MemberResolver {
    candidates: Vec<Candidate>,
}

impl MemberResolver {
    pub fn new(roster: &Roster) -> Self {
        let candidates = roster
            .iter()
            .map(|member| {
                let full = normalize(&member.name);
                let tokens = full.split_whitespace().map(str::to_string).collect();
                Candidate {
                    member_id: member.id,
                    full,
                    tokens,
                }
            })
            .collect();

        Self { candidates }
    }

    /// Resolves a sender name, or returns `None` if nobody matches.
    ///
    /// Exact matches anywhere in the roster beat containment matches, even
    /// when an earlier entry would match by containment.
    pub fn resolve(&self, sender: &str) -> Option<Resolution> {
        let sender = normalize(sender);
        if sender.is_empty() {
            return None;
        }

        if let Some(exact) = self.candidates.iter().find(|c| c.full == sender) {
            return Some(Resolution {
                member_id: exact.member_id,
                kind: MatchKind::Exact,
            });
        }

        self.candidates.iter().find_map(|c| {
            c.classify(&sender).map(|kind| Resolution {
                member_id: c.member_id,
                kind,
            })
        })
    }

    /// Returns every plausible roster entry for a sender, ordered by match
    /// quality (exact, token, partial) and then roster order.
    ///
    /// ```
    /// use linkpulse::{Roster, RosterMember};
    /// use linkpulse::resolver::{MatchKind, MemberResolver};
    ///
    /// let roster = Roster::new(vec![
    ///     RosterMember::new(1, "Johnny Cash"),
    ///     RosterMember::new(2, "John Doe"),
    /// ]);
    /// let ranked = MemberResolver::new(&roster).rank("john");
    ///
    /// // resolve() would pick Johnny (roster order); rank() shows John Doe is closer
    /// assert_eq!(ranked[0].member_id, 2);
    /// assert_eq!(ranked[0].kind, MatchKind::Token);
    /// assert_eq!(ranked[1].kind, MatchKind::Partial);
    /// ```
    pub fn rank(&self, sender: &str) -> Vec<Resolution> {
        let sender = normalize(sender);
        if sender.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<Resolution> = self
            .candidates
            .iter()
            .filter_map(|c| {
                c.classify(&sender).map(|kind| Resolution {
                    member_id: c.member_id,
                    kind,
                })
            })
            .collect();

        // Stable: ties keep roster order
        ranked.sort_by_key(|r| r.kind);
        ranked
    }
}
