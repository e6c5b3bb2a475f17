//! # Linkpulse
//!
//! A Rust library for tracking LinkedIn-posting compliance in WhatsApp group
//! chats.
//!
//! ## Overview
//!
//! Members of a group are expected to share their LinkedIn posts in the chat
//! and to support each other's posts with a reaction ("👍", "great post!").
//! Given a plain-text WhatsApp export and a roster of members, linkpulse
//! reports:
//!
//! - who shared which post, and when
//! - which reactions supported which post
//! - headline counts and a per-member compliance table
//!
//! WhatsApp TXT exports carry no reply structure, so a reaction is attributed
//! to the most recent post among the previous
//! [`WINDOW_SIZE`](config::WINDOW_SIZE) messages.
//!
//! ## Quick Start
//!
//! ```rust
//! use linkpulse::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let roster = Roster::new(vec![
//!         RosterMember::new(7, "John Doe"),
//!         RosterMember::new(9, "Jane Smith"),
//!     ]);
//!     let chat = "\
//! 1/15/24, 10:30 AM - John Doe: Check this out https://linkedin.com/posts/abc123
//! 1/15/24, 10:35 AM - Jane Smith: 👍";
//!
//!     let result = parse_chat(chat, &roster)?;
//!
//!     assert_eq!(result.summary.total_posts, 1);
//!     assert_eq!(result.summary.total_support, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`engine`] - [`ComplianceEngine`], [`parse_chat`], [`ParseResult`]
//! - [`parsing`] - line tokenizer and timestamp normalization
//! - [`resolver`] - sender-name resolution against the [`Roster`]
//! - [`classify`] - LinkedIn URL extraction and support classification
//! - [`linker`] - windowed post/support linking
//! - [`summary`] - headline counts and the member compliance table
//! - [`output`] - CSV / JSON / JSONL report writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and dispatch
//! - [`config`] - [`EngineConfig`](config::EngineConfig)
//! - [`error`] - unified error types ([`LinkpulseError`], [`Result`])
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod linker;
pub mod message;
pub mod output;
pub mod parsing;
pub mod resolver;
pub mod roster;
pub mod summary;

// Re-export the main types at the crate root for convenience
pub use engine::{ComplianceEngine, ParseResult, parse_chat};
pub use error::{LinkpulseError, Result};
pub use linker::{LinkedInPost, SupportEvent};
pub use message::ParsedMessage;
pub use roster::{Roster, RosterMember};
pub use summary::Summary;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use linkpulse::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::engine::{ComplianceEngine, ParseResult, parse_chat};

    // Inputs
    pub use crate::config::{EngineConfig, SelfSupportPolicy};
    pub use crate::roster::{Roster, RosterMember};

    // Results
    pub use crate::linker::{LinkedInPost, SupportEvent};
    pub use crate::message::ParsedMessage;
    pub use crate::resolver::MatchKind;
    pub use crate::summary::{ComplianceStatus, MemberStats, Summary};

    // Error types
    pub use crate::error::{LinkpulseError, Result};

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
