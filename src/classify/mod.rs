//! Per-message classification.
//!
//! Every message is checked on two independent channels:
//!
//! - [`urls`] - does the body share LinkedIn posts? Each URL is a post.
//! - [`support`] - is the body a supportive reaction ("👍", "great post")?
//!
//! A message may be both, either or neither.

pub mod support;
pub mod urls;

pub use support::{SUPPORT_KEYWORDS, SUPPORT_SYMBOLS, is_support_message};
pub use urls::{extract_linkedin_urls, find_linkedin_urls};
