//! Export text parsing.
//!
//! - [`tokenizer`] - splits raw export text into [`ParsedMessage`](crate::ParsedMessage)s
//! - [`timestamp`] - turns the header's date and time fields into a
//!   [`NaiveDateTime`](chrono::NaiveDateTime)
//!
//! Both are line-oriented and allocation-light; the engine drives them in a
//! single pass.

pub mod timestamp;
pub mod tokenizer;

pub use timestamp::{expand_year, normalize_timestamp};
pub use tokenizer::{HEADER_PATTERN, HeaderLine, LineTokenizer, is_header_line};
