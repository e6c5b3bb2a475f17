//! Supportive-reaction heuristic.
//!
//! A message counts as support when, after trimming, it is
//!
//! - made only of reaction symbols (`👍`, `🔥🔥`, `❤️`), or
//! - starts with an affirming keyword (`great post!`, `Congrats Jane`).
//!
//! This is a fixed pattern set, not sentiment analysis. Keywords match as
//! plain prefixes: "good morning" counts, "so good" does not.

/// Characters a symbol-only reaction may consist of.
///
/// `❤️` is two code points (U+2764 and the U+FE0F variation selector); both
/// are listed so the emoji form and the bare text heart are accepted.
pub const SUPPORT_SYMBOLS: &[char] = &[
    '👍', '❤', '\u{fe0f}', '🔥', '💡', '👏', '🙌', '✨', '🎉', '💪', '🚀', '👌', '💯', '⭐',
];

/// Lowercase prefixes that mark a text reaction as supportive.
pub const SUPPORT_KEYWORDS: &[&str] = &[
    "nice",
    "great",
    "awesome",
    "good",
    "excellent",
    "amazing",
    "fantastic",
    "love it",
    "congrats",
    "well done",
];

/// Returns `true` if the body consists solely of reaction symbols.
pub fn is_symbol_reaction(body: &str) -> bool {
    let trimmed = body.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| SUPPORT_SYMBOLS.contains(&c))
}

/// Returns `true` if the body starts with a supportive keyword.
pub fn is_keyword_reaction(body: &str) -> bool {
    let lowered = body.trim().to_lowercase();
    SUPPORT_KEYWORDS
        .iter()
        .any(|keyword| lowered.starts_with(keyword))
}

/// Classifies a message body as a supportive reaction.
///
/// # Example
///
/// ```
/// use linkpulse::classify::is_support_message;
///
/// assert!(is_support_message("👍"));
/// assert!(is_support_message("  🔥🔥🚀 "));
/// assert!(is_support_message("Great post, Jane!"));
/// assert!(!is_support_message("👍 nice"));
/// assert!(!is_support_message("Not bad"));
/// ```
pub fn is_support_message(body: &str) -> bool {
    is_symbol_reaction(body) || is_keyword_reaction(body)
}
