//! LinkedIn post URL extraction.
//!
//! Two permalink shapes are recognized, case-insensitively:
//!
//! - `https://www.linkedin.com/posts/<slug>` (also `/post/`)
//! - `https://linkedin.com/in/<profile>/activity/<id>`
//!
//! Slugs and ids are runs of `[A-Za-z0-9_-]`; query strings and fragments
//! are not part of the match.

use std::sync::LazyLock;

use regex::{Match, Regex};

/// `/posts/<token>` and `/post/<token>` permalinks.
const POST_PATTERN: &str = r"(?i)https?://(?:www\.)?linkedin\.com/posts?/[A-Za-z0-9_-]+";

/// `/in/<profile>/activity/<token>` permalinks.
const ACTIVITY_PATTERN: &str =
    r"(?i)https?://(?:www\.)?linkedin\.com/in/[A-Za-z0-9_-]+/activity/[A-Za-z0-9_-]+";

static URL_REGEXES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [POST_PATTERN, ACTIVITY_PATTERN]
        .map(|pattern| Regex::new(pattern).expect("LinkedIn URL pattern is a valid regex"))
});

/// Finds every LinkedIn post URL in a message body.
///
/// Matches come back in order of first appearance, duplicates included; a
/// body that shares the same link twice yields it twice.
///
/// # Example
///
/// ```
/// use linkpulse::classify::extract_linkedin_urls;
///
/// let urls = extract_linkedin_urls(
///     "New post! https://www.linkedin.com/posts/jane_ai-activity-123 please like",
/// );
/// assert_eq!(urls, vec!["https://www.linkedin.com/posts/jane_ai-activity-123"]);
/// ```
pub fn extract_linkedin_urls(body: &str) -> Vec<&str> {
    find_linkedin_urls(body).map(|m| m.as_str()).collect()
}

/// Same as [`extract_linkedin_urls`] but yields the regex matches, with
/// their byte offsets into `body`.
pub fn find_linkedin_urls(body: &str) -> impl Iterator<Item = Match<'_>> {
    let mut matches: Vec<Match<'_>> = URL_REGEXES
        .iter()
        .flat_map(|regex| regex.find_iter(body))
        .collect();

    // The shapes can't overlap (different path segment after the host), so
    // sorting by offset restores reading order
    matches.sort_by_key(Match::start);
    matches.into_iter()
}
