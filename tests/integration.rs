//! Integration tests for the full parse pipeline with realistic exports.

use linkpulse::prelude::*;
use linkpulse::summary::compliant_members;
use std::fs;
use std::path::Path;
use std::sync::Once;

static INIT: Once = Once::new();

fn fixtures_dir() -> &'static str {
    "tests/fixtures"
}

const POST_URL: &str = "https://linkedin.com/posts/abc123";

/// A week of group chat: system noise, multiline posts, reactions from
/// members saved under short names, and an outsider.
const WEEK_CHAT: &str = "\
Messages and calls are end-to-end encrypted. No one outside of this chat can read them.
1/15/24, 9:00 AM - Group Admin: Reminder: share your post by Friday
1/15/24, 10:30 AM - John Doe: New post about Rust!
https://www.linkedin.com/posts/johndoe_rust-activity-111
Would love feedback

1/15/24, 10:35 AM - Jane Smith: 👍
1/15/24, 10:40 AM - bob: Great read John
1/16/24, 8:15 AM - Jane: https://linkedin.com/in/jane-smith/activity/7150000000000000000
1/16/24, 8:20 AM - John Doe: 🔥🔥
1/16/24, 8:21 AM - Outsider: 👍
1/17/24, 18:02 - Bob Brown: sorry, busy week
";

fn week_roster() -> Roster {
    Roster::new(vec![
        RosterMember::new(1, "John Doe"),
        RosterMember::new(2, "Jane Smith"),
        RosterMember::new(3, "Bob Brown"),
        RosterMember::new(4, "Carol White"),
    ])
}

fn ensure_fixtures() {
    INIT.call_once(|| {
        let dir = fixtures_dir();
        if !Path::new(dir).exists() {
            fs::create_dir_all(dir).unwrap();
        }

        fs::write(format!("{dir}/week_chat.txt"), WEEK_CHAT).unwrap();

        let roster_json = r#"[
  {"id": 1, "name": "John Doe", "email": "john@example.com"},
  {"id": 2, "name": "Jane Smith"},
  {"id": 3, "name": "Bob Brown"},
  {"id": 4, "name": "Carol White"}
]"#;
        fs::write(format!("{dir}/roster.json"), roster_json).unwrap();

        let roster_csv = "id,name\n1,John Doe\n2,Jane Smith\n3,Bob Brown\n4,Carol White\n";
        fs::write(format!("{dir}/roster.csv"), roster_csv).unwrap();
    });
}

fn pair_roster() -> Roster {
    Roster::new(vec![
        RosterMember::new(7, "John Doe"),
        RosterMember::new(9, "Jane Smith"),
    ])
}

/// `count` filler messages from a non-member, one per minute from 11:00.
fn filler(count: usize) -> String {
    (0..count)
        .map(|i| format!("1/15/24, {}:{:02} - Someone Else: chatter {i}\n", 11 + i / 60, i % 60))
        .collect()
}

// =========================================================================
// Core scenarios
// =========================================================================

#[test]
fn test_post_is_created_for_resolved_sender() {
    let chat = format!("1/15/24, 10:30 AM - John Doe: Check this out {POST_URL}");
    let roster = Roster::new(vec![RosterMember::new(7, "John Doe")]);

    let result = parse_chat(&chat, &roster).unwrap();

    assert_eq!(result.posts.len(), 1);
    assert_eq!(result.posts[0].author_member_id, 7);
    assert_eq!(result.posts[0].url, POST_URL);
    assert_eq!(
        result.posts[0].shared_at.unwrap().to_string(),
        "2024-01-15 10:30:00"
    );
}

#[test]
fn test_support_within_window() {
    let chat = format!(
        "1/15/24, 10:30 AM - John Doe: Check this out {POST_URL}\n\
         1/15/24, 10:35 AM - Jane Smith: 👍"
    );

    let result = parse_chat(&chat, &pair_roster()).unwrap();

    assert_eq!(result.support_events.len(), 1);
    let event = &result.support_events[0];
    assert_eq!(event.post_author_member_id, 7);
    assert_eq!(event.supporter_member_id, 9);
    assert_eq!(event.reaction_type, "👍");
    assert_eq!(result.posts[0].reactions.len(), 1);
}

#[test]
fn test_support_outside_window() {
    // Post at index 0, 59 filler messages, reaction at index 60
    let chat = format!(
        "1/15/24, 10:30 AM - John Doe: Check this out {POST_URL}\n{}\
         1/15/24, 12:00 PM - Jane Smith: 👍",
        filler(59)
    );

    let result = parse_chat(&chat, &pair_roster()).unwrap();

    assert_eq!(result.total_messages, 61);
    assert!(result.support_events.is_empty());
    assert!(result.posts[0].reactions.is_empty());
}

#[test]
fn test_window_edge_is_inclusive() {
    // Reaction exactly 50 messages after the post still links
    let chat = format!(
        "1/15/24, 10:30 AM - John Doe: {POST_URL}\n{}\
         1/15/24, 12:00 PM - Jane Smith: 👍",
        filler(49)
    );

    let result = parse_chat(&chat, &pair_roster()).unwrap();

    assert_eq!(result.support_events.len(), 1);
    assert_eq!(result.support_events[0].message_index, 50);
}

#[test]
fn test_unresolved_sender_creates_no_post() {
    let chat = format!("1/15/24, 10:30 AM - Mallory Mystery: look {POST_URL}");

    let result = parse_chat(&chat, &pair_roster()).unwrap();

    assert_eq!(result.total_messages, 1);
    assert!(result.posts.is_empty());
    assert_eq!(result.summary.total_members, 0);
}

// =========================================================================
// Realistic export
// =========================================================================

#[test]
fn test_week_export() {
    let roster = week_roster();
    let result = parse_chat(WEEK_CHAT, &roster).unwrap();

    assert_eq!(result.total_messages, 8);
    assert_eq!(result.messages[0].sender, "Group Admin");
    assert_eq!(result.messages[0].resolved_member_id, None);

    // Multiline post body, blank line dropped
    assert_eq!(
        result.messages[1].body,
        "New post about Rust!\nhttps://www.linkedin.com/posts/johndoe_rust-activity-111\nWould love feedback"
    );

    assert_eq!(result.posts.len(), 2);
    assert_eq!(result.posts[0].author_member_id, 1);
    assert_eq!(result.posts[1].author_member_id, 2);

    // Jane 👍 and bob "Great read" on John's post; John 🔥 on Jane's
    assert_eq!(result.posts[0].reaction_count(), 2);
    assert_eq!(result.posts[1].reaction_count(), 1);
    assert_eq!(result.posts[1].reactions[0].supporter_member_id, 1);

    let summary = &result.summary;
    assert_eq!(summary.total_members, 3);
    assert_eq!(summary.members_posted, 2);
    assert_eq!(summary.total_posts, 2);
    assert_eq!(summary.total_support, 3);

    let (start, end) = summary.period().unwrap();
    assert_eq!(start.to_string(), "2024-01-15");
    assert_eq!(end.to_string(), "2024-01-17");
}

#[test]
fn test_week_member_table() {
    let roster = week_roster();
    let result = parse_chat(WEEK_CHAT, &roster).unwrap();
    let table = result.member_stats(&roster);

    let rows: Vec<(u64, ComplianceStatus)> =
        table.iter().map(|r| (r.member_id, r.status)).collect();
    assert_eq!(
        rows,
        vec![
            (1, ComplianceStatus::Compliant),
            (2, ComplianceStatus::Compliant),
            (3, ComplianceStatus::Partial),
            (4, ComplianceStatus::NonCompliant),
        ]
    );
    assert_eq!(table[0].support_received, 2);
    assert_eq!(compliant_members(&table), 2);
}

#[test]
fn test_roster_files_load_identically() {
    ensure_fixtures();
    let dir = fixtures_dir();

    let from_json = Roster::load(Path::new(&format!("{dir}/roster.json"))).unwrap();
    let from_csv = Roster::load(Path::new(&format!("{dir}/roster.csv"))).unwrap();
    assert_eq!(from_json, from_csv);
    assert_eq!(from_json, week_roster());

    let chat = fs::read_to_string(format!("{dir}/week_chat.txt")).unwrap();
    let result = parse_chat(&chat, &from_json).unwrap();
    assert_eq!(result, parse_chat(WEEK_CHAT, &week_roster()).unwrap());
}

// =========================================================================
// Linking rules
// =========================================================================

#[test]
fn test_links_only_to_most_recent_post() {
    let chat = "\
1/15/24, 10:00 - John Doe: https://linkedin.com/posts/first
1/15/24, 10:01 - Jane Smith: https://linkedin.com/posts/second
1/15/24, 10:02 - John Doe: https://linkedin.com/posts/third
1/15/24, 10:03 - Jane Smith: nice one";

    let result = parse_chat(chat, &pair_roster()).unwrap();

    assert_eq!(result.support_events.len(), 1);
    assert_eq!(result.support_events[0].post_url, "https://linkedin.com/posts/third");
    assert_eq!(result.support_events[0].post_message_index, 2);
    assert_eq!(
        result.posts.iter().map(LinkedInPost::reaction_count).collect::<Vec<_>>(),
        vec![0, 0, 1]
    );
}

#[test]
fn test_two_urls_make_two_posts() {
    let chat = "1/15/24, 10:00 - John Doe: https://linkedin.com/posts/a and https://linkedin.com/posts/a";

    let result = parse_chat(chat, &pair_roster()).unwrap();

    assert_eq!(result.posts.len(), 2);
    assert!(result.posts.iter().all(|p| p.message_index == 0));
    assert_eq!(result.summary.members_posted, 1);
}

#[test]
fn test_supportive_post_does_not_support_itself() {
    let chat = "\
1/15/24, 10:00 - John Doe: https://linkedin.com/posts/a
1/15/24, 10:01 - Jane Smith: Great post! Mine: https://linkedin.com/posts/b";

    let result = parse_chat(chat, &pair_roster()).unwrap();

    assert_eq!(result.posts.len(), 2);
    assert_eq!(result.support_events.len(), 1);
    assert_eq!(result.support_events[0].post_url, "https://linkedin.com/posts/a");
}

#[test]
fn test_reaction_before_any_post_is_not_retried() {
    let chat = "\
1/15/24, 10:00 - Jane Smith: 👍
1/15/24, 10:01 - John Doe: https://linkedin.com/posts/a";

    let result = parse_chat(chat, &pair_roster()).unwrap();

    assert_eq!(result.posts.len(), 1);
    assert!(result.support_events.is_empty());
}

#[test]
fn test_self_support_policy_switch() {
    let chat = "\
1/15/24, 10:00 - John Doe: https://linkedin.com/posts/a
1/15/24, 10:01 - John Doe: Great to see the traction";

    let allowed = parse_chat(chat, &pair_roster()).unwrap();
    assert_eq!(allowed.summary.total_support, 1);

    let engine = ComplianceEngine::with_config(
        EngineConfig::new().with_self_support(SelfSupportPolicy::Ignore),
    );
    let ignored = engine.parse(chat, &pair_roster()).unwrap();
    assert_eq!(ignored.summary.total_support, 0);
    assert_eq!(ignored.posts, {
        let mut posts = allowed.posts.clone();
        posts[0].reactions.clear();
        posts
    });
}

// =========================================================================
// Resolution
// =========================================================================

#[test]
fn test_exact_match_beats_earlier_partial() {
    let roster = Roster::new(vec![
        RosterMember::new(1, "Anna Lee"),
        RosterMember::new(2, "Ann"),
    ]);
    let chat = "1/15/24, 10:00 - ann: https://linkedin.com/posts/a";

    let result = parse_chat(chat, &roster).unwrap();

    assert_eq!(result.messages[0].resolved_member_id, Some(2));
    assert_eq!(result.messages[0].match_kind, Some(MatchKind::Exact));
    assert_eq!(result.posts[0].author_member_id, 2);
}

#[test]
fn test_roster_order_breaks_containment_ties() {
    let roster = Roster::new(vec![
        RosterMember::new(1, "Sam Green"),
        RosterMember::new(2, "Sam Blue"),
    ]);
    let chat = "1/15/24, 10:00 - Sam: hi";

    let result = parse_chat(chat, &roster).unwrap();
    assert_eq!(result.messages[0].resolved_member_id, Some(1));
}

// =========================================================================
// Contract
// =========================================================================

#[test]
fn test_parse_is_idempotent() {
    let roster = week_roster();
    let first = parse_chat(WEEK_CHAT, &roster).unwrap();
    let second = parse_chat(WEEK_CHAT, &roster).unwrap();

    assert_eq!(first, second);

    let first_keys: Vec<_> = first.posts.iter().map(LinkedInPost::key).collect();
    let second_keys: Vec<_> = second.posts.iter().map(LinkedInPost::key).collect();
    assert_eq!(first_keys, second_keys);
}

#[test]
fn test_invalid_roster_is_rejected() {
    let duplicate = Roster::new(vec![
        RosterMember::new(1, "John Doe"),
        RosterMember::new(1, "Jane Smith"),
    ]);
    let err = parse_chat(WEEK_CHAT, &duplicate).unwrap_err();
    assert!(err.is_invalid_input());

    let blank = Roster::new(vec![RosterMember::new(1, "   ")]);
    assert!(parse_chat(WEEK_CHAT, &blank).unwrap_err().is_invalid_input());
}

#[test]
fn test_malformed_roster_json_is_invalid_input() {
    let err = Roster::from_json_str(r#"{"id": 1, "name": "not a list"}"#).unwrap_err();
    assert!(err.is_invalid_input());

    let err = Roster::from_json_str(r#"[{"id": "one", "name": "Alice"}]"#).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_result_serializes() {
    let result = parse_chat(WEEK_CHAT, &week_roster()).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let back: ParseResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
