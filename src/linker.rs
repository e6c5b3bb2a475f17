//! Windowed post/support linking.
//!
//! Chat exports carry no reply references, so a supportive message is
//! attributed by position alone: it links to the most recently shared post
//! among the previous [`WINDOW_SIZE`] messages. Messages with nothing in
//! range produce nothing; they are not held back for later posts.
//!
//! ```text
//! index  0  Alice: https://linkedin.com/posts/a      post A
//! index  1  Bob:   https://linkedin.com/posts/b      post B
//! index  2  Carol: 👍                                 -> B (latest in window)
//! index 60  Dave:  great!                            -> nothing (B is 59 back)
//! ```

use std::collections::VecDeque;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::{SelfSupportPolicy, WINDOW_SIZE};

/// A LinkedIn post shared in the chat.
///
/// One is created per URL occurrence: a message with two links makes two
/// posts at the same `message_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedInPost {
    pub author_member_id: u64,
    pub url: String,
    #[serde(default)]
    pub shared_at: Option<NaiveDateTime>,
    pub message_index: usize,
    /// Support events linked to this post, in link order.
    #[serde(default)]
    pub reactions: Vec<SupportEvent>,
}

/// A supportive reaction attributed to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportEvent {
    pub post_url: String,
    pub post_author_member_id: u64,
    pub post_message_index: usize,
    pub supporter_member_id: u64,
    /// The reacting message body, verbatim.
    pub reaction_type: String,
    #[serde(default)]
    pub reacted_at: Option<NaiveDateTime>,
    pub message_index: usize,
}

/// Natural key of a post for idempotent storage.
///
/// Re-uploading the same export yields the same keys, so a persistence
/// layer can upsert on it instead of double counting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostKey {
    pub author_member_id: u64,
    pub url: String,
    pub shared_at: Option<NaiveDateTime>,
}

/// Natural key of a support event for idempotent storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SupportKey {
    pub post: PostKey,
    pub supporter_member_id: u64,
    pub reacted_at: Option<NaiveDateTime>,
}

impl LinkedInPost {
    pub fn key(&self) -> PostKey {
        PostKey {
            author_member_id: self.author_member_id,
            url: self.url.clone(),
            shared_at: self.shared_at,
        }
    }

    pub fn reaction_count(&self) -> usize {
        self.reactions.len()
    }
}

impl SupportEvent {
    /// Key of the event. `post_shared_at` comes from the linked post, which
    /// the event doesn't carry itself.
    pub fn key(&self, post_shared_at: Option<NaiveDateTime>) -> SupportKey {
        SupportKey {
            post: PostKey {
                author_member_id: self.post_author_member_id,
                url: self.post_url.clone(),
                shared_at: post_shared_at,
            },
            supporter_member_id: self.supporter_member_id,
            reacted_at: self.reacted_at,
        }
    }

    /// Returns `true` if the supporter reacted to their own post.
    pub fn is_self_support(&self) -> bool {
        self.supporter_member_id == self.post_author_member_id
    }
}

/// Entry of the post log: position in `posts` and the sharing message.
#[derive(Debug, Clone, Copy)]
struct LogEntry {
    post: usize,
    message_index: usize,
}

/// Stateful linker for one parse.
///
/// Feed it messages in order: [`record_post`](Self::record_post) for every
/// URL of a resolved message, then
/// [`record_support`](Self::record_support) if the same message is
/// supportive. A message never supports its own posts.
///
/// # Example
///
/// ```
/// use linkpulse::linker::WindowedLinker;
/// use linkpulse::config::SelfSupportPolicy;
///
/// let mut linker = WindowedLinker::new(SelfSupportPolicy::Allow);
/// linker.record_post(7, "https://linkedin.com/posts/abc", None, 0);
/// assert!(linker.record_support(9, "👍", None, 1).is_some());
/// assert!(linker.record_support(9, "👍", None, 52).is_none());
///
/// let (posts, events) = linker.finish();
/// assert_eq!(posts[0].reactions.len(), 1);
/// assert_eq!(events.len(), 1);
/// ```
#[derive(Debug)]
pub struct WindowedLinker {
    policy: SelfSupportPolicy,
    posts: Vec<LinkedInPost>,
    events: Vec<SupportEvent>,
    log: VecDeque<LogEntry>,
}

impl WindowedLinker {
    pub fn new(policy: SelfSupportPolicy) -> Self {
        Self {
            policy,
            posts: Vec::new(),
            events: Vec::new(),
            log: VecDeque::new(),
        }
    }

    /// Drops log entries that can no longer be linked from `current` or any
    /// later message.
    fn expire(&mut self, current: usize) {
        while let Some(front) = self.log.front() {
            if current.saturating_sub(front.message_index) > WINDOW_SIZE {
                self.log.pop_front();
            } else {
                break;
            }
        }
    }

    /// Records a post shared by `author` at `message_index`.
    pub fn record_post(
        &mut self,
        author: u64,
        url: impl Into<String>,
        shared_at: Option<NaiveDateTime>,
        message_index: usize,
    ) -> &LinkedInPost {
        debug_assert!(
            self.log
                .back()
                .is_none_or(|last| last.message_index <= message_index),
            "messages must be fed in order"
        );
        self.expire(message_index);

        let post = self.posts.len();
        self.posts.push(LinkedInPost {
            author_member_id: author,
            url: url.into(),
            shared_at,
            message_index,
            reactions: Vec::new(),
        });
        self.log.push_back(LogEntry {
            post,
            message_index,
        });

        &self.posts[post]
    }

    /// Attributes a supportive message to the latest post in the window.
    ///
    /// Returns the created event, or `None` if no earlier post is within
    /// [`WINDOW_SIZE`] messages or the self-support policy drops it.
    pub fn record_support(
        &mut self,
        supporter: u64,
        reaction: &str,
        reacted_at: Option<NaiveDateTime>,
        message_index: usize,
    ) -> Option<&SupportEvent> {
        self.expire(message_index);

        let entry = self
            .log
            .iter()
            .rev()
            .find(|entry| entry.message_index < message_index)
            .copied()?;
        debug_assert!(message_index - entry.message_index <= WINDOW_SIZE);

        let post = &mut self.posts[entry.post];
        if self.policy == SelfSupportPolicy::Ignore && post.author_member_id == supporter {
            trace!(
                supporter,
                message_index,
                post_index = entry.message_index,
                "ignoring self-support"
            );
            return None;
        }

        let event = SupportEvent {
            post_url: post.url.clone(),
            post_author_member_id: post.author_member_id,
            post_message_index: post.message_index,
            supporter_member_id: supporter,
            reaction_type: reaction.to_string(),
            reacted_at,
            message_index,
        };
        trace!(
            supporter,
            author = post.author_member_id,
            message_index,
            post_index = post.message_index,
            "linked support to post"
        );

        post.reactions.push(event.clone());
        self.events.push(event);
        self.events.last()
    }

    /// Posts created so far.
    pub fn posts(&self) -> &[LinkedInPost] {
        &self.posts
    }

    /// Support events created so far, in link order.
    pub fn events(&self) -> &[SupportEvent] {
        &self.events
    }

    /// Consumes the linker and returns `(posts, support_events)`.
    pub fn finish(self) -> (Vec<LinkedInPost>, Vec<SupportEvent>) {
        (self.posts, self.events)
    }
}
