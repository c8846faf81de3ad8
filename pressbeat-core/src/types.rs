//! Core domain types for pressbeat
//!
//! These types model the slice of the host CMS's lifecycle vocabulary that
//! tracking cares about: post status transitions and comment moderation
//! states. Everything here is ephemeral — values are constructed for a
//! single callback invocation and discarded once the tracking decision has
//! been made.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Post** | A content item in the host CMS (article, page) |
//! | **Transition** | A post moving from one status to another |
//! | **Comment** | A visitor comment attached to a post |
//! | **Lifecycle event** | The wire form of either, as emitted by the host |

use serde::{Deserialize, Serialize};

// ============================================
// Post statuses
// ============================================

/// Publication status of a post.
///
/// The host CMS has an open-ended status vocabulary (custom statuses are
/// common), so anything we don't recognize lands in [`PostStatus::Other`].
/// Only equality with [`PostStatus::Publish`] carries meaning for tracking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PostStatus {
    /// Publicly visible
    Publish,
    /// Saved but not published
    Draft,
    /// Awaiting editorial review
    Pending,
    /// Visible to privileged readers only
    Private,
    /// Scheduled for future publication
    Future,
    /// Moved to the trash
    Trash,
    /// Any status we don't model explicitly
    Other(String),
}

impl PostStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PostStatus::Publish => "publish",
            PostStatus::Draft => "draft",
            PostStatus::Pending => "pending",
            PostStatus::Private => "private",
            PostStatus::Future => "future",
            PostStatus::Trash => "trash",
            PostStatus::Other(s) => s,
        }
    }

    /// Whether this status means the post is publicly published
    pub fn is_publish(&self) -> bool {
        matches!(self, PostStatus::Publish)
    }
}

impl From<&str> for PostStatus {
    fn from(s: &str) -> Self {
        match s {
            "publish" => PostStatus::Publish,
            "draft" => PostStatus::Draft,
            "pending" => PostStatus::Pending,
            "private" => PostStatus::Private,
            "future" => PostStatus::Future,
            "trash" => PostStatus::Trash,
            other => PostStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for PostStatus {
    fn from(s: String) -> Self {
        PostStatus::from(s.as_str())
    }
}

impl From<PostStatus> for String {
    fn from(status: PostStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A post moving from one status to another.
///
/// Constructed per callback invocation and discarded immediately after the
/// tracking decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTransition {
    /// The newly set status
    pub new_status: PostStatus,
    /// The status the post had before
    pub old_status: PostStatus,
}

// ============================================
// Comment statuses
// ============================================

/// Moderation status of a freshly submitted comment.
///
/// The host reports this as `1` (auto-approved), `0` (held for
/// moderation), or the string `"spam"`. Custom moderation plugins can emit
/// other strings; those land in [`CommentStatus::Other`] and count as
/// submitted-but-not-approved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "CommentStatusRepr", into = "String")]
pub enum CommentStatus {
    /// Auto-approved on submission
    Approved,
    /// Held in the moderation queue
    Held,
    /// Flagged as spam
    Spam,
    /// Any other moderation state
    Other(String),
}

impl CommentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CommentStatus::Approved => "1",
            CommentStatus::Held => "0",
            CommentStatus::Spam => "spam",
            CommentStatus::Other(s) => s,
        }
    }

    pub fn is_spam(&self) -> bool {
        matches!(self, CommentStatus::Spam)
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, CommentStatus::Approved)
    }
}

/// Wire form of a comment status: the host sends either an integer or a
/// string depending on the moderation outcome.
#[derive(Deserialize)]
#[serde(untagged)]
enum CommentStatusRepr {
    Int(i64),
    Text(String),
}

impl From<CommentStatusRepr> for CommentStatus {
    fn from(repr: CommentStatusRepr) -> Self {
        match repr {
            CommentStatusRepr::Int(1) => CommentStatus::Approved,
            CommentStatusRepr::Int(0) => CommentStatus::Held,
            CommentStatusRepr::Int(n) => CommentStatus::Other(n.to_string()),
            CommentStatusRepr::Text(s) => CommentStatus::from(s.as_str()),
        }
    }
}

impl From<&str> for CommentStatus {
    fn from(s: &str) -> Self {
        match s {
            "1" => CommentStatus::Approved,
            "0" => CommentStatus::Held,
            "spam" => CommentStatus::Spam,
            other => CommentStatus::Other(other.to_string()),
        }
    }
}

impl From<CommentStatus> for String {
    fn from(status: CommentStatus) -> Self {
        status.as_str().to_string()
    }
}

/// A comment submission as seen by the tracking core
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEvent {
    /// The host's comment id
    pub comment_id: u64,
    /// Moderation status assigned on submission
    pub status: CommentStatus,
}

// ============================================
// Lifecycle events (wire form)
// ============================================

/// A content lifecycle event as emitted by the host CMS.
///
/// This is the JSON wire form the relay consumes, one event per line.
/// Titles ride along with the event because tracking labels events with
/// the subject's title and never calls back into the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// A post changed status (covers first publish and republish)
    PostStatusChanged {
        post_id: u64,
        post_title: String,
        new_status: PostStatus,
        old_status: PostStatus,
    },
    /// A comment was submitted to a post
    CommentPosted {
        comment_id: u64,
        post_title: String,
        status: CommentStatus,
    },
}

impl LifecycleEvent {
    /// Title of the post this event relates to
    pub fn post_title(&self) -> &str {
        match self {
            LifecycleEvent::PostStatusChanged { post_title, .. } => post_title,
            LifecycleEvent::CommentPosted { post_title, .. } => post_title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_status_from_str() {
        assert_eq!(PostStatus::from("publish"), PostStatus::Publish);
        assert_eq!(PostStatus::from("draft"), PostStatus::Draft);
        assert_eq!(
            PostStatus::from("portfolio-live"),
            PostStatus::Other("portfolio-live".to_string())
        );
        assert!(PostStatus::from("publish").is_publish());
        assert!(!PostStatus::from("pending").is_publish());
    }

    #[test]
    fn test_comment_status_from_str() {
        assert_eq!(CommentStatus::from("1"), CommentStatus::Approved);
        assert_eq!(CommentStatus::from("0"), CommentStatus::Held);
        assert_eq!(CommentStatus::from("spam"), CommentStatus::Spam);
        assert_eq!(
            CommentStatus::from("trash"),
            CommentStatus::Other("trash".to_string())
        );
    }

    #[test]
    fn test_comment_status_from_integer_json() {
        // The host sends 1/0 as bare integers
        let approved: CommentStatus = serde_json::from_str("1").unwrap();
        let held: CommentStatus = serde_json::from_str("0").unwrap();
        let spam: CommentStatus = serde_json::from_str("\"spam\"").unwrap();

        assert_eq!(approved, CommentStatus::Approved);
        assert_eq!(held, CommentStatus::Held);
        assert_eq!(spam, CommentStatus::Spam);
    }

    #[test]
    fn test_lifecycle_event_wire_format() {
        let line = r#"{
            "event": "post_status_changed",
            "post_id": 42,
            "post_title": "Hello World",
            "new_status": "publish",
            "old_status": "draft"
        }"#;
        let event: LifecycleEvent = serde_json::from_str(line).unwrap();

        match &event {
            LifecycleEvent::PostStatusChanged {
                post_id,
                new_status,
                old_status,
                ..
            } => {
                assert_eq!(*post_id, 42);
                assert_eq!(*new_status, PostStatus::Publish);
                assert_eq!(*old_status, PostStatus::Draft);
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(event.post_title(), "Hello World");
    }

    #[test]
    fn test_comment_event_wire_format() {
        let line = r#"{"event":"comment_posted","comment_id":7,"post_title":"Hello","status":1}"#;
        let event: LifecycleEvent = serde_json::from_str(line).unwrap();

        match event {
            LifecycleEvent::CommentPosted {
                comment_id, status, ..
            } => {
                assert_eq!(comment_id, 7);
                assert_eq!(status, CommentStatus::Approved);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_post_status_roundtrip() {
        let status = PostStatus::Other("portfolio-live".to_string());
        let json = serde_json::to_string(&status).unwrap();
        let back: PostStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(status, back);
    }
}
