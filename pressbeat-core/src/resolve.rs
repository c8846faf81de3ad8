//! Action resolution for lifecycle events
//!
//! This is the decision core: given a post status transition or a comment
//! moderation status, decide which tracked action (if any) it maps to.
//! `None` always means "do not send" — the resolver has no error cases.
//!
//! Resolution is pure. The `separate_update_events` toggle is passed in
//! explicitly by the caller rather than read from any ambient option
//! store, so the same transition can be resolved differently by shells
//! with different configuration.

use std::collections::HashMap;

use crate::types::{CommentStatus, PostStatus};

/// A tracked action category.
///
/// The display label sent to the collector comes from [`ActionLabels`];
/// this enum is the stable internal key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventAction {
    /// A post went live for the first time
    PublishPost,
    /// An already-published post was republished
    UpdatePost,
    /// A comment was submitted (not spam)
    CommentSubmitted,
    /// A comment was auto-approved on submission
    CommentApproved,
}

impl EventAction {
    /// Stable key used in config overrides
    pub fn key(&self) -> &'static str {
        match self {
            EventAction::PublishPost => "publish_post",
            EventAction::UpdatePost => "update_post",
            EventAction::CommentSubmitted => "comment_submitted",
            EventAction::CommentApproved => "comment_approved",
        }
    }
}

/// Resolve the tracked action for a post status transition.
///
/// A transition maps to an action only when the new status is `publish`:
/// - already published + `separate_update_events` → [`EventAction::UpdatePost`]
/// - otherwise → [`EventAction::PublishPost`]
///
/// Every other transition resolves to `None`.
pub fn resolve_post_action(
    new_status: &PostStatus,
    old_status: &PostStatus,
    separate_update_events: bool,
) -> Option<EventAction> {
    if !new_status.is_publish() {
        return None;
    }

    let was_published = old_status.is_publish();

    if separate_update_events && was_published {
        Some(EventAction::UpdatePost)
    } else {
        Some(EventAction::PublishPost)
    }
}

/// Resolve the tracked action for a comment submission.
///
/// Spam resolves to `None`. A non-spam comment starts as
/// [`EventAction::CommentSubmitted`]; auto-approval overrides that with
/// [`EventAction::CommentApproved`].
pub fn resolve_comment_action(status: &CommentStatus) -> Option<EventAction> {
    if status.is_spam() {
        return None;
    }

    if status.is_approved() {
        Some(EventAction::CommentApproved)
    } else {
        Some(EventAction::CommentSubmitted)
    }
}

/// Display labels for tracked actions.
///
/// A plain mapping value: the defaults match the labels the collector
/// dashboards expect, and shells can override individual entries via
/// config or constructor injection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLabels {
    publish_post: String,
    update_post: String,
    comment_submitted: String,
    comment_approved: String,
}

impl Default for ActionLabels {
    fn default() -> Self {
        Self {
            publish_post: "Publish Post".to_string(),
            update_post: "Update Post".to_string(),
            comment_submitted: "Comment Submitted".to_string(),
            comment_approved: "Comment Approved".to_string(),
        }
    }
}

impl ActionLabels {
    /// Build a label table from the defaults plus per-action overrides.
    ///
    /// Override keys are the [`EventAction::key`] strings. Unknown keys are
    /// logged and ignored.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut labels = Self::default();

        for (key, value) in overrides {
            match key.as_str() {
                "publish_post" => labels.publish_post = value.clone(),
                "update_post" => labels.update_post = value.clone(),
                "comment_submitted" => labels.comment_submitted = value.clone(),
                "comment_approved" => labels.comment_approved = value.clone(),
                other => {
                    tracing::warn!(key = %other, "ignoring unknown action label override");
                }
            }
        }

        labels
    }

    /// The display label for an action
    pub fn label(&self, action: EventAction) -> &str {
        match action {
            EventAction::PublishPost => &self.publish_post,
            EventAction::UpdatePost => &self.update_post,
            EventAction::CommentSubmitted => &self.comment_submitted,
            EventAction::CommentApproved => &self.comment_approved,
        }
    }
}
