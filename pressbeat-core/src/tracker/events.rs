//! Tracking event construction
//!
//! Converts resolved lifecycle events into the [`TrackingEvent`] value
//! sent to the collector. Construction is the pure half of dispatch: a
//! `None` here is the single point where unmapped events get suppressed.

use serde::Serialize;

use crate::resolve::{resolve_comment_action, resolve_post_action, ActionLabels};
use crate::types::{CommentEvent, LifecycleEvent, PostTransition};

/// A single analytics event, ready to send.
///
/// Immutable value: constructed once per tracked lifecycle event and sent
/// exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingEvent {
    /// Action label (e.g., "Publish Post")
    pub action: String,
    /// Event label: the title of the subject post
    pub label: String,
}

impl TrackingEvent {
    pub fn new(action: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            label: label.into(),
        }
    }

    /// Plan the tracking event for a post status transition.
    ///
    /// Returns `None` when the transition maps to no tracked action, which
    /// the caller must treat as "do not send".
    pub fn from_post_transition(
        transition: &PostTransition,
        post_title: &str,
        labels: &ActionLabels,
        separate_update_events: bool,
    ) -> Option<Self> {
        let action = resolve_post_action(
            &transition.new_status,
            &transition.old_status,
            separate_update_events,
        )?;

        Some(Self::new(labels.label(action), post_title))
    }

    /// Plan the tracking event for a comment submission.
    ///
    /// Returns `None` for spam.
    pub fn from_comment(
        comment: &CommentEvent,
        post_title: &str,
        labels: &ActionLabels,
    ) -> Option<Self> {
        let action = resolve_comment_action(&comment.status)?;

        Some(Self::new(labels.label(action), post_title))
    }

    /// Plan the tracking event for a wire-form lifecycle event
    pub fn from_lifecycle(
        event: &LifecycleEvent,
        labels: &ActionLabels,
        separate_update_events: bool,
    ) -> Option<Self> {
        match event {
            LifecycleEvent::PostStatusChanged {
                post_title,
                new_status,
                old_status,
                ..
            } => {
                let transition = PostTransition {
                    new_status: new_status.clone(),
                    old_status: old_status.clone(),
                };
                Self::from_post_transition(&transition, post_title, labels, separate_update_events)
            }
            LifecycleEvent::CommentPosted {
                comment_id,
                post_title,
                status,
            } => {
                let comment = CommentEvent {
                    comment_id: *comment_id,
                    status: status.clone(),
                };
                Self::from_comment(&comment, post_title, labels)
            }
        }
    }
}
