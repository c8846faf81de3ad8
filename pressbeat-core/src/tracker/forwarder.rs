//! Forwarder tying resolution to dispatch
//!
//! The [`Forwarder`] is what an application shell hands lifecycle events
//! to. It plans a tracking event (pure), then fires the collect request
//! and swallows any failure: analytics must never disturb the host's own
//! event handling.

use crate::config::Config;
use crate::error::Result;
use crate::resolve::ActionLabels;
use crate::types::{CommentEvent, LifecycleEvent, PostTransition};

use super::client::AnalyticsClient;
use super::events::TrackingEvent;

/// Forwards lifecycle events to the analytics collector
pub struct Forwarder {
    client: AnalyticsClient,
    labels: ActionLabels,
    separate_update_events: bool,
    stats: ForwardStats,
}

/// Forwarding statistics
#[derive(Debug, Default, Clone)]
pub struct ForwardStats {
    /// Events sent and accepted by the collector
    pub events_sent: usize,
    /// Lifecycle events that resolved to no action
    pub suppressed: usize,
    /// Sends that failed (network error or collector rejection)
    pub send_failures: usize,
}

impl Forwarder {
    /// Create a forwarder from configuration
    ///
    /// Returns None if analytics is not enabled or not properly configured.
    pub fn new(config: &Config) -> Result<Option<Self>> {
        if !config.analytics.is_ready() {
            return Ok(None);
        }

        let client = AnalyticsClient::new(config.analytics.clone())?;
        let labels = ActionLabels::with_overrides(&config.tracking.labels);

        Ok(Some(Self::with_parts(
            client,
            labels,
            config.tracking.separate_update_events,
        )))
    }

    /// Assemble a forwarder from explicit parts.
    ///
    /// For shells that build their own client or label table instead of
    /// going through [`Config`].
    pub fn with_parts(
        client: AnalyticsClient,
        labels: ActionLabels,
        separate_update_events: bool,
    ) -> Self {
        Self {
            client,
            labels,
            separate_update_events,
            stats: ForwardStats::default(),
        }
    }

    /// Handle a wire-form lifecycle event
    pub async fn handle(&mut self, event: &LifecycleEvent) {
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
                self.post_status_changed(&transition, post_title).await;
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
                self.comment_posted(&comment, post_title).await;
            }
        }
    }

    /// Handle a post status transition
    pub async fn post_status_changed(&mut self, transition: &PostTransition, post_title: &str) {
        let planned = TrackingEvent::from_post_transition(
            transition,
            post_title,
            &self.labels,
            self.separate_update_events,
        );
        self.maybe_send(planned).await;
    }

    /// Handle a comment submission
    pub async fn comment_posted(&mut self, comment: &CommentEvent, post_title: &str) {
        let planned = TrackingEvent::from_comment(comment, post_title, &self.labels);
        self.maybe_send(planned).await;
    }

    /// Dispatch a planned event, if there is one.
    ///
    /// An unmapped event is counted as suppressed and never touches the
    /// network. Send failures are logged and counted; the host is never
    /// told about them.
    async fn maybe_send(&mut self, planned: Option<TrackingEvent>) {
        let event = match planned {
            Some(event) => event,
            None => {
                self.stats.suppressed += 1;
                tracing::debug!("lifecycle event resolved to no action, not sending");
                return;
            }
        };

        match self.client.send(&event).await {
            Ok(()) => {
                self.stats.events_sent += 1;
                tracing::debug!(
                    action = %event.action,
                    label = %event.label,
                    "Sent tracking event"
                );
            }
            Err(e) => {
                self.stats.send_failures += 1;
                tracing::warn!(
                    action = %event.action,
                    error = %e,
                    "Failed to send tracking event"
                );
            }
        }
    }

    /// Get current forwarding statistics
    pub fn stats(&self) -> &ForwardStats {
        &self.stats
    }
}
