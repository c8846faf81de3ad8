//! Integration tests for the lifecycle-to-tracking pipeline
//!
//! These tests drive the same path the relay uses: parse JSON-line events,
//! resolve them against configuration, and check what would be sent.

use std::path::PathBuf;

use pressbeat_core::resolve::{ActionLabels, EventAction};
use pressbeat_core::tracker::{Forwarder, TrackingEvent};
use pressbeat_core::types::{CommentStatus, LifecycleEvent, PostStatus};
use pressbeat_core::{resolve_comment_action, resolve_post_action, Config};

fn parse(line: &str) -> LifecycleEvent {
    serde_json::from_str(line).expect("event line should parse")
}

// ============================================
// Resolution table
// ============================================

#[test]
fn test_first_publish_tracks_publish_action() {
    for flag in [true, false] {
        let action =
            resolve_post_action(&PostStatus::Publish, &PostStatus::Draft, flag);
        assert_eq!(action, Some(EventAction::PublishPost));
    }
}

#[test]
fn test_republish_tracks_update_action_when_separated() {
    let action = resolve_post_action(&PostStatus::Publish, &PostStatus::Publish, true);
    assert_eq!(action, Some(EventAction::UpdatePost));

    let action = resolve_post_action(&PostStatus::Publish, &PostStatus::Publish, false);
    assert_eq!(action, Some(EventAction::PublishPost));
}

#[test]
fn test_non_publish_transition_tracks_nothing() {
    let statuses = [
        PostStatus::Draft,
        PostStatus::Pending,
        PostStatus::Private,
        PostStatus::Trash,
        PostStatus::Other("portfolio-live".to_string()),
    ];
    for new_status in &statuses {
        assert_eq!(
            resolve_post_action(new_status, &PostStatus::Publish, true),
            None
        );
    }
}

#[test]
fn test_comment_resolution_table() {
    assert_eq!(resolve_comment_action(&CommentStatus::Spam), None);
    assert_eq!(
        resolve_comment_action(&CommentStatus::Approved),
        Some(EventAction::CommentApproved)
    );
    assert_eq!(
        resolve_comment_action(&CommentStatus::Held),
        Some(EventAction::CommentSubmitted)
    );
}

// ============================================
// Wire format to planned event
// ============================================

#[test]
fn test_publish_line_plans_publish_event() {
    let event = parse(
        r#"{"event":"post_status_changed","post_id":1,"post_title":"Launch Day","new_status":"publish","old_status":"draft"}"#,
    );
    let planned = TrackingEvent::from_lifecycle(&event, &ActionLabels::default(), true)
        .expect("publish should plan an event");

    assert_eq!(planned.action, "Publish Post");
    assert_eq!(planned.label, "Launch Day");
}

#[test]
fn test_republish_line_plans_update_event() {
    let event = parse(
        r#"{"event":"post_status_changed","post_id":1,"post_title":"Launch Day","new_status":"publish","old_status":"publish"}"#,
    );
    let planned = TrackingEvent::from_lifecycle(&event, &ActionLabels::default(), true).unwrap();

    assert_eq!(planned.action, "Update Post");
}

#[test]
fn test_trash_line_plans_nothing() {
    let event = parse(
        r#"{"event":"post_status_changed","post_id":1,"post_title":"Launch Day","new_status":"trash","old_status":"publish"}"#,
    );
    assert!(TrackingEvent::from_lifecycle(&event, &ActionLabels::default(), true).is_none());
}

#[test]
fn test_spam_comment_line_plans_nothing() {
    let event = parse(
        r#"{"event":"comment_posted","comment_id":4,"post_title":"Launch Day","status":"spam"}"#,
    );
    assert!(TrackingEvent::from_lifecycle(&event, &ActionLabels::default(), true).is_none());
}

#[test]
fn test_auto_approved_comment_line_plans_approved() {
    // Integer status, as the host emits it
    let event = parse(
        r#"{"event":"comment_posted","comment_id":4,"post_title":"Launch Day","status":1}"#,
    );
    let planned = TrackingEvent::from_lifecycle(&event, &ActionLabels::default(), true).unwrap();

    assert_eq!(planned.action, "Comment Approved");
    assert_eq!(planned.label, "Launch Day");
}

#[test]
fn test_held_comment_line_plans_submitted() {
    let event = parse(
        r#"{"event":"comment_posted","comment_id":4,"post_title":"Launch Day","status":0}"#,
    );
    let planned = TrackingEvent::from_lifecycle(&event, &ActionLabels::default(), true).unwrap();

    assert_eq!(planned.action, "Comment Submitted");
}

// ============================================
// Configuration flowing into planning
// ============================================

#[test]
fn test_config_label_overrides_reach_planned_events() {
    let dir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[tracking]
separate_update_events = true

[tracking.labels]
update_post = "Republished"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let labels = ActionLabels::with_overrides(&config.tracking.labels);

    let event = parse(
        r#"{"event":"post_status_changed","post_id":1,"post_title":"Launch Day","new_status":"publish","old_status":"publish"}"#,
    );
    let planned =
        TrackingEvent::from_lifecycle(&event, &labels, config.tracking.separate_update_events)
            .unwrap();

    assert_eq!(planned.action, "Republished");
}

#[test]
fn test_forwarder_requires_configured_analytics() {
    // Defaults: analytics disabled, so no forwarder is built
    let config = Config::default();
    assert!(Forwarder::new(&config).unwrap().is_none());
}
