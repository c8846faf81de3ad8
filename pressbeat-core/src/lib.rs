//! # pressbeat-core
//!
//! Core library for pressbeat - a content lifecycle analytics forwarder.
//!
//! This library provides:
//! - Domain types for post transitions and comment submissions
//! - A pure resolver mapping lifecycle events to tracked actions
//! - A best-effort dispatcher for the analytics collector
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! Each lifecycle event flows through two stages:
//! - **Resolve (pure):** map the transition or comment status to an action
//!   label, or to nothing at all
//! - **Dispatch (best-effort):** fire one collect request per resolved
//!   event; failures are logged, never surfaced to the host
//!
//! ## Example
//!
//! ```rust,no_run
//! use pressbeat_core::{Config, Forwarder};
//!
//! # async fn run() {
//! let config = Config::load().expect("failed to load config");
//!
//! if let Some(mut forwarder) = Forwarder::new(&config).expect("bad analytics config") {
//!     let event = serde_json::from_str(
//!         r#"{"event":"post_status_changed","post_id":1,"post_title":"Hi",
//!             "new_status":"publish","old_status":"draft"}"#,
//!     )
//!     .expect("valid event");
//!     forwarder.handle(&event).await;
//! }
//! # }
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use resolve::{resolve_comment_action, resolve_post_action, ActionLabels, EventAction};
pub use tracker::{AnalyticsClient, ForwardStats, Forwarder, TrackingEvent};
pub use types::*;

// Public modules
pub mod config;
pub mod error;
pub mod logging;
pub mod resolve;
pub mod tracker;
pub mod types;
