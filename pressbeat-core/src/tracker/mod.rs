//! Analytics dispatch
//!
//! This module turns resolved lifecycle events into measurement requests
//! against an external collector endpoint.
//!
//! ## Architecture
//!
//! Dispatch is strictly best-effort:
//! - Resolution happens first and is pure; an event with no mapped action
//!   never reaches the network
//! - Each tracked event produces exactly one outbound request
//! - Send failures are logged and counted, never propagated to the host
//!
//! ## Usage
//!
//! Enable the collector in `~/.config/pressbeat/config.toml`:
//!
//! ```toml
//! [analytics]
//! enabled = true
//! endpoint_url = "https://www.google-analytics.com/collect"
//! tracking_id = "UA-12345-1"
//! ```

mod client;
mod events;
mod forwarder;

pub use client::AnalyticsClient;
pub use events::TrackingEvent;
pub use forwarder::{ForwardStats, Forwarder};
