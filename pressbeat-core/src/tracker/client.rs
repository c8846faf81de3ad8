//! HTTP client for the measurement endpoint
//!
//! Sends one Measurement-Protocol-style collect request per tracking
//! event. There is no retry, batching, or authentication: the collector
//! treats hits as best-effort and so do we.

use std::time::Duration;

use serde::Serialize;

use crate::config::AnalyticsConfig;
use crate::error::{Error, Result};

use super::events::TrackingEvent;

/// HTTP client for the analytics collector
pub struct AnalyticsClient {
    http_client: reqwest::Client,
    endpoint_url: String,
    tracking_id: String,
    category: String,
    /// Anonymous client id, minted once per client instance
    client_id: String,
}

impl AnalyticsClient {
    /// Create a new analytics client from configuration
    ///
    /// Returns an error if the configuration is invalid or missing required fields.
    pub fn new(config: AnalyticsConfig) -> Result<Self> {
        config.validate()?;

        let endpoint_url = config
            .endpoint_url
            .clone()
            .ok_or_else(|| Error::Config("analytics.endpoint_url is required".to_string()))?
            .trim_end_matches('/')
            .to_string();

        let tracking_id = config
            .tracking_id
            .clone()
            .ok_or_else(|| Error::Config("analytics.tracking_id is required".to_string()))?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint_url,
            tracking_id,
            category: config.category,
            client_id: uuid::Uuid::new_v4().to_string(),
        })
    }

    /// Send a single tracking event to the collector.
    ///
    /// Issues one POST with a form-encoded collect payload. A non-2xx
    /// response is an error to this caller; whether that error matters is
    /// the forwarder's decision.
    pub async fn send(&self, event: &TrackingEvent) -> Result<()> {
        let payload = CollectPayload {
            v: "1",
            tid: &self.tracking_id,
            cid: &self.client_id,
            t: "event",
            ec: &self.category,
            ea: &event.action,
            el: &event.label,
        };

        let response = self
            .http_client
            .post(&self.endpoint_url)
            .form(&payload)
            .send()
            .await
            .map_err(|e| Error::Analytics(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Analytics(format!(
                "collector rejected event ({})",
                status
            )))
        }
    }

    /// The event category attached to every hit
    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Form body for a Measurement Protocol collect hit
#[derive(Serialize)]
struct CollectPayload<'a> {
    /// Protocol version
    v: &'a str,
    /// Tracking/property id
    tid: &'a str,
    /// Anonymous client id
    cid: &'a str,
    /// Hit type
    t: &'a str,
    /// Event category
    ec: &'a str,
    /// Event action
    ea: &'a str,
    /// Event label
    el: &'a str,
}
