//! pressbeat-relay - feeds content lifecycle events to the analytics forwarder
//!
//! The relay is the application shell around pressbeat-core: it owns the
//! event subscription (here, a JSON-lines stream from the host CMS),
//! builds the forwarder from configuration, and reports a summary when the
//! stream ends.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pressbeat_core::resolve::ActionLabels;
use pressbeat_core::tracker::{Forwarder, TrackingEvent};
use pressbeat_core::types::LifecycleEvent;
use pressbeat_core::Config;

#[derive(Parser, Debug)]
#[command(name = "pressbeat-relay")]
#[command(about = "Relay CMS lifecycle events to an analytics collector")]
#[command(version)]
struct Args {
    /// Path to a config file (default: XDG config location)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read events from a file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// Resolve and print events without sending anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path).context("failed to load configuration")?,
        None => Config::load().context("failed to load configuration")?,
    };
    let _log_guard = pressbeat_core::logging::init(&config.logging).ok();

    let labels = ActionLabels::with_overrides(&config.tracking.labels);
    let separate_update_events = config.tracking.separate_update_events;

    let mut forwarder = if args.dry_run {
        None
    } else {
        match Forwarder::new(&config).context("failed to set up analytics client")? {
            Some(forwarder) => Some(forwarder),
            None => anyhow::bail!(
                "analytics is not configured; add an [analytics] section to {:?} or use --dry-run",
                Config::config_path()
            ),
        }
    };

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {:?}", path))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut malformed = 0usize;
    let mut planned = 0usize;
    let mut suppressed = 0usize;

    for line in reader.lines() {
        let line = line.context("failed to read event stream")?;
        if line.trim().is_empty() {
            continue;
        }

        let event: LifecycleEvent = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(e) => {
                malformed += 1;
                tracing::warn!(error = %e, "skipping malformed event line");
                continue;
            }
        };

        match forwarder.as_mut() {
            Some(forwarder) => forwarder.handle(&event).await,
            None => {
                // Dry run: plan only, print what would be sent
                match TrackingEvent::from_lifecycle(&event, &labels, separate_update_events) {
                    Some(tracking) => {
                        planned += 1;
                        println!("{} -> {}", tracking.action, tracking.label);
                    }
                    None => suppressed += 1,
                }
            }
        }
    }

    match &forwarder {
        Some(forwarder) => {
            let stats = forwarder.stats();
            println!(
                "sent {} event(s), suppressed {}, {} send failure(s), {} malformed line(s)",
                stats.events_sent, stats.suppressed, stats.send_failures, malformed
            );
        }
        None => {
            println!(
                "planned {} event(s), suppressed {}, {} malformed line(s)",
                planned, suppressed, malformed
            );
        }
    }

    Ok(())
}
