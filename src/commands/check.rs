//! `kumbu-notify check` — a single evaluation pass, then exit.
//!
//! Useful from cron or for trying out a configuration. Unlike the daemon's
//! fire-and-forget ticks, the pass waits for its persistence calls so
//! delivered flags reach the API before the process ends.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use kumbu_core::config::KumbuConfig;
use kumbu_core::remote::ApiClient;

use crate::notify;
use crate::scheduler::ReminderScheduler;

pub async fn run() -> Result<()> {
    let config = KumbuConfig::load()?;

    let client = Arc::new(ApiClient::from_config(&config));
    let events = client.list_events(config.user_id).await?;

    let notifier = notify::detect();
    let mut scheduler = ReminderScheduler::new(events, notifier, client);
    scheduler.evaluate_once(Utc::now());
    scheduler.flush().await;

    Ok(())
}
