//! `kumbu-notify run` — the long-running reminder daemon.

use std::sync::Arc;

use anyhow::Result;
use kumbu_core::config::KumbuConfig;
use kumbu_core::remote::ApiClient;
use log::info;

use crate::notify;
use crate::scheduler::ReminderScheduler;

pub async fn run(interval_override: Option<&str>) -> Result<()> {
    let config = KumbuConfig::load()?;
    let interval = match interval_override {
        Some(s) => humantime::parse_duration(s)?,
        None => config.interval()?,
    };

    let client = Arc::new(ApiClient::from_config(&config));
    let events = client.list_events(config.user_id).await?;
    info!(
        "watching {} events, checking every {}",
        events.len(),
        humantime::format_duration(interval)
    );

    let notifier = notify::detect();
    let scheduler = ReminderScheduler::new(events, notifier, client);
    let handle = scheduler.spawn(interval);

    tokio::signal::ctrl_c().await?;
    info!("interrupt received, stopping scheduler");
    handle.stop();

    Ok(())
}
