//! The reminder scheduler.
//!
//! Evaluates the event list on a repeating timer and raises each reminder
//! exactly once per milestone: an "upcoming" notification three days before
//! an event, and a "today" notification on the day itself. Delivered
//! reminders are latched on the event; the 3-day latch is also pushed back
//! to the API so it survives restarts.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use kumbu_core::event::Event;
use kumbu_core::occurrence;
use kumbu_core::remote::NotifiedStore;
use log::{debug, info, warn};
use tokio::task::JoinSet;

use crate::notify::Notifier;

/// How many days before an event the "upcoming" reminder fires.
pub const UPCOMING_DAYS: i64 = 3;

pub struct ReminderScheduler {
    events: Vec<Event>,
    notifier: Arc<dyn Notifier>,
    store: Arc<dyn NotifiedStore>,
    persist_tasks: JoinSet<()>,
}

/// Stops the evaluation timer. In-flight persistence calls are detached
/// and unaffected by `stop`.
pub struct SchedulerHandle {
    task: tokio::task::JoinHandle<()>,
}

impl SchedulerHandle {
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl ReminderScheduler {
    /// The event list must be the authoritative current one; the scheduler
    /// never re-fetches. When the host reloads events from the API, build
    /// a new scheduler against the new list.
    pub fn new(
        events: Vec<Event>,
        notifier: Arc<dyn Notifier>,
        store: Arc<dyn NotifiedStore>,
    ) -> Self {
        ReminderScheduler {
            events,
            notifier,
            store,
            persist_tasks: JoinSet::new(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Run one evaluation pass immediately, then one per `interval` tick,
    /// until the returned handle stops the timer.
    pub fn spawn(mut self, interval: Duration) -> SchedulerHandle {
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                // The first tick completes immediately
                ticker.tick().await;
                self.evaluate_once(Utc::now());
            }
        });

        SchedulerHandle { task }
    }

    /// One deterministic evaluation pass over the event list.
    ///
    /// Never fails: notification and persistence problems are logged and
    /// swallowed, and events with unparseable dates are skipped.
    pub fn evaluate_once(&mut self, now: DateTime<Utc>) {
        // Reap persistence tasks finished since the last pass
        while self.persist_tasks.try_join_next().is_some() {}

        debug!("evaluating {} events at {}", self.events.len(), now);

        for event in &mut self.events {
            let Some(occurrence) = occurrence::event_occurrence(event, now) else {
                warn!(
                    "event {} ({}) has unparseable date '{}', skipping",
                    event.id, event.name, event.date
                );
                continue;
            };

            let diff = occurrence::days_until(occurrence, now);

            // A yearly event entering a new cycle still carries last
            // year's latch flags; clear them once the occurrence is far
            // enough out that this cycle's reminders cannot have fired.
            if event.is_yearly()
                && diff > UPCOMING_DAYS
                && (event.notified_before || event.notified_today)
            {
                info!(
                    "event {} ({}) starts a new yearly cycle, clearing delivered flags",
                    event.id, event.name
                );
                event.notified_before = false;
                event.notified_today = false;
            }

            // The two milestones are independent; both may fire in one pass.
            if diff == UPCOMING_DAYS && !event.notified_before {
                self.notifier.notify(
                    &format!("Upcoming Event: {}", event.name),
                    &format!("Event in 3 days: {}", event.body()),
                );
                event.notified_before = true;
                Self::persist_notified_before(&self.store, &mut self.persist_tasks, event.id);
            }

            if occurrence == now.date_naive() && !event.notified_today {
                self.notifier
                    .notify(&format!("Today's Event: {}", event.name), event.body());
                // No API endpoint exists for this flag; it lives for the
                // session only.
                event.notified_today = true;
            }
        }
    }

    /// Push the delivered 3-day flag to the API as a detached task. The
    /// tick never waits on it; a failure is logged and the in-memory latch
    /// stands.
    fn persist_notified_before(
        store: &Arc<dyn NotifiedStore>,
        tasks: &mut JoinSet<()>,
        event_id: i64,
    ) {
        let store = Arc::clone(store);
        tasks.spawn(async move {
            if let Err(e) = store.mark_notified_before(event_id).await {
                warn!("could not persist notified-before for event {event_id}: {e}");
            }
        });
    }

    /// Wait for in-flight persistence tasks. The periodic loop never calls
    /// this; one-shot evaluation does, so flags reach the API before exit.
    pub async fn flush(&mut self) {
        while self.persist_tasks.join_next().await.is_some() {}
    }
}
