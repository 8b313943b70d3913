//! Notification sinks.
//!
//! The scheduler talks to a `Notifier` trait so that platforms without a
//! reachable notification service degrade to bookkeeping-only evaluation
//! instead of failing.

use std::sync::Arc;

use log::{debug, warn};
use notify_rust::Notification;

/// Something that can show a titled message to the user.
///
/// Delivery must not fail the caller; implementations log their own
/// problems.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, body: &str);
}

/// Delivers through the desktop notification service.
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) {
        if let Err(e) = Notification::new().summary(title).body(body).show() {
            warn!("could not show notification '{title}': {e}");
        }
    }
}

/// Swallows notifications. Selected when no notification service is
/// reachable; reminder bookkeeping still runs.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, title: &str, body: &str) {
        debug!("notification suppressed: {title}: {body}");
    }
}

/// Pick a sink for this platform, probing the notification service once.
pub fn detect() -> Arc<dyn Notifier> {
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        if let Err(e) = notify_rust::get_server_information() {
            warn!("no desktop notification service ({e}); reminders will only be logged");
            return Arc::new(NoopNotifier);
        }
    }

    Arc::new(DesktopNotifier)
}
