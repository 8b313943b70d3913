//! Wire types for the cloud events API.
//!
//! These mirror the JSON records the API serves. Field names on the wire
//! carry an `event_` prefix; they are renamed to plain Rust names on
//! deserialization. The daemon works exclusively with these types for
//! reminder evaluation and terminal listing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::occurrence;

/// A calendar event as served by `GET /events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "event_id")]
    pub id: i64,
    #[serde(rename = "event_name")]
    pub name: String,
    #[serde(rename = "event_description", default)]
    pub description: Option<String>,

    /// ISO date string as delivered by the API. Kept raw so a malformed
    /// date degrades to "never due" instead of failing the whole fetch.
    #[serde(rename = "event_date")]
    pub date: String,

    /// `"yearly"` means the event fires every year on the same month/day.
    #[serde(default)]
    pub repetition: Option<String>,

    /// Latch flag: the 3-day-ahead reminder has been delivered for the
    /// current occurrence.
    #[serde(default)]
    pub notified_before: bool,

    /// Latch flag: the day-of reminder has been delivered for the current
    /// occurrence. Session-local; the API has no endpoint to persist it.
    #[serde(default)]
    pub notified_today: bool,
}

impl Event {
    /// Whether this event recurs every year on the same month/day.
    pub fn is_yearly(&self) -> bool {
        self.repetition.as_deref() == Some("yearly")
    }

    /// The event's calendar date, if it parses.
    pub fn date(&self) -> Option<NaiveDate> {
        occurrence::parse_date(&self.date)
    }

    /// Notification body text: the description, or a placeholder.
    pub fn body(&self) -> &str {
        self.description.as_deref().unwrap_or("No description")
    }
}

/// A birthday record from `GET /birthdays`. Recurs yearly by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Birthday {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
}

impl Birthday {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        occurrence::parse_date(&self.date_of_birth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_record() {
        let json = r#"{
            "event_id": 7,
            "event_name": "Graduation",
            "event_description": "Dar es Salaam",
            "event_date": "2024-06-15",
            "repetition": "yearly",
            "notified_before": true
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, 7);
        assert_eq!(event.name, "Graduation");
        assert_eq!(event.description.as_deref(), Some("Dar es Salaam"));
        assert!(event.is_yearly());
        assert!(event.notified_before);
        // Absent on the wire: defaults to not-yet-delivered
        assert!(!event.notified_today);
    }

    #[test]
    fn test_minimal_record_defaults() {
        let json = r#"{"event_id": 1, "event_name": "Move", "event_date": "2025-01-02"}"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert!(!event.is_yearly());
        assert!(!event.notified_before);
        assert_eq!(event.body(), "No description");
        assert_eq!(
            event.date(),
            Some(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap())
        );
    }

    #[test]
    fn test_non_yearly_repetition_values() {
        let json = r#"{"event_id": 2, "event_name": "x", "event_date": "2025-01-02", "repetition": "monthly"}"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert!(!event.is_yearly());
    }
}
