//! Terminal rendering helpers.

use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};

pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["-", "\\", "|", "/"])
            .template("{msg} {spinner}")
            .unwrap(),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Human-readable date label (e.g. "Today", "Tomorrow", "Wed Jun 12")
pub fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// Phrase for a day distance (e.g. "today", "in 5 days")
pub fn format_days_phrase(diff: i64) -> String {
    match diff {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        n => format!("in {n} days"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_labels() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        assert_eq!(format_date_label(today, today), "Today");
        assert_eq!(
            format_date_label(today.succ_opt().unwrap(), today),
            "Tomorrow"
        );
        assert_eq!(
            format_date_label(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(), today),
            "Sat Jun 15"
        );
    }

    #[test]
    fn test_days_phrases() {
        assert_eq!(format_days_phrase(0), "today");
        assert_eq!(format_days_phrase(1), "tomorrow");
        assert_eq!(format_days_phrase(5), "in 5 days");
    }
}
