//! `kumbu-notify upcoming` — list upcoming events and birthdays.

use anyhow::Result;
use chrono::Utc;
use kumbu_core::config::KumbuConfig;
use kumbu_core::event::{Birthday, Event};
use kumbu_core::occurrence;
use kumbu_core::remote::ApiClient;
use log::warn;
use owo_colors::OwoColorize;

use crate::render;

pub async fn run(days: i64) -> Result<()> {
    let config = KumbuConfig::load()?;
    let client = ApiClient::from_config(&config);

    let spinner = render::create_spinner("Fetching events".to_string());
    let events = client.list_events(config.user_id).await?;
    // A birthday fetch problem should not take down the event listing
    let birthdays = match client.list_birthdays().await {
        Ok(birthdays) => birthdays,
        Err(e) => {
            warn!("could not fetch birthdays: {e}");
            Vec::new()
        }
    };
    spinner.finish_and_clear();

    let now = Utc::now();
    let today = now.date_naive();

    let mut upcoming: Vec<(i64, chrono::NaiveDate, &Event)> = events
        .iter()
        .filter_map(|event| {
            let occurrence = occurrence::event_occurrence(event, now)?;
            let diff = occurrence::days_until(occurrence, now);
            (0..=days).contains(&diff).then_some((diff, occurrence, event))
        })
        .collect();
    upcoming.sort_by_key(|(diff, _, _)| *diff);

    if upcoming.is_empty() {
        println!("{}", "No upcoming events".dimmed());
    }

    for (_, occurrence, event) in &upcoming {
        let label = render::format_date_label(*occurrence, today);
        let recurring = if event.is_yearly() {
            format!(" {}", "(yearly)".dimmed())
        } else {
            String::new()
        };
        println!("  {:<12} {}{}", label, event.name.bold(), recurring);
        if let Some(description) = &event.description {
            println!("  {:<12} {}", "", description.dimmed());
        }
    }

    let mut upcoming_birthdays: Vec<(i64, &Birthday)> = birthdays
        .iter()
        .filter_map(|birthday| {
            let dob = birthday.date()?;
            let occurrence = occurrence::occurrence_date(dob, true, today);
            let diff = occurrence::days_until(occurrence, now);
            (0..=days).contains(&diff).then_some((diff, birthday))
        })
        .collect();
    upcoming_birthdays.sort_by_key(|(diff, _)| *diff);

    if !upcoming_birthdays.is_empty() {
        println!();
        println!("{}", "🎂 Upcoming Birthdays".bold());
        for (diff, birthday) in &upcoming_birthdays {
            println!(
                "  🎉 {}'s birthday is {}",
                birthday.full_name(),
                render::format_days_phrase(*diff)
            );
        }
    }

    Ok(())
}
