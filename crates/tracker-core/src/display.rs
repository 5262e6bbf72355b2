//! Display Text
//!
//! Labels the panels render for each entity.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::models::{Habit, Reminder};
use crate::state::Status;

pub const LOADING_REMINDERS: &str = "Loading reminders...";
pub const NO_REMINDERS: &str = "No reminders yet.";
pub const LOADING_HABITS: &str = "Loading habits...";
pub const NO_HABITS: &str = "No habits yet.";

pub fn due_label(reminder: &Reminder) -> String {
    match reminder.due_date.as_deref() {
        Some(date) => format!("Due {}", date),
        None => "No due date".to_string(),
    }
}

pub fn completion_label(reminder: &Reminder) -> &'static str {
    if reminder.completed {
        "Completed"
    } else {
        "Mark done"
    }
}

pub fn streak_label(streak: u32) -> String {
    let unit = if streak == 1 { "day" } else { "days" };
    format!("Streak: {} {}", streak, unit)
}

/// Pill text for the last check-in, rendered in `tz`.
///
/// `None` when the habit was never checked in. A timestamp that does not
/// parse as RFC 3339 is shown as received.
pub fn last_check_label<Tz>(habit: &Habit, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let raw = habit.last_check.as_deref()?;
    let shown = match DateTime::parse_from_rfc3339(raw) {
        Ok(at) => at.with_timezone(tz).format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        Err(_) => raw.to_string(),
    };
    Some(format!("Last check-in: {}", shown))
}

pub fn status_label(status: Status) -> &'static str {
    match status {
        Status::Live => "Live",
        Status::CheckConnection => "Check connection",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn habit(last_check: Option<&str>) -> Habit {
        Habit {
            id: 5.into(),
            name: "Meditate".into(),
            streak: 4,
            last_check: last_check.map(str::to_string),
        }
    }

    #[test]
    fn due_and_completion_labels() {
        let mut reminder = Reminder {
            id: 1.into(),
            title: "A".into(),
            due_date: None,
            completed: false,
            created_at: None,
        };
        assert_eq!(due_label(&reminder), "No due date");
        assert_eq!(completion_label(&reminder), "Mark done");

        reminder.due_date = Some("2024-01-01".into());
        reminder.completed = true;
        assert_eq!(due_label(&reminder), "Due 2024-01-01");
        assert_eq!(completion_label(&reminder), "Completed");
    }

    #[test]
    fn streak_pluralization() {
        assert_eq!(streak_label(0), "Streak: 0 days");
        assert_eq!(streak_label(1), "Streak: 1 day");
        assert_eq!(streak_label(4), "Streak: 4 days");
    }

    #[test]
    fn last_check_follows_time_zone() {
        let h = habit(Some("2024-01-02T10:00:00Z"));
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(
            last_check_label(&h, &tokyo).as_deref(),
            Some("Last check-in: 1/2/2024, 7:00:00 PM")
        );
    }

    #[test]
    fn last_check_absent_or_unparseable() {
        assert_eq!(last_check_label(&habit(None), &chrono::Utc), None);
        assert_eq!(
            last_check_label(&habit(Some("yesterday")), &chrono::Utc).as_deref(),
            Some("Last check-in: yesterday")
        );
    }

    #[test]
    fn status_labels() {
        assert_eq!(status_label(Status::Live), "Live");
        assert_eq!(status_label(Status::CheckConnection), "Check connection");
    }
}
