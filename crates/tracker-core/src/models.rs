//! Wire Models
//!
//! Data structures matching the `/api/reminders` and `/api/habits` payloads.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identifier.
///
/// The backend hands out integers today, but the client treats ids as
/// opaque and accepts strings too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

/// Reminder data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: RecordId,
    pub title: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Habit data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub streak: u32,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub last_check: Option<String>,
}

// ========================
// Request Payloads
// ========================

/// Body of `POST /api/reminders` when creating.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    pub title: String,
    pub due_date: String,
}

/// Body of `POST /api/reminders` when flipping completion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReminderCompletion {
    pub id: RecordId,
    pub completed: bool,
}

/// Body of `POST /api/habits`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewHabit {
    pub name: String,
}

/// The backend writes `""` for "not set"; fold that into `None`.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reminder_blank_due_date_is_none() {
        let r: Reminder = serde_json::from_value(json!({
            "id": 1, "title": "A", "dueDate": "", "completed": false
        }))
        .unwrap();
        assert_eq!(r.id, RecordId::Number(1));
        assert_eq!(r.due_date, None);
    }

    #[test]
    fn reminder_keeps_created_at() {
        let r: Reminder = serde_json::from_value(json!({
            "id": 3, "title": "B", "dueDate": "2024-01-01",
            "completed": true, "createdAt": "2024-01-01T09:00:00Z"
        }))
        .unwrap();
        assert_eq!(r.due_date.as_deref(), Some("2024-01-01"));
        assert_eq!(r.created_at.as_deref(), Some("2024-01-01T09:00:00Z"));
        assert!(r.completed);
    }

    #[test]
    fn habit_defaults_missing_fields() {
        let h: Habit = serde_json::from_value(json!({ "id": "h-1", "name": "Run" })).unwrap();
        assert_eq!(h.id, RecordId::Text("h-1".into()));
        assert_eq!(h.streak, 0);
        assert_eq!(h.last_check, None);

        let h: Habit = serde_json::from_value(json!({
            "id": 5, "name": "Meditate", "streak": 4, "lastCheck": null
        }))
        .unwrap();
        assert_eq!(h.last_check, None);
    }

    #[test]
    fn payloads_use_camel_case() {
        let body = serde_json::to_value(NewReminder {
            title: "Buy milk".into(),
            due_date: "2024-01-01".into(),
        })
        .unwrap();
        assert_eq!(body, json!({ "title": "Buy milk", "dueDate": "2024-01-01" }));

        let body = serde_json::to_value(ReminderCompletion { id: 1.into(), completed: true }).unwrap();
        assert_eq!(body, json!({ "id": 1, "completed": true }));
    }

    #[test]
    fn record_id_display_is_raw() {
        assert_eq!(RecordId::from(42).to_string(), "42");
        assert_eq!(RecordId::from("abc").to_string(), "abc");
    }
}
