//! Endpoint wrappers over a [`Transport`].

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::transport::{HttpRequest, Method, Transport};
use crate::config::AppConfig;
use crate::error::{ApiError, GENERIC_REQUEST_FAILURE};
use crate::models::{Habit, NewHabit, NewReminder, RecordId, Reminder, ReminderCompletion};

pub const REMINDERS_PATH: &str = "/api/reminders";
pub const HABITS_PATH: &str = "/api/habits";

pub struct ApiClient<T> {
    base: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: &AppConfig, transport: T) -> Self {
        Self {
            base: config.api_base().to_string(),
            transport,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issue a request to `{base}{path}` and decode the JSON answer.
    ///
    /// The body is parsed before the status is looked at, so a failed
    /// response can hand back its `error` message.
    pub async fn fetch_json<B, R>(&self, method: Method, path: &str, body: Option<&B>) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = body.map(serde_json::to_string).transpose()?;
        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base, path),
            body,
        };
        log::debug!("[API] {} {}", method.as_str(), request.url);

        let response = self.transport.send(request).await?;
        let data: Value = serde_json::from_str(&response.body)?;

        if !response.is_success() {
            let message = data
                .get("error")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .unwrap_or(GENERIC_REQUEST_FAILURE);
            log::warn!("[API] {} {} -> {}: {}", method.as_str(), path, response.status, message);
            return Err(ApiError::request_failed(message));
        }

        Ok(serde_json::from_value(data)?)
    }

    // ========================
    // Reminders
    // ========================

    pub async fn list_reminders(&self) -> Result<Vec<Reminder>, ApiError> {
        self.fetch_json::<(), _>(Method::Get, REMINDERS_PATH, None).await
    }

    pub async fn create_reminder(&self, reminder: &NewReminder) -> Result<Reminder, ApiError> {
        self.fetch_json(Method::Post, REMINDERS_PATH, Some(reminder)).await
    }

    pub async fn set_reminder_completed(&self, id: &RecordId, completed: bool) -> Result<Reminder, ApiError> {
        let body = ReminderCompletion {
            id: id.clone(),
            completed,
        };
        self.fetch_json(Method::Post, REMINDERS_PATH, Some(&body)).await
    }

    // ========================
    // Habits
    // ========================

    pub async fn list_habits(&self) -> Result<Vec<Habit>, ApiError> {
        self.fetch_json::<(), _>(Method::Get, HABITS_PATH, None).await
    }

    pub async fn create_habit(&self, habit: &NewHabit) -> Result<Habit, ApiError> {
        self.fetch_json(Method::Post, HABITS_PATH, Some(habit)).await
    }

    pub async fn check_habit(&self, id: &RecordId) -> Result<Habit, ApiError> {
        self.fetch_json::<(), _>(Method::Post, &check_path(id), None).await
    }
}

/// `/api/habits/{id}/check`, with the id kept inside its path segment.
pub fn check_path(id: &RecordId) -> String {
    let segment = id.to_string();
    format!("{}/{}/check", HABITS_PATH, utf8_percent_encode(&segment, NON_ALPHANUMERIC))
}
