//! Tracker Core
//!
//! Data flow for the reminder and habit tracker: wire models, the JSON API
//! client, the view state and the controller that reconciles server
//! responses into it. Nothing in here touches the browser, so the whole
//! crate is testable natively.

pub mod api;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod models;
pub mod state;

#[cfg(test)]
mod testing;

pub use api::{ApiClient, HttpRequest, HttpResponse, Method, Transport};
pub use config::AppConfig;
pub use controller::{Outcome, StateCell, Tracker};
pub use error::ApiError;
pub use models::{Habit, NewHabit, NewReminder, RecordId, Reminder, ReminderCompletion};
pub use state::{HabitForm, PendingRequests, ReminderForm, Status, TrackerState};
