//! UI Components
//!
//! Leptos components for the tracker page.

mod error_banner;
mod habit_panel;
mod reminder_panel;
mod status_badge;

pub use error_banner::ErrorBanner;
pub use habit_panel::HabitPanel;
pub use reminder_panel::ReminderPanel;
pub use status_badge::StatusBadge;
