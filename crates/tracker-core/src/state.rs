//! View State
//!
//! Everything the page renders, plus the rules for folding server
//! responses back into it. Lists only change once the server has answered.

use std::collections::HashSet;

use crate::error::{ApiError, GENERIC_LOAD_FAILURE};
use crate::models::{Habit, NewHabit, NewReminder, RecordId, Reminder};

/// Add-reminder form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderForm {
    pub title: String,
    /// `YYYY-MM-DD` from the date input, or empty.
    pub due_date: String,
}

impl ReminderForm {
    /// The create payload, or `None` if the title is blank.
    pub fn draft(&self) -> Option<NewReminder> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        Some(NewReminder {
            title: title.to_string(),
            due_date: self.due_date.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Add-habit form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitForm {
    pub name: String,
}

impl HabitForm {
    pub fn draft(&self) -> Option<NewHabit> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(NewHabit {
            name: name.to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Requests that have been sent but not answered yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingRequests {
    pub reminder_form: bool,
    pub habit_form: bool,
    pub reminders: HashSet<RecordId>,
    pub habits: HashSet<RecordId>,
}

/// Connection indicator in the page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Live,
    CheckConnection,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerState {
    pub reminders: Vec<Reminder>,
    pub habits: Vec<Habit>,
    pub reminder_form: ReminderForm,
    pub habit_form: HabitForm,
    /// Only covers the initial load. Mutations never touch it.
    pub loading: bool,
    /// The single error slot.
    pub error: Option<String>,
    pub pending: PendingRequests,
}

impl TrackerState {
    /// State for a page whose initial load is about to start, so the
    /// first render shows the loading text rather than the empty lists.
    pub fn awaiting_load() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    pub fn status(&self) -> Status {
        if self.error.is_some() {
            Status::CheckConnection
        } else {
            Status::Live
        }
    }

    // ========================
    // Initial load
    // ========================

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Finish the initial load. Success replaces both lists but leaves the
    /// error slot alone; failure keeps whatever lists were there.
    pub fn finish_load(&mut self, result: Result<(Vec<Reminder>, Vec<Habit>), ApiError>) {
        self.loading = false;
        match result {
            Ok((reminders, habits)) => {
                self.reminders = reminders;
                self.habits = habits;
            }
            Err(err) => {
                let message = match err.message() {
                    "" => GENERIC_LOAD_FAILURE.to_string(),
                    message => message.to_string(),
                };
                self.error = Some(message);
            }
        }
    }

    // ========================
    // Mutation results
    // ========================

    pub fn commit_new_reminder(&mut self, saved: Reminder) {
        self.reminders.push(saved);
        self.reminder_form.clear();
        self.error = None;
    }

    /// Replace the reminder with the same id, keeping its position.
    pub fn commit_reminder(&mut self, saved: Reminder) {
        if let Some(slot) = self.reminders.iter_mut().find(|r| r.id == saved.id) {
            *slot = saved;
        }
        self.error = None;
    }

    pub fn commit_new_habit(&mut self, saved: Habit) {
        self.habits.push(saved);
        self.habit_form.clear();
        self.error = None;
    }

    /// Replace the habit with the same id, keeping its position.
    pub fn commit_habit(&mut self, saved: Habit) {
        if let Some(slot) = self.habits.iter_mut().find(|h| h.id == saved.id) {
            *slot = saved;
        }
        self.error = None;
    }

    /// Write a failure into the error slot. An empty message empties it.
    pub fn fail(&mut self, err: &ApiError) {
        self.error = Some(err.message().to_string()).filter(|m| !m.is_empty());
    }

    pub fn reminder(&self, id: &RecordId) -> Option<&Reminder> {
        self.reminders.iter().find(|r| &r.id == id)
    }

    pub fn habit(&self, id: &RecordId) -> Option<&Habit> {
        self.habits.iter().find(|h| &h.id == id)
    }
}
