//! View-State Controller
//!
//! Drives the initial load and the four mutations against the API, then
//! folds each response into [`TrackerState`]. The state lives behind a
//! [`StateCell`] so the browser can back it with a reactive signal while
//! tests use a plain `RefCell`.

use std::cell::RefCell;

use crate::api::{ApiClient, Transport};
use crate::config::AppConfig;
use crate::models::RecordId;
use crate::state::TrackerState;

/// Shared access to the view state.
///
/// Implementations must not hold a borrow across calls; the controller
/// only reads or writes between awaits.
pub trait StateCell {
    fn read<R>(&self, f: impl FnOnce(&TrackerState) -> R) -> R;
    fn update(&self, f: impl FnOnce(&mut TrackerState));
}

impl StateCell for RefCell<TrackerState> {
    fn read<R>(&self, f: impl FnOnce(&TrackerState) -> R) -> R {
        f(&self.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut TrackerState)) {
        f(&mut self.borrow_mut())
    }
}

/// What an operation ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was sent: blank input, unknown id, or the same request is
    /// still outstanding.
    Skipped,
    /// The server answered and the state was updated.
    Applied,
    /// The request failed and the error slot was set.
    Failed,
}

pub struct Tracker<T, S> {
    api: ApiClient<T>,
    state: S,
}

impl<T: Transport, S: StateCell> Tracker<T, S> {
    pub fn new(config: &AppConfig, transport: T, state: S) -> Self {
        Self {
            api: ApiClient::new(config, transport),
            state,
        }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Fetch both collections at once and replace the local lists.
    ///
    /// Both requests always run to completion; if either fails the other
    /// result is dropped and the lists stay as they were.
    pub async fn load_initial_data(&self) -> Outcome {
        self.state.update(TrackerState::begin_load);
        log::info!("[TRACKER] Loading reminders and habits from '{}'", self.api.base());

        let (reminders, habits) = futures::join!(self.api.list_reminders(), self.api.list_habits());
        let result = reminders.and_then(|r| habits.map(|h| (r, h)));

        let outcome = match &result {
            Ok((r, h)) => {
                log::info!("[TRACKER] Loaded {} reminders, {} habits", r.len(), h.len());
                Outcome::Applied
            }
            Err(err) => {
                log::warn!("[TRACKER] Initial load failed: {}", err);
                Outcome::Failed
            }
        };
        self.state.update(|s| s.finish_load(result));
        outcome
    }

    pub async fn add_reminder(&self) -> Outcome {
        let draft = self.state.read(|s| {
            if s.pending.reminder_form {
                None
            } else {
                s.reminder_form.draft()
            }
        });
        let Some(draft) = draft else {
            log::debug!("[TRACKER] add_reminder skipped");
            return Outcome::Skipped;
        };

        self.state.update(|s| s.pending.reminder_form = true);
        let result = self.api.create_reminder(&draft).await;

        let mut outcome = Outcome::Applied;
        self.state.update(|s| {
            s.pending.reminder_form = false;
            match result {
                Ok(saved) => {
                    log::info!("[TRACKER] Reminder {} created", saved.id);
                    s.commit_new_reminder(saved);
                }
                Err(err) => {
                    log::warn!("[TRACKER] Creating reminder failed: {}", err);
                    s.fail(&err);
                    outcome = Outcome::Failed;
                }
            }
        });
        outcome
    }

    /// Flip `completed` on the reminder with this id.
    pub async fn toggle_reminder(&self, id: &RecordId) -> Outcome {
        let completed = self.state.read(|s| {
            if s.pending.reminders.contains(id) {
                return None;
            }
            s.reminder(id).map(|r| r.completed)
        });
        let Some(completed) = completed else {
            log::debug!("[TRACKER] toggle_reminder({}) skipped", id);
            return Outcome::Skipped;
        };

        self.state.update(|s| {
            s.pending.reminders.insert(id.clone());
        });
        let result = self.api.set_reminder_completed(id, !completed).await;

        let mut outcome = Outcome::Applied;
        self.state.update(|s| {
            s.pending.reminders.remove(id);
            match result {
                Ok(saved) => {
                    log::debug!("[TRACKER] Reminder {} completed={}", saved.id, saved.completed);
                    s.commit_reminder(saved);
                }
                Err(err) => {
                    log::warn!("[TRACKER] Toggling reminder {} failed: {}", id, err);
                    s.fail(&err);
                    outcome = Outcome::Failed;
                }
            }
        });
        outcome
    }

    pub async fn add_habit(&self) -> Outcome {
        let draft = self.state.read(|s| {
            if s.pending.habit_form {
                None
            } else {
                s.habit_form.draft()
            }
        });
        let Some(draft) = draft else {
            log::debug!("[TRACKER] add_habit skipped");
            return Outcome::Skipped;
        };

        self.state.update(|s| s.pending.habit_form = true);
        let result = self.api.create_habit(&draft).await;

        let mut outcome = Outcome::Applied;
        self.state.update(|s| {
            s.pending.habit_form = false;
            match result {
                Ok(saved) => {
                    log::info!("[TRACKER] Habit {} created", saved.id);
                    s.commit_new_habit(saved);
                }
                Err(err) => {
                    log::warn!("[TRACKER] Creating habit failed: {}", err);
                    s.fail(&err);
                    outcome = Outcome::Failed;
                }
            }
        });
        outcome
    }

    /// Check in on a habit. The server recomputes streak and last check.
    pub async fn check_habit(&self, id: &RecordId) -> Outcome {
        if self.state.read(|s| s.pending.habits.contains(id)) {
            log::debug!("[TRACKER] check_habit({}) skipped", id);
            return Outcome::Skipped;
        }

        self.state.update(|s| {
            s.pending.habits.insert(id.clone());
        });
        let result = self.api.check_habit(id).await;

        let mut outcome = Outcome::Applied;
        self.state.update(|s| {
            s.pending.habits.remove(id);
            match result {
                Ok(saved) => {
                    log::debug!("[TRACKER] Habit {} streak={}", saved.id, saved.streak);
                    s.commit_habit(saved);
                }
                Err(err) => {
                    log::warn!("[TRACKER] Check-in for habit {} failed: {}", id, err);
                    s.fail(&err);
                    outcome = Outcome::Failed;
                }
            }
        });
        outcome
    }
}
