//! Status Badge Component
//!
//! Page header with the connection indicator.

use leptos::prelude::*;

use tracker_core::display::status_label;
use tracker_core::{Status, TrackerState};

use crate::state::use_app_context;

/// Hero header; the dot turns amber while the error slot is filled
#[component]
pub fn StatusBadge() -> impl IntoView {
    let state = use_app_context().state;
    let status = Memo::new(move |_| state.with(TrackerState::status));

    let dot_class = move || match status.get() {
        Status::Live => "status-dot live",
        Status::CheckConnection => "status-dot warn",
    };

    view! {
        <div class="hero">
            <div>
                <div class="badge">
                    <span>"Personal Reminder + Habit Tracker"</span>
                </div>
                <h1>"Stay on track effortlessly."</h1>
                <p class="muted">"Add reminders, check in on habits, and see progress in one place."</p>
            </div>
            <div class="status">
                <span class=dot_class></span>
                {move || status_label(status.get())}
            </div>
        </div>
    }
}
