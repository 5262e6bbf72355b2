//! Tracker Frontend App
//!
//! Main application component: header, the two panels, and the error banner.

use leptos::prelude::*;

use tracker_core::AppConfig;

use crate::components::{ErrorBanner, HabitPanel, ReminderPanel, StatusBadge};
use crate::state::AppContext;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(&config);
    provide_context(ctx.clone());

    // Config is resolved before mount, so this runs once
    Effect::new(move |_| {
        ctx.spawn(|tracker| async move { tracker.load_initial_data().await });
    });

    view! {
        <div class="page">
            <StatusBadge />

            <div class="card-grid">
                <ReminderPanel />
                <HabitPanel />
            </div>

            <ErrorBanner />
        </div>
    }
}
