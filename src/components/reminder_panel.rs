//! Reminder Panel Component
//!
//! Add-reminder form and the reminder list.

use leptos::prelude::*;

use tracker_core::display::{completion_label, due_label, LOADING_REMINDERS, NO_REMINDERS};
use tracker_core::Reminder;

use crate::state::use_app_context;

#[component]
pub fn ReminderPanel() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;

    let reminders = Memo::new(move |_| state.with(|s| s.reminders.clone()));
    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let submitting = Memo::new(move |_| state.with(|s| s.pending.reminder_form));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.spawn(|tracker| async move { tracker.add_reminder().await });
    };

    view! {
        <div class="card">
            <h3>"Reminders"</h3>
            <form class="input-row" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Buy groceries, call Alex..."
                    prop:value=move || state.with(|s| s.reminder_form.title.clone())
                    on:input=move |ev| state.update(|s| s.reminder_form.title = event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || state.with(|s| s.reminder_form.due_date.clone())
                    on:input=move |ev| state.update(|s| s.reminder_form.due_date = event_target_value(&ev))
                />
                <button class="button" type="submit" disabled=move || submitting.get()>
                    "Add"
                </button>
            </form>

            {move || {
                if loading.get() {
                    view! { <div class="muted">{LOADING_REMINDERS}</div> }.into_any()
                } else if reminders.with(Vec::is_empty) {
                    view! { <div class="empty">{NO_REMINDERS}</div> }.into_any()
                } else {
                    view! {
                        <div class="list">
                            <For
                                each=move || reminders.get()
                                // Every rendered field is in the key, so a replaced reminder re-renders
                                key=|r| (r.id.clone(), r.title.clone(), r.due_date.clone(), r.completed)
                                children=move |reminder| view! { <ReminderRow reminder=reminder /> }
                            />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

/// A single reminder with its completion toggle
#[component]
fn ReminderRow(reminder: Reminder) -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;
    let id = reminder.id.clone();

    let pending = {
        let id = id.clone();
        move || state.with(|s| s.pending.reminders.contains(&id))
    };

    let on_toggle = move |_| {
        let id = id.clone();
        ctx.spawn(move |tracker| async move { tracker.toggle_reminder(&id).await });
    };

    let row_class = if reminder.completed { "item completed" } else { "item" };

    view! {
        <div class=row_class>
            <div class="meta">
                <strong>{reminder.title.clone()}</strong>
                <div class="muted">{due_label(&reminder)}</div>
            </div>
            <button class="button secondary" disabled=pending on:click=on_toggle>
                {completion_label(&reminder)}
            </button>
        </div>
    }
}
