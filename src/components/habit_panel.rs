//! Habit Panel Component
//!
//! Add-habit form and the habit list with check-in buttons.

use leptos::prelude::*;

use tracker_core::display::{last_check_label, streak_label, LOADING_HABITS, NO_HABITS};
use tracker_core::Habit;

use crate::state::use_app_context;

#[component]
pub fn HabitPanel() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;

    let habits = Memo::new(move |_| state.with(|s| s.habits.clone()));
    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let submitting = Memo::new(move |_| state.with(|s| s.pending.habit_form));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.spawn(|tracker| async move { tracker.add_habit().await });
    };

    view! {
        <div class="card">
            <h3>"Habits"</h3>
            <form class="input-row" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Drink water, meditate..."
                    prop:value=move || state.with(|s| s.habit_form.name.clone())
                    on:input=move |ev| state.update(|s| s.habit_form.name = event_target_value(&ev))
                />
                <button class="button" type="submit" disabled=move || submitting.get()>
                    "Add"
                </button>
            </form>

            {move || {
                if loading.get() {
                    view! { <div class="muted">{LOADING_HABITS}</div> }.into_any()
                } else if habits.with(Vec::is_empty) {
                    view! { <div class="empty">{NO_HABITS}</div> }.into_any()
                } else {
                    view! {
                        <div class="list">
                            <For
                                each=move || habits.get()
                                key=|h| (h.id.clone(), h.name.clone(), h.streak, h.last_check.clone())
                                children=move |habit| view! { <HabitRow habit=habit /> }
                            />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}

/// A single habit with streak, last check-in pill and check-in button
#[component]
fn HabitRow(habit: Habit) -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;
    let id = habit.id.clone();

    let pending = {
        let id = id.clone();
        move || state.with(|s| s.pending.habits.contains(&id))
    };

    let on_check = move |_| {
        let id = id.clone();
        ctx.spawn(move |tracker| async move { tracker.check_habit(&id).await });
    };

    // Shown in the viewer's local time zone
    let last_check = last_check_label(&habit, &chrono::Local);

    view! {
        <div class="item">
            <div class="meta">
                <strong>{habit.name.clone()}</strong>
                <div class="muted">{streak_label(habit.streak)}</div>
                {last_check.map(|text| view! { <span class="pill">{text}</span> })}
            </div>
            <button class="button secondary" disabled=pending on:click=on_check>
                "Check in"
            </button>
        </div>
    }
}
