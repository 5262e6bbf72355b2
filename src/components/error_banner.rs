//! Error Banner Component

use leptos::prelude::*;

use crate::state::use_app_context;

/// Persistent banner for the error slot
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let state = use_app_context().state;
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));

    move || error.get().map(|message| view! { <div class="error-banner">{message}</div> })
}
