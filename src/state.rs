//! Application Context
//!
//! Reactive view state and the controller, shared via the Leptos Context API.

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use tracker_core::{AppConfig, Outcome, StateCell, Tracker, TrackerState};

use crate::http::FetchTransport;

/// `TrackerState` behind a signal, so every controller write re-renders.
#[derive(Clone, Copy)]
pub struct SignalState(RwSignal<TrackerState>);

impl StateCell for SignalState {
    fn read<R>(&self, f: impl FnOnce(&TrackerState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn update(&self, f: impl FnOnce(&mut TrackerState)) {
        self.0.update(f)
    }
}

pub type AppTracker = Tracker<FetchTransport, SignalState>;

/// App-wide state provided via context
#[derive(Clone)]
pub struct AppContext {
    /// View state; components read it, forms write their fields directly
    pub state: RwSignal<TrackerState>,
    tracker: Arc<AppTracker>,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        let state = RwSignal::new(TrackerState::awaiting_load());
        let tracker = Tracker::new(config, FetchTransport, SignalState(state));
        Self {
            state,
            tracker: Arc::new(tracker),
        }
    }

    /// Run a controller operation in the background.
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(Arc<AppTracker>) -> Fut + 'static,
        Fut: Future<Output = Outcome> + 'static,
    {
        let tracker = Arc::clone(&self.tracker);
        spawn_local(async move {
            let _ = op(tracker).await;
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
