#![allow(warnings)]
//! Reminder + Habit Tracker Frontend Entry Point

mod app;
mod components;
mod config;
mod http;
mod state;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, source) = config::load_config();
    if let Some(level) = config.log_level().to_level() {
        let _ = console_log::init_with_level(level);
    }
    config::log_source(&config, &source);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
