//! Runtime configuration injected by the hosting page.
//!
//! The page loads `/config.js`, which sets `window.__APP_CONFIG` before the
//! app boots. Every field is optional; an absent object means defaults.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Prefix for every API path. Empty means same origin.
    #[serde(default)]
    pub api_base_url: String,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    #[serde(default)]
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Default::default()
        }
    }

    /// Base URL with a single trailing slash removed.
    pub fn api_base(&self) -> &str {
        self.api_base_url
            .strip_suffix('/')
            .unwrap_or(&self.api_base_url)
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(LevelFilter::Info)
    }
}
