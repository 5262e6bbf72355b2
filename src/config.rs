//! Injected Runtime Config
//!
//! Reads `window.__APP_CONFIG`, set by `/config.js` before the bundle runs.

use js_sys::Reflect;
use wasm_bindgen::JsValue;

use tracker_core::AppConfig;

const CONFIG_GLOBAL: &str = "__APP_CONFIG";

/// Where the active config came from, reported once logging is up.
pub enum ConfigSource {
    Injected,
    Missing,
    Malformed(String),
}

/// Look up the injected config. Absence is not an error.
pub fn load_config() -> (AppConfig, ConfigSource) {
    let Some(window) = web_sys::window() else {
        return (AppConfig::default(), ConfigSource::Missing);
    };
    let value = Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)).unwrap_or(JsValue::UNDEFINED);
    if value.is_undefined() || value.is_null() {
        return (AppConfig::default(), ConfigSource::Missing);
    }

    match serde_wasm_bindgen::from_value::<AppConfig>(value) {
        Ok(config) => (config, ConfigSource::Injected),
        Err(e) => (AppConfig::default(), ConfigSource::Malformed(e.to_string())),
    }
}

pub fn log_source(config: &AppConfig, source: &ConfigSource) {
    match source {
        ConfigSource::Injected => log::info!("[CONFIG] Using API base '{}'", config.api_base()),
        ConfigSource::Missing => log::info!("[CONFIG] No {} found, using same origin", CONFIG_GLOBAL),
        ConfigSource::Malformed(e) => log::warn!("[CONFIG] Ignoring malformed {}: {}", CONFIG_GLOBAL, e),
    }
}
