//! Build-time application configuration.
//!
//! A browser bundle has no environment to read at runtime, so
//! configuration is baked in when the WASM module is compiled:
//! `ECOCYCLE_API_BASE` and `ECOCYCLE_LOG` are read with `option_env!`
//! and fall back to local-development defaults.

const DEFAULT_API_BASE: &str = "http://localhost:8000/api";
const DEFAULT_LOG_FILTER: &str = "info";

/// Application configuration fixed at compile time.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the EcoCycle REST API.
    pub api_base: String,

    /// Tracing filter directive for the console subscriber.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration baked in at build time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            api_base: option_env!("ECOCYCLE_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .to_string(),
            log_filter: option_env!("ECOCYCLE_LOG")
                .unwrap_or(DEFAULT_LOG_FILTER)
                .to_string(),
        }
    }
}
