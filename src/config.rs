//! Application configuration
//!
//! Read once at startup from environment variables, with defaults for
//! anything unset or invalid.

use std::env;
use std::path::PathBuf;

use crate::state::FileSettingsStore;

/// Base URL of the analysis service when `ESG_API_BASE_URL` is not set
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL the agent run paths are appended to
    pub api_base_url: String,
    /// Location of the persisted workspace settings
    pub settings_path: PathBuf,
    /// Optional font file registered as a fallback for Hangul text
    pub font_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            settings_path: FileSettingsStore::default_path(),
            font_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("ESG_API_BASE_URL")
                .ok()
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            settings_path: env::var_os("ESG_SETTINGS_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.settings_path),
            font_path: env::var_os("ESG_FONT_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }
}
