//! Configuration handling for the TUI

use crate::api::DEFAULT_ENDPOINT;
use crate::state::{Route, DEFAULT_DECLINE_URL};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment override for the submission endpoint
pub const ENDPOINT_ENV: &str = "LESSON_SIGNUP_ENDPOINT";
/// Environment override for the decline redirect
pub const DECLINE_URL_ENV: &str = "LESSON_SIGNUP_DECLINE_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Registration endpoint
    pub endpoint: Option<String>,
    /// Where declining the policy redirects to
    pub decline_url: Option<String>,
    /// Report any completed response as success, whatever its status code
    pub accept_any_status: Option<bool>,
    /// Initial route path ("/" or "/form")
    pub start_path: Option<String>,
    /// Exit instead of opening the decline URL
    pub quit_on_decline: Option<bool>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "lesson-signup", "lesson-signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config dir, then apply env overrides
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Load from an explicit file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Apply environment overrides through a lookup function
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.is_empty()) {
            self.endpoint = Some(endpoint);
        }
        if let Some(url) = lookup(DECLINE_URL_ENV).filter(|v| !v.is_empty()) {
            self.decline_url = Some(url);
        }
        self
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn decline_url(&self) -> &str {
        self.decline_url.as_deref().unwrap_or(DEFAULT_DECLINE_URL)
    }

    pub fn accept_any_status(&self) -> bool {
        self.accept_any_status.unwrap_or(false)
    }

    pub fn quit_on_decline(&self) -> bool {
        self.quit_on_decline.unwrap_or(false)
    }

    pub fn start_route(&self) -> Route {
        self.start_path
            .as_deref()
            .map(Route::from_path)
            .unwrap_or_default()
    }
}
