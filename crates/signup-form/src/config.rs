//! Form configuration

use crate::error::{FormError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default submission endpoint
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Default storage key for the draft blob
pub const DEFAULT_STORAGE_KEY: &str = "signup-draft";

/// Default dialing prefix used by the phone normalizer
pub const DEFAULT_COUNTRY_CODE: &str = "+358";

/// Default phone pattern
pub const DEFAULT_PHONE_PATTERN: &str = r"^\+?[0-9\s\-()]{7,20}$";

/// Signup form configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Submission endpoint URL
    pub endpoint: String,
    /// Request timeout for submissions
    pub request_timeout_secs: u64,
    /// Quiescence window for live field validation
    pub validation_debounce_ms: u64,
    /// Quiescence window for draft autosave
    pub autosave_debounce_ms: u64,
    /// Key the draft is stored under
    pub storage_key: String,
    /// Prefix substituted for a leading trunk `0`
    pub country_code: String,
    /// Pattern a non-empty phone value must match
    pub phone_pattern: String,
    /// Logging level
    pub log_level: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            request_timeout_secs: 10,
            validation_debounce_ms: 150,
            autosave_debounce_ms: 300,
            storage_key: DEFAULT_STORAGE_KEY.into(),
            country_code: DEFAULT_COUNTRY_CODE.into(),
            phone_pattern: DEFAULT_PHONE_PATTERN.into(),
            log_level: "info".into(),
        }
    }
}

impl FormConfig {
    /// Parse from TOML text; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    /// Load from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Live validation window
    pub fn validation_window(&self) -> Duration {
        Duration::from_millis(self.validation_debounce_ms)
    }

    /// Autosave window
    pub fn autosave_window(&self) -> Duration {
        Duration::from_millis(self.autosave_debounce_ms)
    }

    /// Submission request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn check(&self) -> Result<()> {
        if self.storage_key.is_empty() {
            return Err(FormError::Config("storage_key must not be empty".into()));
        }
        if !self.country_code.starts_with('+')
            || self.country_code.len() < 2
            || !self.country_code[1..].chars().all(|c| c.is_ascii_digit())
        {
            return Err(FormError::Config(format!(
                "country_code must look like +358, got {:?}",
                self.country_code
            )));
        }
        Ok(())
    }
}
