//! Configuration
//!
//! Defaults for the CLI, stored in `~/.config/nested/config.toml`:
//!
//! ```toml
//! [defaults]
//! layout = "%d/%m/%Y"
//! strict = true
//! ```
//!
//! ## Priority Order (highest to lowest)
//!
//! 1. CLI flags
//! 2. Environment variables (`NESTED_LAYOUT`, `NESTED_STRICT`)
//! 3. Config file
//! 4. Defaults (RFC 3339, lenient)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NestedError, Result};
use crate::layout::TimeLayout;
use crate::resolve::Mode;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NestedConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Defaults {
    /// Timestamp layout name or strftime format
    pub layout: Option<String>,

    /// Require every path segment to be consumed
    pub strict: Option<bool>,
}

impl NestedConfig {
    /// Returns `~/.config/nested/` on Unix, `%APPDATA%/nested/` on Windows
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nested")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`
    ///
    /// Returns default config if file doesn't exist.
    /// Returns error if file exists but is malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| NestedError::ConfigError {
            reason: format!("Failed to read config file: {}", e),
        })?;

        toml::from_str(&content).map_err(|e| NestedError::ConfigError {
            reason: format!("Failed to parse config file: {}", e),
        })
    }

    /// Merge with environment variables
    ///
    /// Environment variables take precedence over config file values.
    pub fn with_env(self) -> Self {
        self.with_vars(|key| std::env::var(key).ok())
    }

    fn with_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(layout) = var("NESTED_LAYOUT") {
            self.defaults.layout = Some(layout);
        }
        if let Some(strict) = var("NESTED_STRICT") {
            self.defaults.strict = Some(matches!(
                strict.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            ));
        }
        self
    }

    pub fn layout(&self) -> TimeLayout {
        self.defaults
            .layout
            .as_deref()
            .map(TimeLayout::from_name)
            .unwrap_or_default()
    }

    pub fn mode(&self) -> Mode {
        if self.defaults.strict.unwrap_or(false) {
            Mode::Strict
        } else {
            Mode::Lenient
        }
    }
}
