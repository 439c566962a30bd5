//! Configuration file support
//!
//! Loads settings from ~/.fstyle.toml (or %USERPROFILE%\.fstyle.toml on Windows)
//!
//! Example:
//! ```text
//! # fstyle configuration
//! enabled = true
//! report-warnings = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::Result;

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether live highlighting of fstyle documents is on
    pub enabled: bool,
    /// Log ignored directive words at warn level instead of debug
    pub report_warnings: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            report_warnings: false,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".fstyle.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".fstyle.toml"))
        }
    }

    /// Load configuration from the default path, falling back to defaults
    /// when there is no home directory or no file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let settings: toml::Table = contents.parse()?;
        let mut config = Config::default();
        config.apply(&settings);
        Ok(config)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, settings: &toml::Table) {
        if let Some(value) = settings.get("enabled") {
            match value.as_bool() {
                Some(b) => self.enabled = b,
                None => warn!("config: 'enabled' expects a boolean, got {}", value),
            }
        }

        if let Some(value) = settings.get("report-warnings") {
            match value.as_bool() {
                Some(b) => self.report_warnings = b,
                None => warn!("config: 'report-warnings' expects a boolean, got {}", value),
            }
        }
    }

    /// Serialize in the config file format
    pub fn to_toml(&self) -> String {
        format!(
            "# fstyle configuration\n\
             enabled = {}\n\
             report-warnings = {}\n",
            self.enabled, self.report_warnings
        )
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_toml())?;
        Ok(())
    }
}
