// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{Config, Preferences, RuleConfig, SeoScoreToml};
use crate::error::{Result, SeoError};
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "seoscore.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config from the given file. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::new();
        if let Some(parsed) = io::read_toml(path)? {
            config.apply(parsed);
        }
        Ok(config)
    }

    /// Parses TOML content directly into this config.
    ///
    /// # Errors
    /// Returns error if the content is not valid `seoscore.toml`.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        let parsed = io::parse_toml(content, Path::new("<inline>"))?;
        self.apply(parsed);
        Ok(())
    }

    fn apply(&mut self, parsed: SeoScoreToml) {
        self.rules = parsed.rules;
        self.preferences = parsed.preferences;
    }

    /// Path of the post store, as configured.
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.preferences.store_path)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns error if a band is inverted or a threshold is unusable.
    pub fn validate(&self) -> Result<()> {
        self.rules.validate()
    }

    /// Writes the current settings to `seoscore.toml`.
    ///
    /// # Errors
    /// Returns error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        io::save_to_file(path, &self.rules, &self.preferences)
    }
}

impl RuleConfig {
    /// Validates the thresholds.
    ///
    /// # Errors
    /// Returns error describing the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.min_title_chars > self.max_title_chars {
            return Err(SeoError::InvalidConfig(format!(
                "min_title_chars ({}) exceeds max_title_chars ({})",
                self.min_title_chars, self.max_title_chars
            )));
        }
        if !self.min_density.is_finite() || !self.max_density.is_finite() {
            return Err(SeoError::InvalidConfig(
                "density bounds must be finite numbers".to_string(),
            ));
        }
        if self.min_density < 0.0 {
            return Err(SeoError::InvalidConfig(format!(
                "min_density ({}) must not be negative",
                self.min_density
            )));
        }
        if self.min_density > self.max_density {
            return Err(SeoError::InvalidConfig(format!(
                "min_density ({}) exceeds max_density ({})",
                self.min_density, self.max_density
            )));
        }
        if self.intro_words == 0 {
            return Err(SeoError::InvalidConfig(
                "intro_words must be at least 1".to_string(),
            ));
        }
        if self.heading_marker.is_empty() {
            return Err(SeoError::InvalidConfig(
                "heading_marker must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
