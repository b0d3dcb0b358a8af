// src/config/io.rs
use super::types::{Preferences, RuleConfig, SeoScoreToml};
use crate::error::{Result, SeoError};
use std::fs;
use std::path::Path;

/// Reads and parses a config file. Returns `None` if it does not exist.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn read_toml(path: &Path) -> Result<Option<SeoScoreToml>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|e| SeoError::io(e, path))?;
    let parsed = parse_toml(&content, path)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(Some(parsed))
}

/// Parses `seoscore.toml` content.
///
/// # Errors
/// Returns error if the TOML is invalid.
pub fn parse_toml(content: &str, origin: &Path) -> Result<SeoScoreToml> {
    toml::from_str(content).map_err(|source| SeoError::TomlParse {
        source,
        path: origin.to_path_buf(),
    })
}

/// Writes the given settings as `seoscore.toml`.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn save_to_file(path: &Path, rules: &RuleConfig, prefs: &Preferences) -> Result<()> {
    let toml_struct = SeoScoreToml {
        rules: rules.clone(),
        preferences: prefs.clone(),
    };
    let content = toml::to_string_pretty(&toml_struct)?;
    fs::write(path, content).map_err(|e| SeoError::io(e, path))
}
