use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_store_path")]
    pub store_path: String,
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            color: true,
        }
    }
}

fn default_store_path() -> String { "posts.toml".to_string() }

/// Thresholds the analyzer checks against. Weights are not configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default = "default_min_title")]
    pub min_title_chars: usize,
    #[serde(default = "default_max_title")]
    pub max_title_chars: usize,
    /// Lower bound of the keyword density band, in percent.
    #[serde(default = "default_min_density")]
    pub min_density: f64,
    /// Upper bound of the keyword density band, in percent.
    #[serde(default = "default_max_density")]
    pub max_density: f64,
    /// Content must have strictly more words than this.
    #[serde(default = "default_min_words")]
    pub min_content_words: usize,
    #[serde(default = "default_intro_words")]
    pub intro_words: usize,
    #[serde(default = "default_heading_marker")]
    pub heading_marker: String,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            min_title_chars: default_min_title(),
            max_title_chars: default_max_title(),
            min_density: default_min_density(),
            max_density: default_max_density(),
            min_content_words: default_min_words(),
            intro_words: default_intro_words(),
            heading_marker: default_heading_marker(),
        }
    }
}

const fn default_true() -> bool { true }
const fn default_min_title() -> usize { 4 }
const fn default_max_title() -> usize { 60 }
const fn default_min_density() -> f64 { 0.5 }
const fn default_max_density() -> f64 { 2.5 }
const fn default_min_words() -> usize { 300 }
const fn default_intro_words() -> usize { 100 }

fn default_heading_marker() -> String { "# ".to_string() }

/// On-disk shape of `seoscore.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SeoScoreToml {
    #[serde(default)]
    pub rules: RuleConfig,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub rules: RuleConfig,
    pub preferences: Preferences,
}
