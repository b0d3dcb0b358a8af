// src/analysis/checks.rs
//! The individual scoring rules. Each check is independent of the others.

mod density;
mod keyword;
mod structure;
mod title;

use crate::config::RuleConfig;

pub use density::check_density;
pub use keyword::{check_intro_keyword, check_title_keyword};
pub use structure::{check_content_length, check_subheadings};
pub use title::check_title_length;

/// Context for running checks on a single post.
pub struct CheckContext<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub keyword: &'a str,
    /// Lowercased comparison forms.
    pub title_lc: String,
    pub keyword_lc: String,
    pub words: Vec<&'a str>,
    pub config: &'a RuleConfig,
}

impl<'a> CheckContext<'a> {
    #[must_use]
    pub fn new(title: &'a str, content: &'a str, keyword: &'a str, config: &'a RuleConfig) -> Self {
        Self {
            title,
            content,
            keyword,
            title_lc: title.to_lowercase(),
            keyword_lc: keyword.to_lowercase(),
            words: super::text::words(content),
            config,
        }
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}
