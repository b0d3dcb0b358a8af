// src/analysis/mod.rs
//! Scores a post's title and body against a target keyword.
//!
//! `analyze` is a pure function of its three inputs. It never fails: empty
//! strings, whitespace-free content and pattern-special keywords are all
//! handled as ordinary input.

pub mod checks;
pub mod text;

use crate::config::RuleConfig;
use crate::types::{AnalysisInput, AnalysisResult, CheckResult};
use rayon::prelude::*;

use checks::CheckContext;

/// Scores a post against the default rule thresholds.
#[must_use]
pub fn analyze(title: &str, content: &str, keyword: &str) -> AnalysisResult {
    Analyzer::default().analyze_text(title, content, keyword)
}

#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: RuleConfig,
}

impl Analyzer {
    #[must_use]
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn analyze(&self, input: &AnalysisInput) -> AnalysisResult {
        self.analyze_text(&input.title, &input.content, &input.keyword)
    }

    /// Runs every rule in order and sums the points of those that pass.
    #[must_use]
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(title_len = title.len(), content_len = content.len(), keyword_len = keyword.len())
    )]
    pub fn analyze_text(&self, title: &str, content: &str, keyword: &str) -> AnalysisResult {
        if keyword.is_empty() {
            tracing::debug!("no keyword, skipping analysis");
            return AnalysisResult::empty();
        }

        let ctx = CheckContext::new(title, content, keyword, &self.config);
        let checks: Vec<CheckResult> = vec![
            checks::check_title_keyword(&ctx),
            checks::check_title_length(&ctx),
            checks::check_density(&ctx),
            checks::check_content_length(&ctx),
            checks::check_intro_keyword(&ctx),
            checks::check_subheadings(&ctx),
        ];

        for check in &checks {
            tracing::debug!(rule = %check.rule, passed = check.passed, "{}", check.message);
        }

        let result = AnalysisResult::from_checks(checks);
        tracing::debug!(score = result.score, "analysis complete");
        result
    }

    /// Scores many posts in parallel. Output order matches input order.
    #[must_use]
    pub fn analyze_batch(&self, inputs: &[AnalysisInput]) -> Vec<AnalysisResult> {
        inputs.par_iter().map(|input| self.analyze(input)).collect()
    }
}
