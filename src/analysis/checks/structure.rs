// src/analysis/checks/structure.rs
//! Document shape: overall length and subheading usage.

use crate::types::{CheckResult, Rule};

use super::CheckContext;

/// Passes when the content has more words than the configured minimum.
#[must_use]
pub fn check_content_length(ctx: &CheckContext) -> CheckResult {
    let count = ctx.word_count();
    let min = ctx.config.min_content_words;

    if count > min {
        CheckResult::pass(
            Rule::ContentLength,
            format!("Content length is good ({count} words)"),
        )
    } else {
        CheckResult::fail(
            Rule::ContentLength,
            format!("Content is {count} words, below the {min}-word threshold"),
        )
    }
}

/// Passes when the heading marker appears anywhere in the content.
///
/// This is a plain substring test, not markdown parsing: `"## "` and a
/// `"# "` in the middle of a line both count.
#[must_use]
pub fn check_subheadings(ctx: &CheckContext) -> CheckResult {
    let marker = ctx.config.heading_marker.as_str();

    if ctx.content.contains(marker) {
        CheckResult::pass(Rule::Subheadings, "Subheadings detected".to_string())
    } else {
        CheckResult::fail(
            Rule::Subheadings,
            format!("No subheadings detected (use \"{marker}\" headings)"),
        )
    }
}
