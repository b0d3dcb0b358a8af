// src/analysis/checks/title.rs
use crate::types::{CheckResult, Rule};

use super::CheckContext;

/// Passes when the title's character count sits inside the configured band.
#[must_use]
pub fn check_title_length(ctx: &CheckContext) -> CheckResult {
    let len = ctx.title.chars().count();
    let (min, max) = (ctx.config.min_title_chars, ctx.config.max_title_chars);

    if (min..=max).contains(&len) {
        CheckResult::pass(
            Rule::TitleLength,
            format!("Title length is optimal ({len} chars)"),
        )
    } else {
        CheckResult::fail(
            Rule::TitleLength,
            format!("Title length is {len} chars (target: {min}-{max})"),
        )
    }
}
