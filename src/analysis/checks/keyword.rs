// src/analysis/checks/keyword.rs
//! Keyword placement: title and introduction.

use crate::analysis::text;
use crate::types::{CheckResult, Rule};

use super::CheckContext;

/// Passes when the title contains the keyword, ignoring case.
#[must_use]
pub fn check_title_keyword(ctx: &CheckContext) -> CheckResult {
    if ctx.title_lc.contains(&ctx.keyword_lc) {
        CheckResult::pass(Rule::TitleKeyword, "Keyword found in title".to_string())
    } else {
        CheckResult::fail(
            Rule::TitleKeyword,
            format!("Keyword \"{}\" is missing from the title", ctx.keyword),
        )
    }
}

/// Passes when the keyword appears within the opening words of the content.
#[must_use]
pub fn check_intro_keyword(ctx: &CheckContext) -> CheckResult {
    let limit = ctx.config.intro_words;
    let intro = text::introduction(&ctx.words, limit);

    if intro.contains(&ctx.keyword_lc) {
        CheckResult::pass(
            Rule::IntroKeyword,
            format!("Keyword appears in the first {limit} words"),
        )
    } else {
        CheckResult::fail(
            Rule::IntroKeyword,
            format!("Keyword is missing from the introduction (first {limit} words)"),
        )
    }
}
