// src/analysis/checks/density.rs
use crate::analysis::text;
use crate::types::{CheckResult, Rule};

use super::CheckContext;

/// Passes when keyword occurrences per hundred words fall inside the band.
#[must_use]
pub fn check_density(ctx: &CheckContext) -> CheckResult {
    let occurrences = text::count_occurrences(ctx.content, ctx.keyword);
    let density = text::density(occurrences, ctx.word_count());
    let (min, max) = (ctx.config.min_density, ctx.config.max_density);

    tracing::debug!(occurrences, words = ctx.word_count(), density, "keyword density");

    if density >= min && density <= max {
        CheckResult::pass(
            Rule::KeywordDensity,
            format!("Keyword density is good ({density:.1}%)"),
        )
    } else {
        CheckResult::fail(
            Rule::KeywordDensity,
            format!("Keyword density is {density:.1}% (target: {min}%-{max}%)"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;

    fn filler(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn inside_band_passes() {
        let config = RuleConfig::default();
        // 2 hits in 100 words = 2.0%
        let content = format!("coffee {} coffee", filler(98));
        let ctx = CheckContext::new("", &content, "coffee", &config);
        let check = check_density(&ctx);
        assert!(check.passed);
        assert_eq!(check.message, "Keyword density is good (2.0%)");
    }

    #[test]
    fn stuffing_fails() {
        let config = RuleConfig::default();
        let content = format!("coffee coffee coffee {}", filler(7));
        let ctx = CheckContext::new("", &content, "Coffee", &config);
        let check = check_density(&ctx);
        assert!(!check.passed);
        assert_eq!(check.message, "Keyword density is 30.0% (target: 0.5%-2.5%)");
    }

    #[test]
    fn band_edges_are_inclusive() {
        let config = RuleConfig::default();
        let cases = [
            (1, 199, true),  // 1/200 = 0.5%
            (1, 39, true),   // 1/40 = 2.5%
            (1, 200, false), // 1/201 just under 0.5%
            (3, 116, false), // 3/119 just over 2.5%
        ];
        for (hits, pad, expected) in cases {
            let content = format!("{} {}", vec!["coffee"; hits].join(" "), filler(pad));
            let ctx = CheckContext::new("", &content, "coffee", &config);
            assert_eq!(check_density(&ctx).passed, expected, "{hits} hits, {pad} filler");
        }
    }

    #[test]
    fn empty_content_is_zero_density() {
        let config = RuleConfig::default();
        let ctx = CheckContext::new("", "", "coffee", &config);
        let check = check_density(&ctx);
        assert!(!check.passed);
        assert!(check.message.starts_with("Keyword density is 0.0%"));
    }

    #[test]
    fn special_characters_match_literally() {
        let config = RuleConfig::default();
        let content = format!("C++ tips {}", filler(99));
        let ctx = CheckContext::new("", &content, "c++ tips", &config);
        assert!(check_density(&ctx).passed);
    }
}
