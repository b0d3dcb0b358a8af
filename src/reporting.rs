//! Console output for analysis results and the post store.
//!
//! The checklist is printed in rule order with a pass/fail icon per row.
//! Failed rows carry a short tip on how to fix them.

use crate::store::{Post, StoreStats};
use crate::types::{AnalysisResult, CheckResult, Rule};
use colored::Colorize;
use std::fmt::Write;

const GAUGE_WIDTH: usize = 20;

/// Returns a one-line fix tip for a failed rule.
#[must_use]
pub fn guidance(rule: Rule) -> &'static str {
    match rule {
        Rule::TitleKeyword => "Work the exact keyword phrase into the title.",
        Rule::TitleLength => "Keep the title short enough to show in full on results pages.",
        Rule::KeywordDensity => "Use the keyword naturally: a few times per few hundred words, not every sentence.",
        Rule::ContentLength => "Expand the post; longer articles cover the topic in more depth.",
        Rule::IntroKeyword => "Mention the keyword early so readers and crawlers see the topic up front.",
        Rule::Subheadings => "Break the post into sections with markdown headings.",
    }
}

/// Renders the score as a fixed-width bar, e.g. `[##########----------]  50/100`.
#[must_use]
pub fn gauge(score: u8) -> String {
    let max = Rule::max_score();
    let filled = usize::from(score.min(max)) * GAUGE_WIDTH / usize::from(max);
    format!(
        "[{}{}] {score:>3}/{max}",
        "#".repeat(filled),
        "-".repeat(GAUGE_WIDTH - filled)
    )
}

fn colored_gauge(score: u8) -> String {
    let bar = gauge(score);
    match score {
        80..=u8::MAX => bar.green().bold().to_string(),
        50..=79 => bar.yellow().bold().to_string(),
        _ => bar.red().bold().to_string(),
    }
}

fn format_check(out: &mut String, check: &CheckResult) {
    let icon = if check.passed {
        "✓".green()
    } else {
        "✗".red()
    };
    let points = format!("+{}", check.points());
    let _ = writeln!(
        out,
        "  {icon} {:<24} {:>4}  {}",
        check.rule.label(),
        points.dimmed(),
        check.message
    );
    if !check.passed {
        let _ = writeln!(out, "      {} {}", "tip:".cyan(), guidance(check.rule));
    }
}

/// Formats the gauge and checklist for one analysis.
#[must_use]
pub fn format_analysis(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", "SEO Score".bold(), colored_gauge(result.score));

    if result.is_empty() {
        let _ = writeln!(
            out,
            "  {}",
            "Set a target keyword to run the checklist.".dimmed()
        );
        return out;
    }

    for check in &result.checks {
        format_check(&mut out, check);
    }
    let _ = writeln!(
        out,
        "\n  {} of {} checks passed",
        result.passed_count(),
        result.checks.len()
    );
    out
}

pub fn print_analysis(result: &AnalysisResult) {
    print!("{}", format_analysis(result));
}

fn excerpt(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}

pub fn print_post_list(posts: &[&Post]) {
    if posts.is_empty() {
        println!("{}", "No saved posts.".dimmed());
        return;
    }
    for post in posts {
        println!(
            "{}  {:>3}  {}  {}",
            post.id.dimmed(),
            post.score.to_string().bold(),
            excerpt(&post.title, 48),
            format!("[{}]", post.keyword).cyan()
        );
    }
}

pub fn print_post(post: &Post) {
    println!("{}", post.title.bold());
    println!("   id:       {}", post.id);
    if let Some(shop) = &post.shop {
        println!("   shop:     {shop}");
    }
    println!("   keyword:  {}", post.keyword);
    println!("   score:    {}", colored_gauge(post.score));
    println!("   created:  {}", post.created_at.to_rfc3339());
    println!("   updated:  {}", post.updated_at.to_rfc3339());
    println!();
    println!("{}", post.content);
}

/// Formats the dashboard summary.
#[must_use]
pub fn format_stats(stats: &StoreStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "SEO Dashboard".bold());
    let _ = writeln!(out, "   Posts:   {}", stats.count);
    match stats.average_score {
        Some(avg) => {
            let _ = writeln!(out, "   Average: {avg:.1}");
        }
        None => {
            let _ = writeln!(out, "   Average: n/a");
        }
    }
    if let (Some(best), Some(worst)) = (stats.best_score, stats.worst_score) {
        let _ = writeln!(out, "   Best:    {best}");
        let _ = writeln!(out, "   Worst:   {worst}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_scales_to_width() {
        assert_eq!(gauge(0), "[--------------------]   0/100");
        assert_eq!(gauge(50), "[##########----------]  50/100");
        assert_eq!(gauge(100), "[####################] 100/100");
    }

    #[test]
    fn excerpt_truncates_on_chars() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("ééééé", 3), "éé…");
    }

    #[test]
    fn analysis_lists_every_check() {
        colored::control::set_override(false);
        let result = crate::analysis::analyze("Coffee", "plain", "coffee");
        let text = format_analysis(&result);
        for rule in Rule::ALL {
            assert!(text.contains(rule.label()), "missing {rule}");
        }
        assert!(text.contains("tip:"));
    }

    #[test]
    fn empty_stats_show_na() {
        colored::control::set_override(false);
        let text = format_stats(&StoreStats::default());
        assert!(text.contains("Average: n/a"));
        assert!(!text.contains("Best"));
    }
}
