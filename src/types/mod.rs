use serde::{Deserialize, Serialize};

/// One scoring rule of the analyzer, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    TitleKeyword,
    TitleLength,
    KeywordDensity,
    ContentLength,
    IntroKeyword,
    Subheadings,
}

impl Rule {
    /// Every rule, in the order checks are reported.
    pub const ALL: [Rule; 6] = [
        Self::TitleKeyword,
        Self::TitleLength,
        Self::KeywordDensity,
        Self::ContentLength,
        Self::IntroKeyword,
        Self::Subheadings,
    ];

    /// Points awarded when the rule passes.
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::TitleKeyword | Self::KeywordDensity | Self::ContentLength => 20,
            Self::TitleLength => 10,
            Self::IntroKeyword | Self::Subheadings => 15,
        }
    }

    /// Stable identifier used in JSON output.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::TitleKeyword => "title-keyword",
            Self::TitleLength => "title-length",
            Self::KeywordDensity => "keyword-density",
            Self::ContentLength => "content-length",
            Self::IntroKeyword => "intro-keyword",
            Self::Subheadings => "subheadings",
        }
    }

    /// Short human label for the checklist.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TitleKeyword => "Keyword in title",
            Self::TitleLength => "Title length",
            Self::KeywordDensity => "Keyword density",
            Self::ContentLength => "Content length",
            Self::IntroKeyword => "Keyword in introduction",
            Self::Subheadings => "Subheadings",
        }
    }

    /// Sum of all rule weights.
    #[must_use]
    pub fn max_score() -> u8 {
        Self::ALL.iter().map(|r| r.weight()).sum()
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A single row of the SEO checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub rule: Rule,
    pub passed: bool,
    pub message: String,
}

impl CheckResult {
    #[must_use]
    pub fn pass(rule: Rule, message: String) -> Self {
        Self {
            rule,
            passed: true,
            message,
        }
    }

    #[must_use]
    pub fn fail(rule: Rule, message: String) -> Self {
        Self {
            rule,
            passed: false,
            message,
        }
    }

    /// Points this check contributes to the score.
    #[must_use]
    pub fn points(&self) -> u8 {
        if self.passed {
            self.rule.weight()
        } else {
            0
        }
    }
}

/// What the editor hands the analyzer: the post as currently typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub keyword: String,
}

impl AnalysisInput {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        keyword: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            keyword: keyword.into(),
        }
    }
}

/// Score and checklist for one post. Recomputed on every call, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u8,
    pub checks: Vec<CheckResult>,
}

impl AnalysisResult {
    /// Result for a post with no target keyword: nothing evaluated.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a result whose score is the sum of passed weights.
    #[must_use]
    pub fn from_checks(checks: Vec<CheckResult>) -> Self {
        let score = checks.iter().map(CheckResult::points).sum();
        Self { score, checks }
    }

    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.score == Rule::max_score()
    }

    /// Returns `true` when no rule was evaluated (empty keyword).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}
