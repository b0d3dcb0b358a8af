//! Heuristic on-page SEO scoring for blog drafts.
//!
//! The core is [`analysis::analyze`]: a pure function from a post's title,
//! content and target keyword to a 0-100 score and an ordered checklist.
//! Around it sit a TOML post store that snapshots scores at save time and a
//! small CLI.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod reporting;
pub mod store;
pub mod types;

pub use analysis::{analyze, Analyzer};
pub use types::{AnalysisInput, AnalysisResult, CheckResult, Rule};
