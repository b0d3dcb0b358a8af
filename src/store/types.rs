// src/store/types.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::AnalysisInput;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PostStore {
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// A saved post with the score it had when it was saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop: Option<String>,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub keyword: String,
    /// Snapshot of the analyzer score at save time.
    #[serde(default)]
    pub score: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    #[must_use]
    pub fn as_input(&self) -> AnalysisInput {
        AnalysisInput::new(&self.title, &self.content, &self.keyword)
    }
}

/// Fields supplied by the editor when saving.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub keyword: String,
    pub score: u8,
}

/// Dashboard aggregates over stored scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoreStats {
    pub count: usize,
    pub average_score: Option<f64>,
    pub best_score: Option<u8>,
    pub worst_score: Option<u8>,
}
