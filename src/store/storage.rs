// src/store/storage.rs
use super::types::{Post, PostDraft, PostStore, StoreStats};
use crate::analysis::Analyzer;
use crate::error::{Result, SeoError};
use chrono::Utc;
use std::fs;
use std::path::Path;

impl PostStore {
    /// Loads the post store from disk. A missing file is an empty store.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or the TOML is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "post store not found, starting empty");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SeoError::io(e, path))?;

        toml::from_str(&content).map_err(|source| SeoError::TomlParse {
            source,
            path: path.to_path_buf(),
        })
    }

    /// Saves the post store to disk atomically (temp file + rename).
    ///
    /// # Errors
    /// Returns error if serialization or write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        atomic_write(path, &content)?;
        tracing::info!(path = %path.display(), posts = self.posts.len(), "saved post store");
        Ok(())
    }

    /// Creates a new post with a fresh id and timestamps.
    ///
    /// # Errors
    /// Returns error if the title is empty.
    pub fn create(&mut self, shop: Option<String>, draft: PostDraft) -> Result<&Post> {
        if draft.title.is_empty() {
            return Err(SeoError::MissingTitle);
        }

        let now = Utc::now();
        let post = Post {
            id: uuid::Uuid::new_v4().to_string(),
            shop,
            title: draft.title,
            content: draft.content,
            keyword: draft.keyword,
            score: draft.score,
            created_at: now,
            updated_at: now,
        };
        tracing::info!(id = %post.id, score = post.score, "created post");

        self.posts.push(post);
        let idx = self.posts.len() - 1;
        Ok(&self.posts[idx])
    }

    /// Replaces the editable fields of an existing post.
    ///
    /// A post saved under a shop only accepts updates from that shop. Posts
    /// saved without a shop accept updates from any caller.
    ///
    /// # Errors
    /// Returns error if the title is empty, the post does not exist, or it
    /// belongs to a different shop.
    pub fn update(&mut self, id: &str, shop: Option<&str>, draft: PostDraft) -> Result<&Post> {
        if draft.title.is_empty() {
            return Err(SeoError::MissingTitle);
        }

        let post = self.find_post_mut(id)?;
        if post.shop.is_some() && post.shop.as_deref() != shop {
            return Err(SeoError::ShopMismatch { id: id.to_string() });
        }

        post.title = draft.title;
        post.content = draft.content;
        post.keyword = draft.keyword;
        post.score = draft.score;
        post.updated_at = Utc::now();
        tracing::info!(id, score = post.score, "updated post");

        Ok(post)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Removes a post.
    ///
    /// # Errors
    /// Returns error if no post has this id.
    pub fn delete(&mut self, id: &str) -> Result<Post> {
        let idx = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| SeoError::PostNotFound(id.to_string()))?;
        tracing::info!(id, "deleted post");
        Ok(self.posts.remove(idx))
    }

    /// All posts, newest first. Posts created in the same instant keep
    /// reverse insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().rev().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    #[must_use]
    pub fn stats(&self) -> StoreStats {
        let scores: Vec<u8> = self.posts.iter().map(|p| p.score).collect();
        if scores.is_empty() {
            return StoreStats::default();
        }

        let total: u64 = scores.iter().map(|&s| u64::from(s)).sum();
        #[allow(clippy::cast_precision_loss)]
        let average = total as f64 / scores.len() as f64;

        StoreStats {
            count: scores.len(),
            average_score: Some(average),
            best_score: scores.iter().copied().max(),
            worst_score: scores.iter().copied().min(),
        }
    }

    /// Recomputes every stored score with `analyzer`. Returns how many changed.
    pub fn rescore(&mut self, analyzer: &Analyzer) -> usize {
        let inputs: Vec<_> = self.posts.iter().map(Post::as_input).collect();
        let results = analyzer.analyze_batch(&inputs);

        let mut changed = 0;
        for (post, result) in self.posts.iter_mut().zip(results) {
            if post.score != result.score {
                tracing::debug!(id = %post.id, from = post.score, to = result.score, "rescored");
                post.score = result.score;
                post.updated_at = Utc::now();
                changed += 1;
            }
        }
        changed
    }

    fn find_post_mut(&mut self, id: &str) -> Result<&mut Post> {
        self.posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| SeoError::PostNotFound(id.to_string()))
    }
}

fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("toml.tmp");

    fs::write(&temp_path, content).map_err(|e| SeoError::io(e, &temp_path))?;
    fs::rename(&temp_path, path).map_err(|e| SeoError::io(e, path))?;

    Ok(())
}
