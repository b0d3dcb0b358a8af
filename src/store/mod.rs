// src/store/mod.rs
//! TOML-backed store of saved posts and their snapshot scores.

pub mod storage;
pub mod types;

pub use types::{Post, PostDraft, PostStore, StoreStats};
