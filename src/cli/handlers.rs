// src/cli/handlers.rs
//! Subcommand handlers. Thin glue between the CLI, the analyzer and the store.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::PostArgs;
use crate::analysis::Analyzer;
use crate::config::Config;
use crate::error::SeoError;
use crate::exit::SeoExit;
use crate::reporting;
use crate::store::{PostDraft, PostStore};
use crate::types::AnalysisInput;

impl PostArgs {
    /// Resolves the arguments into an analyzer input.
    ///
    /// # Errors
    /// Returns error if the content file or stdin cannot be read, or stdin is
    /// not a JSON object.
    pub fn into_input(self) -> Result<AnalysisInput> {
        if self.stdin {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read stdin")?;
            return parse_input_json(&raw);
        }

        let content = match (self.content, self.content_file) {
            (Some(text), _) => text,
            (None, Some(path)) => fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            (None, None) => String::new(),
        };

        Ok(AnalysisInput {
            title: self.title,
            content,
            keyword: self.keyword,
        })
    }
}

/// Parses the JSON request body shape `{ "title", "content", "keyword" }`.
///
/// # Errors
/// Returns error if the text is not a JSON object of strings.
pub fn parse_input_json(raw: &str) -> Result<AnalysisInput> {
    serde_json::from_str(raw).context("Expected a JSON object with title, content and keyword")
}

/// Writes a default config file.
///
/// # Errors
/// Returns error if the file exists (without `force`) or cannot be written.
pub fn handle_init(config_path: &Path, force: bool) -> Result<SeoExit> {
    if config_path.exists() && !force {
        eprintln!(
            "{} {} already exists (use --force to overwrite)",
            "warn:".yellow(),
            config_path.display()
        );
        return Ok(SeoExit::InvalidInput);
    }
    Config::new().save(config_path)?;
    println!("{} Wrote {}", "✓".green(), config_path.display());
    Ok(SeoExit::Success)
}

/// Scores one post.
///
/// # Errors
/// Returns error if the input cannot be read or JSON output fails.
pub fn handle_analyze(
    config: &Config,
    post: PostArgs,
    json: bool,
    min_score: Option<u8>,
) -> Result<SeoExit> {
    let input = post.into_input()?;
    let result = Analyzer::new(config.rules.clone()).analyze(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        reporting::print_analysis(&result);
    }

    match min_score {
        Some(min) if result.score < min => {
            tracing::info!(score = result.score, min, "score below threshold");
            Ok(SeoExit::BelowThreshold)
        }
        _ => Ok(SeoExit::Success),
    }
}

/// Scores a post and persists it with its score snapshot.
///
/// # Errors
/// Returns error if reading input, loading or saving the store fails.
pub fn handle_save(
    config: &Config,
    id: Option<String>,
    shop: Option<String>,
    post: PostArgs,
    json: bool,
) -> Result<SeoExit> {
    let input = post.into_input()?;
    let result = Analyzer::new(config.rules.clone()).analyze(&input);
    let draft = PostDraft {
        title: input.title,
        content: input.content,
        keyword: input.keyword,
        score: result.score,
    };

    let path = config.store_path();
    let mut store = PostStore::load(&path)?;

    let saved = match id {
        Some(id) => store.update(&id, shop.as_deref(), draft),
        None => store.create(shop, draft),
    };
    let post = match saved {
        Ok(post) => post.clone(),
        Err(e) => return report_invalid(e),
    };
    store.save(&path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        println!(
            "{} Saved {} (score {})",
            "✓".green(),
            post.id.bold(),
            post.score
        );
    }
    Ok(SeoExit::Success)
}

/// # Errors
/// Returns error if the store cannot be loaded.
pub fn handle_list(config: &Config, json: bool) -> Result<SeoExit> {
    let store = PostStore::load(&config.store_path())?;
    let posts = store.list();
    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
    } else {
        reporting::print_post_list(&posts);
    }
    Ok(SeoExit::Success)
}

/// # Errors
/// Returns error if the store cannot be loaded.
pub fn handle_show(config: &Config, id: &str, json: bool) -> Result<SeoExit> {
    let store = PostStore::load(&config.store_path())?;
    let Some(post) = store.get(id) else {
        return report_invalid(SeoError::PostNotFound(id.to_string()));
    };
    if json {
        println!("{}", serde_json::to_string_pretty(post)?);
    } else {
        reporting::print_post(post);
    }
    Ok(SeoExit::Success)
}

/// # Errors
/// Returns error if the store cannot be loaded or saved.
pub fn handle_delete(config: &Config, id: &str) -> Result<SeoExit> {
    let path = config.store_path();
    let mut store = PostStore::load(&path)?;
    if let Err(e) = store.delete(id) {
        return report_invalid(e);
    }
    store.save(&path)?;
    println!("{} Deleted {id}", "✓".green());
    Ok(SeoExit::Success)
}

/// # Errors
/// Returns error if the store cannot be loaded.
pub fn handle_stats(config: &Config, json: bool) -> Result<SeoExit> {
    let store = PostStore::load(&config.store_path())?;
    let stats = store.stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", reporting::format_stats(&stats));
    }
    Ok(SeoExit::Success)
}

/// # Errors
/// Returns error if the store cannot be loaded or saved.
pub fn handle_rescore(config: &Config) -> Result<SeoExit> {
    let path = config.store_path();
    let mut store = PostStore::load(&path)?;
    let changed = store.rescore(&Analyzer::new(config.rules.clone()));
    if changed > 0 {
        store.save(&path)?;
    }
    println!(
        "{} Rescored {} posts ({changed} changed)",
        "✓".green(),
        store.posts.len()
    );
    Ok(SeoExit::Success)
}

fn report_invalid(e: SeoError) -> Result<SeoExit> {
    eprintln!("{} {e}", "error:".red().bold());
    Ok(SeoExit::InvalidInput)
}
