use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CONFIG_FILE;

#[derive(Parser)]
#[command(name = "seoscore", version, about = "Heuristic SEO scoring for blog drafts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Path to the configuration file
    #[arg(long, global = true, value_name = "FILE", default_value = CONFIG_FILE)]
    pub config: PathBuf,
    /// Post store file (overrides `preferences.store_path`)
    #[arg(long, global = true, value_name = "FILE", env = "SEOSCORE_STORE")]
    pub store: Option<PathBuf>,
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default seoscore.toml
    Init {
        #[arg(long, short)]
        force: bool,
    },
    /// Score a post and print the checklist
    Analyze {
        #[command(flatten)]
        post: PostArgs,
        #[arg(long)]
        json: bool,
        /// Exit with a non-zero code when the score is below this value
        #[arg(long, value_name = "SCORE", value_parser = clap::value_parser!(u8).range(0..=100))]
        min_score: Option<u8>,
    },
    /// Score a post and save it with its score
    Save {
        /// Update this post instead of creating a new one
        #[arg(long)]
        id: Option<String>,
        /// Shop the post belongs to
        #[arg(long, env = "SEOSCORE_SHOP")]
        shop: Option<String>,
        #[command(flatten)]
        post: PostArgs,
        #[arg(long)]
        json: bool,
    },
    /// List saved posts, newest first
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one saved post
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Delete a saved post
    Delete { id: String },
    /// Summarize stored scores
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Recompute stored scores with the current rules
    Rescore,
}

/// Where the title, content and keyword come from.
#[derive(Args, Debug, Clone, Default)]
pub struct PostArgs {
    #[arg(long, short, default_value = "")]
    pub title: String,
    #[arg(long, short, default_value = "")]
    pub keyword: String,
    /// Content text
    #[arg(long, short, conflicts_with = "content_file")]
    pub content: Option<String>,
    /// Read content from a file
    #[arg(long, value_name = "FILE")]
    pub content_file: Option<PathBuf>,
    /// Read a JSON object `{title, content, keyword}` from stdin
    #[arg(long, conflicts_with_all = ["title", "keyword", "content", "content_file"])]
    pub stdin: bool,
}
