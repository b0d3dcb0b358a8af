//! Routes parsed subcommands to their handlers.
//!
//! Every command except `init` runs against `seoscore.toml` with the
//! `--store` and `--no-color` overrides applied on top.

use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use crate::exit::SeoExit;
use anyhow::{Context, Result};
use std::path::Path;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the config is invalid or the command handler fails.
pub fn execute(cli: Cli) -> Result<SeoExit> {
    let Cli {
        command,
        config: config_path,
        store,
        no_color,
        ..
    } = cli;
    let Some(command) = command else {
        return Ok(SeoExit::Success);
    };
    let load = || load_config(&config_path, store.as_deref(), no_color);

    match command {
        Commands::Init { force } => handlers::handle_init(&config_path, force),
        Commands::Analyze {
            post,
            json,
            min_score,
        } => handlers::handle_analyze(&load()?, post, json, min_score),
        Commands::Save {
            id,
            shop,
            post,
            json,
        } => handlers::handle_save(&load()?, id, shop, post, json),
        Commands::List { json } => handlers::handle_list(&load()?, json),
        Commands::Show { id, json } => handlers::handle_show(&load()?, &id, json),
        Commands::Delete { id } => handlers::handle_delete(&load()?, &id),
        Commands::Stats { json } => handlers::handle_stats(&load()?, json),
        Commands::Rescore => handlers::handle_rescore(&load()?),
    }
}

fn load_config(path: &Path, store: Option<&Path>, no_color: bool) -> Result<Config> {
    let mut config =
        Config::load_from(path).with_context(|| format!("Failed to load {}", path.display()))?;
    if let Some(store) = store {
        config.preferences.store_path = store.to_string_lossy().into_owned();
    }
    config.validate()?;

    if !config.preferences.color || no_color {
        colored::control::set_override(false);
    }
    Ok(config)
}
