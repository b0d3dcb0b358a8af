// src/bin/seoscore.rs
use clap::Parser;
use colored::Colorize;
use seoscore_core::cli::{dispatch, Cli};
use seoscore_core::exit::SeoExit;
use tracing_subscriber::EnvFilter;

fn main() -> SeoExit {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.command.is_none() {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        return SeoExit::Success;
    }

    match dispatch::execute(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            SeoExit::Error
        }
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SEOSCORE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
