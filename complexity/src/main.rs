// complexity/src/main.rs
//! Complexity entry point.
//!
//! Parses the command line, configures logging and the theme, and dispatches
//! to the chosen subcommand.

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use complexity::cli::{Cli, Commands};
use complexity::commands::{self, batch, score};
use complexity::logger;
use complexity::ui::theme::{build_theme_map, default_theme_map};

fn run(cli: &Cli) -> Result<()> {
    let theme_map = build_theme_map(cli.theme.as_deref()).context("Theme error")?;

    match &cli.command {
        Commands::Score(cmd) => score::run_score(cmd, &theme_map),
        Commands::Batch(cmd) => batch::run_batch(cmd, &theme_map),
    }
}

fn main() {
    let cli = Cli::parse();
    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug, cli.disable_debug));
    debug!("Parsed arguments: {:?}", cli);

    if let Err(err) = run(&cli) {
        commands::error_msg(format!("{:#}", err), &default_theme_map());
        std::process::exit(1);
    }
}
