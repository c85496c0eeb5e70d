// complexity/src/logger.rs
//! Logger setup for the `complexity` binary.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs `env_logger`.
///
/// With `Some(level)` the `complexity` crates log at that level regardless of
/// `RUST_LOG`; with `None` the environment decides and the default is `warn`.
/// Calling this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));

    if let Some(level) = level {
        builder
            .filter_module("complexity", level)
            .filter_module("complexity_core", level);
    }

    builder.format_timestamp(None).format_target(false);

    // A second initialisation (e.g. from tests) is expected and ignored.
    let _ = builder.try_init();
}

/// Resolves the global logging flags into a level override.
///
/// `--quiet` wins over everything, then `--disable-debug`, then `--debug`.
pub fn level_from_flags(quiet: bool, debug: bool, disable_debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Error)
    } else if disable_debug {
        Some(LevelFilter::Info)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}
