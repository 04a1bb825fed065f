//! # CLI Layer
//!
//! This module is the only place that knows about the terminal: it parses the
//! arguments, installs the log subscriber, reads the config, drives
//! [`PassGen`] and prints the outcome. Everything it calls returns plain
//! Rust values.

use super::render::print_outcome;
use super::setup::Cli;
use clap::Parser;
use passgen::api::{GenOptions, PassGen};
use passgen::clipboard::SystemClipboard;
use passgen::config::{self, PassgenConfig};
use passgen::error::Result;
use rand::rngs::OsRng;
use tracing::{debug, warn, Level};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config();
    let options = GenOptions {
        length: cli.length,
        copy: !cli.no_copy && config.copy_to_clipboard,
    };

    let clipboard = SystemClipboard::new(config.clipboard_timeout());
    debug!(platform = ?clipboard.platform(), "detected platform");

    let mut api = PassGen::new(clipboard, OsRng);
    let outcome = api.run(&options)?;
    print_outcome(&outcome);
    Ok(())
}

/// Logs go to stderr so stdout carries nothing but the password output.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// A missing or unreadable config never stops generation; defaults are used instead.
fn load_config() -> PassgenConfig {
    let Some(dir) = config::config_dir() else {
        debug!("no config directory available, using defaults");
        return PassgenConfig::default();
    };

    match PassgenConfig::load(&dir) {
        Ok(config) => {
            debug!(dir = %dir.display(), ?config, "loaded config");
            config
        }
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "ignoring unreadable config");
            PassgenConfig::default()
        }
    }
}
