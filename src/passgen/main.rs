//! # Passgen CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! - `cli/setup.rs`: clap argument definitions and the version string
//! - `cli/commands.rs`: logging, config and API wiring
//! - `cli/render.rs`: the banner-framed output
//!
//! Exit codes: clap reports argument errors itself (status 2); a failed
//! generation prints `Error: ...` and exits with 1. Clipboard trouble is only
//! a warning and still exits with 0.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
