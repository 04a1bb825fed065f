//! # Passgen Architecture
//!
//! Passgen generates a random password from a fixed character pool, hands it
//! to the system clipboard, and lets the caller decide how to show it. The
//! library never prints; the `passgen` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging and config             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - PassGen composes a Clipboard and a random source         │
//! │  - Returns a structured GenOutcome                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (pool.rs, sampler.rs, clipboard.rs)                   │
//! │  - Character pool, sampling with replacement                │
//! │  - Platform dispatch to external clipboard tools            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Randomness
//!
//! Every function that needs randomness takes the generator as an argument.
//! The binary passes `rand::rngs::OsRng`; tests pass a seeded `StdRng` so
//! output is reproducible.
//!
//! ## Clipboard failures
//!
//! Clipboard problems never abort generation. The API turns any clipboard
//! error into [`api::ClipboardStatus::Failed`] and the CLI reports it as a
//! warning while still exiting successfully.
//!
//! ## Module Overview
//!
//! - [`api`]: `PassGen`, the entry point for generating (and copying) a password
//! - [`pool`]: the fixed character pool and its shuffle
//! - [`sampler`]: uniform sampling with replacement
//! - [`clipboard`]: the `Clipboard` trait and the platform-dispatching implementation
//! - [`config`]: optional `config.json` settings
//! - [`error`]: error types

pub mod api;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod pool;
pub mod sampler;
