//! # API Facade
//!
//! `PassGen` is the single entry point for generating a password. It owns a
//! [`Clipboard`] and a random source, both supplied by the caller:
//!
//! - Production: `PassGen<SystemClipboard, OsRng>`
//! - Testing: a recording clipboard and a seeded `StdRng`
//!
//! The API never prints. It returns a [`GenOutcome`] and leaves presentation
//! to the client. Clipboard errors (see [`crate::error::PassgenError::is_clipboard`]) are
//! folded into [`ClipboardStatus::Failed`] so they can never mask a
//! successfully generated password; any other error is returned.

use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::pool::CharacterPool;
use crate::sampler;
use rand::Rng;
use tracing::{debug, warn};

/// What the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenOptions {
    pub length: i64,
    pub copy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardStatus {
    Copied,
    Disabled,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenOutcome {
    pub password: String,
    pub clipboard: ClipboardStatus,
}

pub struct PassGen<C: Clipboard, R: Rng> {
    clipboard: C,
    rng: R,
}

impl<C: Clipboard, R: Rng> PassGen<C, R> {
    pub fn new(clipboard: C, rng: R) -> Self {
        Self { clipboard, rng }
    }

    /// Shuffles a fresh pool and samples `length` characters from it.
    pub fn generate(&mut self, length: i64) -> Result<String> {
        let pool = CharacterPool::standard().shuffled(&mut self.rng);
        sampler::sample(pool.as_slice(), length, &mut self.rng)
    }

    /// Generates a password and, if requested, copies it to the clipboard.
    pub fn run(&mut self, options: &GenOptions) -> Result<GenOutcome> {
        let password = self.generate(options.length)?;
        debug!(length = options.length, "generated password");

        let clipboard = if !options.copy {
            ClipboardStatus::Disabled
        } else {
            match self.clipboard.copy(&password) {
                Ok(()) => ClipboardStatus::Copied,
                Err(e) if e.is_clipboard() => {
                    warn!(error = %e, "clipboard copy failed");
                    ClipboardStatus::Failed(e.to_string())
                }
                Err(e) => return Err(e),
            }
        };

        Ok(GenOutcome {
            password,
            clipboard,
        })
    }

    #[cfg(test)]
    fn clipboard(&self) -> &C {
        &self.clipboard
    }
}
