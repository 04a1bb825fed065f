use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PassgenError {
    #[error("Invalid password length: {0} (must be zero or greater)")]
    InvalidLength(i64),

    #[error("Password length {0} is too large to allocate")]
    TooLong(i64),

    #[error("Character pool is empty")]
    EmptyPool,

    #[error("Clipboard not supported on this platform: {0}")]
    UnsupportedPlatform(String),

    #[error("No known clipboard engine found. Install xclip or xsel.")]
    NoClipboardEngine,

    #[error("Failed to spawn {program}: {source}")]
    ClipboardSpawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Failed to write to {program}: {source}")]
    ClipboardWrite {
        program: String,
        source: std::io::Error,
    },

    #[error("Failed to wait for {program}: {source}")]
    ClipboardWait {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} exited with error ({status})")]
    ClipboardExit { program: String, status: ExitStatus },

    #[error("{program} did not finish within {timeout:?}")]
    ClipboardTimeout { program: String, timeout: Duration },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PassgenError {
    /// True for every error raised while trying to reach the clipboard.
    pub fn is_clipboard(&self) -> bool {
        matches!(
            self,
            PassgenError::UnsupportedPlatform(_)
                | PassgenError::NoClipboardEngine
                | PassgenError::ClipboardSpawn { .. }
                | PassgenError::ClipboardWrite { .. }
                | PassgenError::ClipboardWait { .. }
                | PassgenError::ClipboardExit { .. }
                | PassgenError::ClipboardTimeout { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PassgenError>;
