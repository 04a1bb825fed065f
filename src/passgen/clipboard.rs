use crate::error::{PassgenError, Result};
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Linux clipboard managers in order of preference.
const LINUX_ENGINES: [(&str, &[&str]); 2] = [
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Anything that can place text on a clipboard.
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<()>;
}

/// Host operating system, as far as clipboard dispatch cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
    MacOs,
    Other(String),
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` value to a platform.
    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => Platform::Linux,
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            other => Platform::Other(other.to_string()),
        }
    }
}

/// An external program that reads text on stdin and puts it on the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardEngine {
    program: PathBuf,
    args: Vec<String>,
}

impl ClipboardEngine {
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    #[cfg(test)]
    fn args(&self) -> &[String] {
        &self.args
    }

    fn name(&self) -> String {
        self.program
            .file_name()
            .unwrap_or(self.program.as_os_str())
            .to_string_lossy()
            .into_owned()
    }

    /// Spawns the engine, writes `text` to its stdin and waits for it to exit.
    ///
    /// One deadline covers both the write and the wait. The write runs on its
    /// own thread, so an engine that stops reading cannot block past `timeout`;
    /// the child is killed once the deadline passes.
    pub fn pipe(&self, text: &str, timeout: Duration) -> Result<()> {
        let program = self.name();
        let deadline = Instant::now() + timeout;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| PassgenError::ClipboardSpawn {
                program: program.clone(),
                source,
            })?;

        let written = spawn_writer(child.stdin.take(), text);

        let status = match wait_until(&mut child, deadline) {
            Ok(Some(status)) => status,
            Ok(None) => {
                reap(&mut child);
                return Err(PassgenError::ClipboardTimeout { program, timeout });
            }
            Err(source) => {
                reap(&mut child);
                return Err(PassgenError::ClipboardWait { program, source });
            }
        };

        if !status.success() {
            return Err(PassgenError::ClipboardExit { program, status });
        }

        // The engine may exit while something it spawned still holds the pipe.
        match written.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
            Ok(Ok(())) => Ok(()),
            Ok(Err(source)) => Err(PassgenError::ClipboardWrite { program, source }),
            Err(RecvTimeoutError::Timeout) => {
                Err(PassgenError::ClipboardTimeout { program, timeout })
            }
            Err(RecvTimeoutError::Disconnected) => Err(PassgenError::ClipboardWrite {
                program,
                source: std::io::Error::other("stdin writer stopped unexpectedly"),
            }),
        }
    }
}

/// Writes `text` to `stdin` on a detached thread and reports the result.
///
/// Dropping stdin when the write finishes closes the pipe so the engine sees EOF.
fn spawn_writer(stdin: Option<ChildStdin>, text: &str) -> Receiver<std::io::Result<()>> {
    let (tx, rx) = mpsc::channel();
    match stdin {
        Some(mut stdin) => {
            let text = text.to_owned();
            thread::spawn(move || {
                let _ = tx.send(stdin.write_all(text.as_bytes()));
            });
        }
        None => {
            let _ = tx.send(Ok(()));
        }
    }
    rx
}

fn wait_until(child: &mut Child, deadline: Instant) -> std::io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

/// Returns the first file called `name` in the directories of a `PATH`-style value.
pub fn find_in_path(name: &str, search_path: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Picks the clipboard engine for `platform`.
///
/// On Linux the first of xclip or xsel found on `search_path` wins; the other
/// platforms each have a single fixed tool.
pub fn select_engine(
    platform: &Platform,
    search_path: Option<&OsStr>,
) -> Result<ClipboardEngine> {
    match platform {
        Platform::Linux => {
            let search_path = search_path.ok_or(PassgenError::NoClipboardEngine)?;
            LINUX_ENGINES
                .iter()
                .find_map(|(name, args)| {
                    find_in_path(name, search_path)
                        .map(|path| ClipboardEngine::new(path, args.iter().copied()))
                })
                .ok_or(PassgenError::NoClipboardEngine)
        }
        Platform::Windows => Ok(ClipboardEngine::new("clip", Vec::<String>::new())),
        Platform::MacOs => Ok(ClipboardEngine::new("pbcopy", Vec::<String>::new())),
        Platform::Other(os) => Err(PassgenError::UnsupportedPlatform(os.clone())),
    }
}

/// The host clipboard, reached through whichever external tool the platform provides.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    platform: Platform,
    search_path: Option<OsString>,
    timeout: Duration,
}

impl SystemClipboard {
    pub fn new(timeout: Duration) -> Self {
        Self {
            platform: Platform::current(),
            search_path: std::env::var_os("PATH"),
            timeout,
        }
    }

    #[cfg(test)]
    fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    #[cfg(test)]
    fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let engine = select_engine(&self.platform, self.search_path.as_deref())?;
        debug!(
            program = %engine.program().display(),
            platform = ?self.platform,
            "copying to clipboard"
        );
        engine.pipe(text, self.timeout)
    }
}
