//! Opening a URL in the user's default browser.
//!
//! The platform is detected once at startup; each platform maps to one opener
//! program that receives the URL as its only argument.

use std::io;
use std::process::{Command, ExitStatus, Stdio};

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),
    #[error("could not run {program}: {source}")]
    Launch {
        program: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited with {status}")]
    Exit {
        program: &'static str,
        status: ExitStatus,
    },
}

/// Something that can show a URL to the user.
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<(), OpenError>;
}

/// Opener for the running OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformOpener {
    /// `xdg-open <url>`
    Linux,
    /// `open <url>`
    MacOs,
    /// Any other OS; every open fails.
    Unsupported(String),
}

impl PlatformOpener {
    pub fn detect() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` identifier to an opener.
    pub fn for_os(os: &str) -> Self {
        match os {
            "linux" => PlatformOpener::Linux,
            "macos" => PlatformOpener::MacOs,
            other => PlatformOpener::Unsupported(other.to_string()),
        }
    }

    /// Builds the opener command without running it.
    pub fn command(&self, url: &str) -> Result<Command, OpenError> {
        let program = self.require_program()?;
        let mut cmd = Command::new(program);
        cmd.arg(url).stdin(Stdio::null()).stdout(Stdio::null());
        Ok(cmd)
    }

    fn require_program(&self) -> Result<&'static str, OpenError> {
        match self {
            PlatformOpener::Linux => Ok("xdg-open"),
            PlatformOpener::MacOs => Ok("open"),
            PlatformOpener::Unsupported(os) => Err(OpenError::UnsupportedPlatform(os.clone())),
        }
    }
}

impl UrlOpener for PlatformOpener {
    /// Runs the opener and waits for it; a non-zero exit is an error.
    fn open(&self, url: &str) -> Result<(), OpenError> {
        let program = self.require_program()?;
        let status = self
            .command(url)?
            .status()
            .map_err(|source| OpenError::Launch { program, source })?;
        if !status.success() {
            return Err(OpenError::Exit { program, status });
        }
        Ok(())
    }
}
