//! Error types for kubectx-git.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//! All errors propagate unchanged to the process boundary in `main`, the
//! only place they are rendered to the user and converted into an exit
//! status. Nothing is retried or swallowed below that.

use thiserror::Error;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Unexpected failure
    GeneralError = 1,
    /// Unrecognized or malformed argument set
    UsageError = 2,
    /// Timeout
    Timeout = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Main error type for kubectx-git operations.
#[derive(Error, Debug)]
pub enum KubectxError {
    /// Local config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    ConfigLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file contents are not valid TOML.
    #[error("config parse error at {path}: {message}")]
    ConfigParse { path: String, message: String },

    /// Network-level failure reaching the remote host.
    #[error("transport error: {0}")]
    Transport(String),

    /// Request exceeded the HTTP client's default timeout.
    #[error("request timeout after {seconds} seconds")]
    Timeout { seconds: u64 },

    /// Remote host reachable but responded with a non-200 status.
    #[error("failed to fetch url: {url}. Status code: {status}")]
    RemoteStatus { url: String, status: u16 },

    /// The host environment cannot supply a home directory.
    #[error("could not resolve the current user's home directory")]
    HomeDirUnavailable,

    /// CLI invoked with an unrecognized or malformed argument set.
    #[error("{0}")]
    UnsupportedOperation(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch-all for other errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KubectxError {
    /// Map error to process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::UnsupportedOperation(_) => ExitCode::UsageError,

            Self::Timeout { .. } => ExitCode::Timeout,

            Self::ConfigLoad { .. }
            | Self::ConfigParse { .. }
            | Self::Transport(_)
            | Self::RemoteStatus { .. }
            | Self::HomeDirUnavailable
            | Self::Io(_)
            | Self::Other(_) => ExitCode::GeneralError,
        }
    }
}

/// Result type alias for kubectx-git operations.
pub type Result<T> = std::result::Result<T, KubectxError>;
