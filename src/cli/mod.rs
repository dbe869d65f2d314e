//! CLI operation dispatch.
//!
//! Operations are resolved from the flat positional word list: exactly one
//! recognized keyword runs the matching built-in; anything else resolves to
//! an unsupported operation carrying the message reported at the process
//! boundary.

pub mod args;

pub use args::Cli;

use std::io::Write;

use crate::error::{KubectxError, Result};

/// A resolved CLI operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Print the tool version.
    Version,
    /// The argument set did not resolve to an operation.
    Unsupported(String),
}

impl Op {
    /// Resolve an operation from the positional argument words.
    #[must_use]
    pub fn from_args(args: &[String]) -> Self {
        match args {
            [] => Self::Unsupported("invalid command".to_string()),
            [word] => match word.as_str() {
                "version" => Self::Version,
                other => Self::Unsupported(format!("invalid command: {other}")),
            },
            _ => Self::Unsupported("too many arguments".to_string()),
        }
    }

    /// Run the operation, writing user-facing output to `stdout`.
    ///
    /// # Errors
    ///
    /// Returns [`KubectxError::UnsupportedOperation`] for unresolved
    /// argument sets, or an I/O error if writing output fails.
    pub async fn run(&self, stdout: &mut impl Write) -> Result<()> {
        match self {
            Self::Version => {
                write!(stdout, "version")?;
                stdout.flush()?;
                Ok(())
            }
            Self::Unsupported(message) => {
                Err(KubectxError::UnsupportedOperation(message.clone()))
            }
        }
    }
}
