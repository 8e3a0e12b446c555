//! Shared CLI plumbing: exit codes and the CLI error type.

use std::fmt;

/// Process exit codes for headless commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success,
    /// Bad input: invalid arguments, colors, or LaTeX source
    DataError,
    /// Filesystem or capture failure
    IoError,
}

impl ExitCode {
    /// The numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::DataError => 1,
            Self::IoError => 2,
        }
    }
}

/// Error from a headless command, carrying the exit code to use.
#[derive(Debug)]
pub struct CliError {
    /// Human-readable message printed to stderr
    pub message: String,
    /// Process exit code
    pub exit_code: ExitCode,
}

impl CliError {
    /// A bad-input error (exit code 1).
    #[must_use]
    pub fn data(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::DataError,
        }
    }

    /// An I/O or capture error (exit code 2).
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for headless commands.
pub type CliResult<T> = Result<T, CliError>;
