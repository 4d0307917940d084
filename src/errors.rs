/// Top-level command errors and their exit codes.
use std::path::PathBuf;

use thiserror::Error;

use crate::client::ClientError;

/// Exit code for a missing or unknown command.
pub const EXIT_UNKNOWN_COMMAND: i32 = 1;

/// Exit code for local usage/argument errors.
pub const EXIT_USAGE: i32 = 2;

/// Exit code for transport and server-reported failures.
pub const EXIT_FAILURE: i32 = 3;

/// Errors a subcommand can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing or invalid local arguments, detected before any request is sent.
    #[error("{message}")]
    Usage {
        /// Subcommand whose usage text should follow the message.
        command: &'static str,
        /// What was wrong.
        message: String,
    },

    /// The command name did not match any subcommand.
    #[error("Unknown command {0}")]
    UnknownCommand(String),

    /// A local file could not be read.
    #[error("open {}: {source}", path.display())]
    Io {
        /// The file that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Transport, decode or server-reported failure.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl CliError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownCommand(_) => EXIT_UNKNOWN_COMMAND,
            Self::Usage { .. } | Self::Client(ClientError::InvalidUrl { .. }) => EXIT_USAGE,
            Self::Io { .. } | Self::Client(_) => EXIT_FAILURE,
        }
    }

    /// Machine-readable error code used in JSON error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usage { .. } => "usage",
            Self::UnknownCommand(_) => "unknown_command",
            Self::Io { .. } => "io_error",
            Self::Client(err) => match err {
                ClientError::InvalidUrl { .. } => "invalid_url",
                ClientError::Transport(_) => "transport_error",
                ClientError::Server(_) => "server_error",
                ClientError::Decode { .. } => "malformed_response",
            },
        }
    }

    pub(crate) fn usage(command: &'static str, message: impl Into<String>) -> Self {
        Self::Usage {
            command,
            message: message.into(),
        }
    }
}
