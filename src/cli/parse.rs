/// Argument parsing with the exit-code policy applied to clap's errors.
///
/// A missing or unknown command exits 1 after the usage banner; anything else clap
/// rejects inside a subcommand is a usage error and exits 2.
use std::ffi::OsString;

use clap::error::{ContextKind, ErrorKind};
use clap::{CommandFactory, Parser};

use super::args::Cli;
use crate::errors::EXIT_UNKNOWN_COMMAND;

/// Why the command line could not be turned into a `Cli`.
#[derive(Debug)]
pub enum ParseFailure {
    /// No subcommand was given.
    MissingCommand,
    /// The first argument is not a known subcommand.
    UnknownCommand(String),
    /// Help/usage display or a subcommand-level argument error, reported by clap.
    Clap(clap::Error),
}

impl ParseFailure {
    /// Process exit code for this failure.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingCommand | Self::UnknownCommand(_) => EXIT_UNKNOWN_COMMAND,
            Self::Clap(err) => err.exit_code(),
        }
    }

    /// Print the failure the way the user expects to see it.
    pub fn report(&self) {
        match self {
            Self::MissingCommand => {
                eprintln!("Error: Must pass a command.");
                eprintln!("{}", general_usage());
            }
            Self::UnknownCommand(name) => {
                eprintln!("Unknown command {name}");
                eprintln!("{}", general_usage());
            }
            Self::Clap(err) => {
                let _ = err.print();
            }
        }
    }
}

/// Parse an argument vector (including the binary name).
///
/// # Errors
///
/// Returns a `ParseFailure` describing what to print and which exit code to use.
pub fn parse_args<I, T>(args: I) -> Result<Cli, ParseFailure>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            ParseFailure::MissingCommand
        }
        ErrorKind::InvalidSubcommand => ParseFailure::UnknownCommand(
            err.get(ContextKind::InvalidSubcommand)
                .map(ToString::to_string)
                .unwrap_or_default(),
        ),
        _ => ParseFailure::Clap(err),
    })
}

/// The top-level usage banner listing every command.
#[must_use]
pub fn general_usage() -> String {
    Cli::command().render_help().to_string()
}

/// Long help for one subcommand, or `None` if `name` is not a subcommand.
#[must_use]
pub fn command_usage(name: &str) -> Option<String> {
    let mut cmd = Cli::command();
    cmd.build();
    cmd.find_subcommand_mut(name)
        .map(|sub| sub.render_long_help().to_string())
}
