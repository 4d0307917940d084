/// `enable` command: start one or more tasks on live data.
use crate::cli::args::TaskNamesArgs;
use crate::client::{Client, Request};
use crate::errors::CliError;

use super::send_each;

/// Run `kapacitor enable`.
///
/// Names are enabled one at a time; the first failure stops the command and names
/// already enabled stay enabled.
///
/// # Errors
///
/// Returns `CliError::Usage` without names, otherwise the first transport or server error.
pub fn run(args: &TaskNamesArgs, client: &Client) -> Result<(), CliError> {
    if args.names.is_empty() {
        return Err(CliError::usage("enable", "Must pass at least one task name"));
    }
    send_each(client, &args.names, Request::enable)
}
