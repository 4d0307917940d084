/// `disable` command: stop one or more running tasks.
use crate::cli::args::TaskNamesArgs;
use crate::client::{Client, Request};
use crate::errors::CliError;

use super::send_each;

/// Run `kapacitor disable`.
///
/// Every name is processed in order, stopping only at the first failure.
///
/// # Errors
///
/// Returns `CliError::Usage` without names, otherwise the first transport or server error.
pub fn run(args: &TaskNamesArgs, client: &Client) -> Result<(), CliError> {
    if args.names.is_empty() {
        return Err(CliError::usage("disable", "Must pass at least one task name"));
    }
    send_each(client, &args.names, Request::disable)
}
