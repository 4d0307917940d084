/// `delete` command: remove tasks or recordings.
use tracing::debug;

use crate::cli::args::{DeleteArgs, DeleteKind};
use crate::client::{Client, Request};
use crate::errors::CliError;

use super::send_each;

/// Run `kapacitor delete`.
///
/// Identifiers are deleted one at a time; the first failure stops the command.
///
/// # Errors
///
/// Returns `CliError::Usage` without a kind and at least one identifier, otherwise the
/// first transport or server error.
pub fn run(args: &DeleteArgs, client: &Client) -> Result<(), CliError> {
    let kind = match args.kind {
        Some(kind) if !args.ids.is_empty() => kind,
        _ => {
            return Err(CliError::usage(
                "delete",
                "Must pass at least one task name or recording ID",
            ));
        }
    };

    debug!(?kind, ids = ?args.ids, "deleting");
    let request: fn(&str) -> Request = match kind {
        DeleteKind::Task => Request::delete_task,
        DeleteKind::Recording => Request::delete_recording,
    };
    send_each(client, &args.ids, request)
}
