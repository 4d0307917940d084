/// `replay` command: feed a recording through a task and wait for it to finish.
use crate::cli::args::ReplayArgs;
use crate::client::{Client, Request};
use crate::errors::CliError;
use crate::types::Empty;

/// Run `kapacitor replay`.
///
/// Blocks until the service reports the replay has finished.
///
/// # Errors
///
/// Returns `CliError::Usage` when name or id is missing, otherwise transport or server errors.
pub fn run(args: &ReplayArgs, client: &Client) -> Result<(), CliError> {
    if args.name.is_empty() || args.id.is_empty() {
        return Err(CliError::usage("replay", "Must pass name and id options."));
    }
    client.send::<Empty>(Request::replay(&args.name, &args.id, args.fast))?;
    Ok(())
}
