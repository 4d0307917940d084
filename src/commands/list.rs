/// `list` command: show tasks or recordings.
use crate::cli::OutputCtx;
use crate::cli::args::{ListArgs, ListKind};
use crate::cli::output::{write_recordings, write_tasks};
use crate::client::{Client, Request};
use crate::errors::CliError;
use crate::types::{Recording, RecordingList, Task, TaskList};

/// Run `kapacitor list`.
///
/// # Errors
///
/// Returns `CliError::Usage` without a kind, otherwise transport or server errors.
pub fn run(args: &ListArgs, client: &Client, ctx: &OutputCtx) -> Result<(), CliError> {
    let Some(kind) = args.kind else {
        return Err(CliError::usage("list", "Must specify 'tasks' or 'recordings'"));
    };

    match kind {
        ListKind::Tasks => write_tasks(&fetch_tasks(client, &args.ids)?, ctx),
        ListKind::Recordings => write_recordings(&fetch_recordings(client, &args.ids)?, ctx),
    }
    Ok(())
}

/// Fetch tasks, restricted to `names` unless it is empty.
///
/// # Errors
///
/// Transport or server errors.
pub fn fetch_tasks(client: &Client, names: &[String]) -> Result<Vec<Task>, CliError> {
    let list: TaskList = client.send(Request::list_tasks(names))?;
    Ok(list.tasks)
}

/// Fetch recordings, restricted to `ids` unless it is empty.
///
/// # Errors
///
/// Transport or server errors.
pub fn fetch_recordings(client: &Client, ids: &[String]) -> Result<Vec<Recording>, CliError> {
    let list: RecordingList = client.send(Request::list_recordings(ids))?;
    Ok(list.recordings)
}
