/// `define` command: create or update a task from a TICK script.
use std::fs::File;

use crate::cli::args::DefineArgs;
use crate::client::{Client, Request};
use crate::errors::CliError;
use crate::types::Empty;

/// Run `kapacitor define`.
///
/// # Errors
///
/// Returns `CliError::Usage` when name, tick or type is missing, `CliError::Io` when the
/// script cannot be opened, otherwise transport or server errors.
pub fn run(args: &DefineArgs, client: &Client) -> Result<(), CliError> {
    let (Some(tick), Some(task_type)) = (args.tick.as_deref(), args.task_type) else {
        return Err(missing_options());
    };
    if args.name.is_empty() || tick.as_os_str().is_empty() {
        return Err(missing_options());
    }

    let script = File::open(tick).map_err(|source| CliError::Io {
        path: tick.to_path_buf(),
        source,
    })?;
    client.send::<Empty>(Request::define(&args.name, task_type, script))?;
    Ok(())
}

fn missing_options() -> CliError {
    CliError::usage("define", "Must pass name, tick and type options.")
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;
    use std::path::PathBuf;

    use mockito::{Matcher, Server};

    use super::*;
    use crate::commands::test_support::{OK, client_for};
    use crate::types::TaskType;

    const SCRIPT: &str = "stream\n    .from().measurement('cpu')\n    .alert()\n";

    #[test]
    fn test_posts_script_as_body() {
        let mut script = tempfile::NamedTempFile::new().unwrap();
        script.write_all(SCRIPT.as_bytes()).unwrap();

        let mut server = Server::new();
        let mock = server
            .mock("POST", "/task")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("name".into(), "cpu_alert".into()),
                Matcher::UrlEncoded("type".into(), "streamer".into()),
            ]))
            .match_body(SCRIPT)
            .with_body(OK)
            .create();

        let args = DefineArgs {
            name: "cpu_alert".to_owned(),
            tick: Some(script.path().to_path_buf()),
            task_type: Some(TaskType::Stream),
        };
        run(&args, &client_for(&server)).unwrap();
        mock.assert();
    }

    #[test]
    fn test_missing_name_is_usage_error() {
        let mut server = Server::new();
        let mock = server.mock("POST", Matcher::Any).expect(0).create();

        let args = DefineArgs {
            name: String::new(),
            tick: Some(PathBuf::from("cpu.tick")),
            task_type: Some(TaskType::Batch),
        };
        let err = run(&args, &client_for(&server)).unwrap_err();
        assert!(matches!(err, CliError::Usage { command: "define", .. }));
        assert_eq!(err.exit_code(), 2);
        mock.assert();
    }

    #[test]
    fn test_missing_tick_is_usage_error() {
        let server = Server::new();
        let args = DefineArgs {
            name: "t".to_owned(),
            tick: None,
            task_type: Some(TaskType::Batch),
        };
        assert_eq!(run(&args, &client_for(&server)).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn test_unreadable_script_is_io_error() {
        let mut server = Server::new();
        let mock = server.mock("POST", Matcher::Any).expect(0).create();

        let dir = tempfile::tempdir().unwrap();
        let args = DefineArgs {
            name: "t".to_owned(),
            tick: Some(dir.path().join("missing.tick")),
            task_type: Some(TaskType::Stream),
        };
        let err = run(&args, &client_for(&server)).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert_eq!(err.exit_code(), 3);
        mock.assert();
    }
}
