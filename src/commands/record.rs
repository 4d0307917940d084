/// `record` command: capture stream data, a batch task's queries, or a raw query.
use crate::cli::args::{RecordArgs, RecordMode};
use crate::client::{Client, RecordSource, Request};
use crate::errors::CliError;
use crate::types::RecordingCreated;

/// Run `kapacitor record`.
///
/// Prints the recording ID and nothing else, so scripts can capture it.
///
/// # Errors
///
/// Returns `CliError::Usage` for incomplete query-mode flags, otherwise transport or
/// server errors.
pub fn run(args: &RecordArgs, client: &Client) -> Result<(), CliError> {
    let id = record(args, client)?;
    println!("{id}");
    Ok(())
}

/// Start a recording and return its service-assigned ID.
///
/// # Errors
///
/// See [`run`].
pub fn record(args: &RecordArgs, client: &Client) -> Result<String, CliError> {
    let source = source_from_args(args)?;
    let created: RecordingCreated = client.send(Request::record(&source))?;
    Ok(created.recording_id)
}

fn source_from_args(args: &RecordArgs) -> Result<RecordSource, CliError> {
    match args.mode {
        RecordMode::Stream => Ok(RecordSource::Stream {
            duration: args.duration,
        }),
        RecordMode::Batch => Ok(RecordSource::Batch {
            name: args.name.clone(),
            start: args.start.clone(),
            num: args.num,
            addr: args.addr.clone(),
        }),
        RecordMode::Query => {
            let query_type = args.query_type.ok_or_else(|| {
                CliError::usage("record", "Must pass --type (streamer|batcher) when recording a query.")
            })?;
            if args.query.is_empty() {
                return Err(CliError::usage("record", "Must pass --query when recording a query."));
            }
            Ok(RecordSource::Query {
                query: args.query.clone(),
                query_type,
                addr: args.addr.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use mockito::{Matcher, Server};

    use super::*;
    use crate::commands::test_support::client_for;
    use crate::types::TaskType;

    fn args(mode: RecordMode) -> RecordArgs {
        RecordArgs {
            mode,
            duration: Duration::from_secs(300),
            name: String::new(),
            start: String::new(),
            num: 1,
            addr: String::new(),
            query: String::new(),
            query_type: None,
        }
    }

    #[test]
    fn test_stream_returns_recording_id() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/record")
            .match_query(Matcher::Exact("type=stream&duration=5m0s".into()))
            .with_body(r#"{"Error":"","RecordingID":"9f0c1d"}"#)
            .create();

        let id = record(&args(RecordMode::Stream), &client_for(&server)).unwrap();
        assert_eq!(id, "9f0c1d");
        mock.assert();
    }

    #[test]
    fn test_batch_sends_exactly_its_flags() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/record")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("type".into(), "batch".into()),
                Matcher::UrlEncoded("name".into(), "cpu_idle".into()),
                Matcher::UrlEncoded("start".into(), "2015-09-01T00:00:00Z".into()),
                Matcher::UrlEncoded("num".into(), "10".into()),
                Matcher::UrlEncoded("addr".into(), "http://localhost:8086".into()),
            ]))
            .with_body(r#"{"Error":"","RecordingID":"b-1"}"#)
            .create();

        let batch = RecordArgs {
            name: "cpu_idle".to_owned(),
            start: "2015-09-01T00:00:00Z".to_owned(),
            num: 10,
            addr: "http://localhost:8086".to_owned(),
            ..args(RecordMode::Batch)
        };
        assert_eq!(record(&batch, &client_for(&server)).unwrap(), "b-1");
        mock.assert();
    }

    #[test]
    fn test_query_sends_query_type_and_addr() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/record")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("type".into(), "query".into()),
                Matcher::UrlEncoded("query".into(), "select value from cpu".into()),
                Matcher::UrlEncoded("qtype".into(), "streamer".into()),
                Matcher::UrlEncoded("addr".into(), "http://db:8086".into()),
            ]))
            .with_body(r#"{"Error":"","RecordingID":"q-1"}"#)
            .create();

        let query = RecordArgs {
            query: "select value from cpu".to_owned(),
            query_type: Some(TaskType::Stream),
            addr: "http://db:8086".to_owned(),
            ..args(RecordMode::Query)
        };
        assert_eq!(record(&query, &client_for(&server)).unwrap(), "q-1");
        mock.assert();
    }

    #[test]
    fn test_query_without_type_fails_before_request() {
        let mut server = Server::new();
        let mock = server.mock("POST", Matcher::Any).expect(0).create();

        let query = RecordArgs {
            query: "select 1".to_owned(),
            ..args(RecordMode::Query)
        };
        let err = record(&query, &client_for(&server)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        mock.assert();
    }
}
