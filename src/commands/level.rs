/// `level` command: change the server's log level.
use crate::cli::args::LevelArgs;
use crate::client::{Client, Request};
use crate::errors::CliError;
use crate::types::Empty;

/// Run `kapacitor level`.
///
/// The level is passed through as given; the server rejects unknown levels.
///
/// # Errors
///
/// Returns `CliError::Usage` without a level, otherwise transport or server errors.
pub fn run(args: &LevelArgs, client: &Client) -> Result<(), CliError> {
    let Some(level) = args.level.as_deref() else {
        return Err(CliError::usage("level", "Must pass a log level"));
    };
    client.send::<Empty>(Request::log_level(level))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};

    use super::*;
    use crate::commands::test_support::{OK, client_for};

    #[test]
    fn test_level_sent_as_plain_text() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/loglevel")
            .match_query(Matcher::UrlEncoded("level".into(), "warn".into()))
            .match_header("content-type", "text/plain")
            .with_body(OK)
            .create();

        let args = LevelArgs {
            level: Some("warn".to_owned()),
        };
        run(&args, &client_for(&server)).unwrap();
        mock.assert();
    }

    #[test]
    fn test_unknown_level_is_rejected_by_server() {
        let mut server = Server::new();
        let _mock = server
            .mock("POST", "/loglevel")
            .match_query(Matcher::Any)
            .with_body(r#"{"Error":"invalid log level: loud"}"#)
            .create();

        let args = LevelArgs {
            level: Some("loud".to_owned()),
        };
        let err = run(&args, &client_for(&server)).unwrap_err();
        assert_eq!(err.to_string(), "invalid log level: loud");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_missing_level_is_usage_error() {
        let server = Server::new();
        let err = run(&LevelArgs { level: None }, &client_for(&server)).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
