/// HTTP client for the control service: request building, transport and envelope decoding.
pub mod envelope;
pub mod errors;
pub mod request;

use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

pub use envelope::EnvelopeError;
pub use errors::ClientError;
pub use request::{RecordSource, Request};

/// Default control endpoint of a local service.
pub const DEFAULT_URL: &str = "http://localhost:9092";

/// Blocking client bound to one service base URL.
#[derive(Debug, Clone)]
pub struct Client {
    base: Url,
    http: reqwest::blocking::Client,
}

impl Client {
    /// Create a client for the service at `base_url`.
    ///
    /// Calls have no client-side timeout: `replay` blocks until the service finishes.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` if `base_url` does not parse, or
    /// `ClientError::Transport` if the HTTP client cannot be initialised.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base = Url::parse(base_url).map_err(|source| ClientError::InvalidUrl {
            url: base_url.to_owned(),
            source,
        })?;
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("kapacitor/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self { base, http })
    }

    /// Full URL for a request: base URL + endpoint path + encoded query.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` if the joined URL does not parse.
    pub fn url_for(&self, request: &Request) -> Result<Url, ClientError> {
        let joined = format!(
            "{}{}",
            self.base.as_str().trim_end_matches('/'),
            request.path
        );
        let mut url = Url::parse(&joined).map_err(|source| ClientError::InvalidUrl {
            url: joined.clone(),
            source,
        })?;
        if !request.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(request.query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// Issue `request` and decode the envelope into payload `T`.
    ///
    /// The response body is read to the end and released before decoding.
    ///
    /// # Errors
    ///
    /// `ClientError::Transport` on connection or I/O failure, `ClientError::Server` when the
    /// envelope carries an error, `ClientError::Decode` when the body is not a valid envelope.
    pub fn send<T>(&self, request: Request) -> Result<T, ClientError>
    where
        T: DeserializeOwned + Default,
    {
        let url = self.url_for(&request)?;
        debug!(method = %request.method, url = %url, "sending request");

        let mut builder = self.http.request(request.method.clone(), url);
        if let Some(content_type) = request.content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        if let Some(file) = request.body {
            builder = builder.body(file);
        }

        let timer = RequestTimer::new(request.path);
        let response = builder.send()?;
        let status = response.status();
        let body = response.bytes()?;
        drop(timer);

        trace!(status = status.as_u16(), bytes = body.len(), "received response");

        envelope::decode(&body).map_err(|err| match err {
            EnvelopeError::Server(message) => ClientError::Server(message),
            EnvelopeError::Malformed(source) => ClientError::Decode {
                path: request.path.to_owned(),
                status: status.as_u16(),
                source,
            },
        })
    }
}

/// Logs the elapsed time of one round trip at debug level when dropped.
struct RequestTimer {
    path: &'static str,
    start: Instant,
}

impl RequestTimer {
    fn new(path: &'static str) -> Self {
        Self {
            path,
            start: Instant::now(),
        }
    }
}

impl Drop for RequestTimer {
    fn drop(&mut self) {
        let ms = self.start.elapsed().as_secs_f64() * 1000.0;
        debug!(path = self.path, "round trip took {ms:.2}ms");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Empty, RecordingCreated};
    use mockito::{Matcher, Server};

    #[test]
    fn test_url_for_joins_path_and_query() {
        let client = Client::new("http://localhost:9092/").unwrap();
        let url = client.url_for(&Request::enable("cpu")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9092/enable?name=cpu");
    }

    #[test]
    fn test_url_for_keeps_base_path_prefix() {
        let client = Client::new("http://proxy:8080/kapacitor").unwrap();
        let url = client.url_for(&Request::delete_recording("r1")).unwrap();
        assert_eq!(url.as_str(), "http://proxy:8080/kapacitor/recording?rid=r1");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            Client::new("not a url"),
            Err(ClientError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_send_decodes_payload() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/record")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("type".into(), "stream".into()),
                Matcher::UrlEncoded("duration".into(), "1m0s".into()),
            ]))
            .match_header("content-type", "application/octetstream")
            .with_body(r#"{"Error":"","RecordingID":"rec-42"}"#)
            .create();

        let client = Client::new(&server.url()).unwrap();
        let created: RecordingCreated = client
            .send(Request::record(&RecordSource::Stream {
                duration: std::time::Duration::from_secs(60),
            }))
            .unwrap();

        assert_eq!(created.recording_id, "rec-42");
        mock.assert();
    }

    #[test]
    fn test_send_surfaces_server_error_verbatim() {
        let mut server = Server::new();
        let _mock = server
            .mock("POST", "/loglevel")
            .match_query(Matcher::Any)
            .with_body(r#"{"Error":"invalid log level \"loud\""}"#)
            .create();

        let client = Client::new(&server.url()).unwrap();
        let err = client
            .send::<Empty>(Request::log_level("loud"))
            .unwrap_err();
        assert!(matches!(err, ClientError::Server(_)));
        assert_eq!(err.to_string(), r#"invalid log level "loud""#);
    }

    #[test]
    fn test_send_reports_malformed_body_with_status() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/tasks")
            .match_query(Matcher::Any)
            .with_status(502)
            .with_body("Bad Gateway")
            .create();

        let client = Client::new(&server.url()).unwrap();
        let err = client
            .send::<crate::types::TaskList>(Request::list_tasks(&[]))
            .unwrap_err();
        match err {
            ClientError::Decode { path, status, .. } => {
                assert_eq!(path, "/tasks");
                assert_eq!(status, 502);
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_escaped_identifier_round_trips() {
        let name = "cpu alert/é&x=1,2";
        let mut server = Server::new();
        let mock = server
            .mock("DELETE", "/task")
            .match_query(Matcher::UrlEncoded("name".into(), name.into()))
            .with_body(r#"{"Error":""}"#)
            .create();

        let client = Client::new(&server.url()).unwrap();
        client.send::<Empty>(Request::delete_task(name)).unwrap();
        mock.assert();
    }

    #[test]
    fn test_connection_failure_is_transport_error() {
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client = Client::new(&format!("http://127.0.0.1:{port}")).unwrap();
        let err = client.send::<Empty>(Request::enable("t")).unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));

        let message = err.to_string();
        assert!(message.contains(&format!("127.0.0.1:{port}")), "{message}");
        assert!(message.to_lowercase().contains("refused"), "{message}");
    }
}
