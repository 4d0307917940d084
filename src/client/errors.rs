/// Errors from the HTTP client layer.
use thiserror::Error;

/// Failures while talking to the control service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL could not be parsed or joined with an endpoint path.
    #[error("invalid service URL '{url}': {source}")]
    InvalidUrl {
        /// The offending URL.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },

    /// Connection, DNS or I/O failure while sending the request or reading the body.
    #[error("{}", source_chain(.0))]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-empty `Error` field.
    #[error("{0}")]
    Server(String),

    /// The response body was not a valid envelope.
    #[error("malformed response from {path} (HTTP {status}): {source}")]
    Decode {
        /// Endpoint path of the request.
        path: String,
        /// HTTP status code of the response.
        status: u16,
        /// JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// `Display` of `err` followed by every underlying cause, joined with `": "`.
///
/// reqwest keeps the actual cause (refused connection, unknown host) out of its own message.
pub(crate) fn source_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        let text = inner.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        cause = inner.source();
    }
    message
}
