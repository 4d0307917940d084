/// Outbound request descriptions, one constructor per control endpoint.
///
/// A `Request` is plain data: building one never touches the network, so every
/// subcommand's method/path/query mapping can be checked without a server.
use std::fs::File;
use std::time::Duration;

use reqwest::Method;

use crate::duration::format_duration;
use crate::types::TaskType;

/// Content type sent with POSTs that carry no meaningful body.
pub const OCTET_STREAM: &str = "application/octetstream";

/// Content type for `POST /loglevel`.
pub const TEXT_PLAIN: &str = "text/plain";

/// What `record` should capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    /// Snapshot of the live stream for a fixed span.
    Stream {
        /// How long to record.
        duration: Duration,
    },
    /// The batch queries defined by an existing task.
    Batch {
        /// Task whose queries are replayed against the data store.
        name: String,
        /// Start timestamp of the first query.
        start: String,
        /// Number of query periods.
        num: i64,
        /// URL of the source data store.
        addr: String,
    },
    /// The result of a raw query.
    Query {
        /// The query text.
        query: String,
        /// Shape to store the result as.
        query_type: TaskType,
        /// URL of the source data store.
        addr: String,
    },
}

impl RecordSource {
    /// The `type` parameter value for this source.
    #[must_use]
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Stream { .. } => "stream",
            Self::Batch { .. } => "batch",
            Self::Query { .. } => "query",
        }
    }
}

/// A single HTTP call against the control service.
#[derive(Debug)]
pub struct Request {
    /// HTTP method.
    pub method: Method,
    /// Endpoint path, always starting with `/`.
    pub path: &'static str,
    /// Query parameters in the order they are sent.
    pub query: Vec<(&'static str, String)>,
    /// Optional body streamed from a file.
    pub body: Option<File>,
    /// `Content-Type` header, if any.
    pub content_type: Option<&'static str>,
}

impl Request {
    fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            body: None,
            content_type: None,
        }
    }

    fn post(path: &'static str) -> Self {
        Self::new(Method::POST, path).content_type(OCTET_STREAM)
    }

    fn param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    fn content_type(mut self, content_type: &'static str) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// `POST /record?type=<mode>&...`
    #[must_use]
    pub fn record(source: &RecordSource) -> Self {
        let req = Self::post("/record").param("type", source.mode());
        match source {
            RecordSource::Stream { duration } => req.param("duration", format_duration(*duration)),
            RecordSource::Batch {
                name,
                start,
                num,
                addr,
            } => req
                .param("name", name.as_str())
                .param("start", start.as_str())
                .param("num", num.to_string())
                .param("addr", addr.as_str()),
            RecordSource::Query {
                query,
                query_type,
                addr,
            } => req
                .param("query", query.as_str())
                .param("qtype", query_type.as_str())
                .param("addr", addr.as_str()),
        }
    }

    /// `POST /task?name=&type=` with the pipeline script as body.
    #[must_use]
    pub fn define(name: &str, task_type: TaskType, script: File) -> Self {
        let mut req = Self::post("/task")
            .param("name", name)
            .param("type", task_type.as_str());
        req.body = Some(script);
        req
    }

    /// `POST /replay?name=&id=[&clock=fast]`
    #[must_use]
    pub fn replay(name: &str, id: &str, fast: bool) -> Self {
        let req = Self::post("/replay").param("name", name).param("id", id);
        if fast { req.param("clock", "fast") } else { req }
    }

    /// `POST /enable?name=`
    #[must_use]
    pub fn enable(name: &str) -> Self {
        Self::post("/enable").param("name", name)
    }

    /// `POST /disable?name=`
    #[must_use]
    pub fn disable(name: &str) -> Self {
        Self::post("/disable").param("name", name)
    }

    /// `DELETE /task?name=`
    #[must_use]
    pub fn delete_task(name: &str) -> Self {
        Self::new(Method::DELETE, "/task").param("name", name)
    }

    /// `DELETE /recording?rid=`
    #[must_use]
    pub fn delete_recording(rid: &str) -> Self {
        Self::new(Method::DELETE, "/recording").param("rid", rid)
    }

    /// `GET /tasks?tasks=a,b` (empty filter lists everything).
    #[must_use]
    pub fn list_tasks(names: &[String]) -> Self {
        Self::new(Method::GET, "/tasks").param("tasks", names.join(","))
    }

    /// `GET /recordings?rids=a,b` (empty filter lists everything).
    #[must_use]
    pub fn list_recordings(ids: &[String]) -> Self {
        Self::new(Method::GET, "/recordings").param("rids", ids.join(","))
    }

    /// `POST /loglevel?level=` as plain text. The level is not validated locally.
    #[must_use]
    pub fn log_level(level: &str) -> Self {
        Self::new(Method::POST, "/loglevel")
            .param("level", level)
            .content_type(TEXT_PLAIN)
    }

    /// Form-encoded query string, without the leading `?`.
    #[cfg(test)]
    fn query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }
}
