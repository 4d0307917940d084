/// Shared types: the task/recording data model and the response payload shapes.
///
/// Field names follow the control service's JSON (`Name`, `Type`, `RecordingID`, ...).
/// The same structs are serialised back out for `--output json`.
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Kind of pipeline a task runs, and the shape of data a recording holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum TaskType {
    /// Consumes the live data stream.
    #[serde(rename = "streamer")]
    #[value(name = "streamer", alias = "stream")]
    Stream,
    /// Runs scheduled queries against the data store.
    #[serde(rename = "batcher")]
    #[value(name = "batcher", alias = "batch")]
    Batch,
}

impl TaskType {
    /// Name used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stream => "streamer",
            Self::Batch => "batcher",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "streamer" | "stream" => Ok(Self::Stream),
            "batcher" | "batch" => Ok(Self::Batch),
            other => Err(format!("unknown task type '{other}'")),
        }
    }
}

/// The service has reported task types both by name and by their numeric code.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTaskType {
    Name(String),
    Code(i64),
}

impl<'de> Deserialize<'de> for TaskType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawTaskType::deserialize(deserializer)? {
            RawTaskType::Name(name) => name.parse().map_err(de::Error::custom),
            RawTaskType::Code(0) => Ok(Self::Stream),
            RawTaskType::Code(1) => Ok(Self::Batch),
            RawTaskType::Code(n) => Err(de::Error::custom(format!("unknown task type code {n}"))),
        }
    }
}

/// A named pipeline definition held by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub task_type: TaskType,
    #[serde(rename = "Enabled", default)]
    pub enabled: bool,
}

/// A stored snapshot of stream or query data, usable as replay input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Type")]
    pub recording_type: TaskType,
    /// Size in bytes.
    #[serde(rename = "Size", default)]
    pub size: i64,
}

impl Recording {
    /// Size in MiB, as shown in the `list recordings` table.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size_mib(&self) -> f64 {
        self.size as f64 / 1024.0 / 1024.0
    }
}

// --- Response payloads ---

/// Payload for calls that return nothing beyond the envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Empty {}

/// Payload of `POST /record`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordingCreated {
    #[serde(rename = "RecordingID", default)]
    pub recording_id: String,
}

/// Payload of `GET /tasks`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskList {
    #[serde(rename = "Tasks", default, deserialize_with = "null_as_empty")]
    pub tasks: Vec<Task>,
}

/// Payload of `GET /recordings`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordingList {
    #[serde(rename = "Recordings", default, deserialize_with = "null_as_empty")]
    pub recordings: Vec<Recording>,
}

/// An empty collection may arrive as `null` rather than `[]`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// --- Error output ---

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `CliError`.
    #[must_use]
    pub fn from_cli_error(err: &crate::errors::CliError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}
