/// CLI argument definitions via clap derive.
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::client::DEFAULT_URL;
use crate::duration::parse_duration;
use crate::types::TaskType;

/// kapacitor: control a Kapacitor stream/batch processing service.
#[derive(Debug, Parser)]
#[command(
    name = "kapacitor",
    about = "Control client for the Kapacitor data-processing service",
    subcommand_required = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Base URL of the Kapacitor control service.
    #[arg(
        long,
        global = true,
        value_name = "URL",
        env = "KAPACITOR_URL",
        default_value = DEFAULT_URL
    )]
    pub url: String,

    /// Output format for `list`.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "table")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Log requests to stderr (-d debug, -dd trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Column-aligned table with headers.
    #[default]
    Table,
    /// Pretty-printed JSON array.
    Json,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record the result of a query or a snapshot of the current stream data.
    #[command(long_about = RECORD_ABOUT, after_long_help = RECORD_EXAMPLES)]
    Record(RecordArgs),
    /// Create or update a task.
    #[command(long_about = "Create or update a task.\n\n\
        A task is defined via a TICK script that defines the data processing pipeline of the task.")]
    Define(DefineArgs),
    /// Replay a recording to a task.
    #[command(long_about = "Replay a recording to a task. Waits until the task finishes.\n\n\
        See 'kapacitor help record' for how to create a recording.\n\
        See 'kapacitor help define' for how to create a task.")]
    Replay(ReplayArgs),
    /// Enable and start running a task with live data.
    Enable(TaskNamesArgs),
    /// Stop running a task.
    Disable(TaskNamesArgs),
    /// Delete a task or a recording.
    #[command(long_about = "Delete a task or recording.\n\n\
        If a task is enabled it will be disabled and then deleted.")]
    Delete(DeleteArgs),
    /// List information about tasks or recordings.
    #[command(long_about = "List tasks or recordings and their current state.\n\n\
        If no tasks are given then all tasks are listed. Same for recordings.\n\
        If a set of task names or recording IDs is provided only those entries will be listed.")]
    List(ListArgs),
    /// Set the logging level on the kapacitord server.
    Level(LevelArgs),
    /// Display the Kapacitor version info.
    Version,
    /// Get help for a command.
    Help(HelpArgs),
}

/// What `record` captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordMode {
    /// A snapshot of the live data stream.
    Stream,
    /// The queries defined by a batch task.
    Batch,
    /// The result of a raw query.
    Query,
}

const RECORD_ABOUT: &str = "Record the result of an InfluxDB query or a snapshot of the live data stream.

Prints the recording ID on exit.

Recordings have types like tasks. If recording a raw query you must specify the desired type.

See 'kapacitor help replay' for how to replay a recording.";

const RECORD_EXAMPLES: &str = r#"Examples:

    $ kapacitor record stream --duration 1m

        Records the live data stream for 1 minute.

    $ kapacitor record batch --addr http://localhost:8086 --name cpu_idle --start 2015-09-01T00:00:00Z --num 10

        Records the result of the query defined in task 'cpu_idle', running it 10 times
        starting at 'start' and advancing by the period defined in the task.

    $ kapacitor record query --addr http://localhost:8086 --query "select value from cpu_idle where time > now() - 1h" --type streamer

        Records the result of the query and stores it as a stream recording.
        Use --type batcher to store it as a batch recording."#;

/// Arguments for `kapacitor record`.
#[derive(Debug, Parser)]
pub struct RecordArgs {
    /// What to record.
    pub mode: RecordMode,

    /// How long to record the data stream (stream).
    #[arg(long, value_name = "DURATION", default_value = "5m", value_parser = parse_duration)]
    pub duration: Duration,

    /// Name of the task whose queries are recorded (batch).
    #[arg(long, value_name = "TASK", default_value = "")]
    pub name: String,

    /// Start time of the first query (batch).
    #[arg(long, value_name = "TIME", default_value = "")]
    pub start: String,

    /// Number of periods to query (batch).
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub num: i64,

    /// URL of the InfluxDB server (batch, query).
    #[arg(long, value_name = "URL", default_value = "")]
    pub addr: String,

    /// The query to record (query).
    #[arg(long, value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Type of recording to save (query).
    #[arg(long = "type", value_name = "TYPE")]
    pub query_type: Option<TaskType>,
}

/// Arguments for `kapacitor define`.
#[derive(Debug, Parser)]
pub struct DefineArgs {
    /// The task name.
    #[arg(long, value_name = "NAME", default_value = "")]
    pub name: String,

    /// Path to the TICK script.
    #[arg(long, value_name = "PATH")]
    pub tick: Option<PathBuf>,

    /// The task type.
    #[arg(long = "type", value_name = "TYPE")]
    pub task_type: Option<TaskType>,
}

/// Arguments for `kapacitor replay`.
#[derive(Debug, Parser)]
pub struct ReplayArgs {
    /// The task name.
    #[arg(long, value_name = "NAME", default_value = "")]
    pub name: String,

    /// The recording ID.
    #[arg(long, value_name = "ID", default_value = "")]
    pub id: String,

    /// Replay the data as fast as possible instead of in real time.
    #[arg(long)]
    pub fast: bool,
}

/// Arguments for `kapacitor enable` and `kapacitor disable`.
#[derive(Debug, Parser)]
pub struct TaskNamesArgs {
    /// Task names, processed in order.
    #[arg(value_name = "TASK")]
    pub names: Vec<String>,
}

/// Which kind of object `delete` removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeleteKind {
    /// Delete tasks by name. Enabled tasks are disabled first.
    Task,
    /// Delete recordings by ID.
    Recording,
}

/// Arguments for `kapacitor delete`.
#[derive(Debug, Parser)]
pub struct DeleteArgs {
    /// What to delete.
    pub kind: Option<DeleteKind>,

    /// Task names or recording IDs.
    #[arg(value_name = "NAME|ID")]
    pub ids: Vec<String>,
}

/// Which collection `list` shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    /// Tasks and their current state.
    Tasks,
    /// Stored recordings.
    Recordings,
}

/// Arguments for `kapacitor list`.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// What to list.
    pub kind: Option<ListKind>,

    /// Only list these task names or recording IDs.
    #[arg(value_name = "NAME|ID")]
    pub ids: Vec<String>,
}

/// Arguments for `kapacitor level`.
#[derive(Debug, Parser)]
pub struct LevelArgs {
    /// New log level (debug, info, warn, error). Validated by the server.
    #[arg(value_name = "LEVEL")]
    pub level: Option<String>,
}

/// Arguments for `kapacitor help`.
#[derive(Debug, Parser)]
pub struct HelpArgs {
    /// Command to show help for.
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,
}
