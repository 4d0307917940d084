/// Output formatting: task/recording tables, JSON, and error reporting.
use std::io::Write;

use comfy_table::{Cell, CellAlignment, ColumnConstraint, Table, Width, presets::NOTHING};
use serde::Serialize;

use super::args::OutputFormat;
use super::parse::{command_usage, general_usage};
use crate::errors::CliError;
use crate::types::{ErrorOutput, Recording, Task};

/// Resolve the effective output format, handling the `--json` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to all formatters.
#[derive(Debug, Clone, Copy)]
pub struct OutputCtx {
    pub format: OutputFormat,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
        }
    }
}

/// A borderless, left-aligned table with minimum column widths.
fn fixed_table<const N: usize>(headers: [&str; N], min_widths: [u16; N]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(headers);
    table.set_constraints(
        min_widths
            .into_iter()
            .map(|w| ColumnConstraint::LowerBoundary(Width::Fixed(w))),
    );
    for column in table.column_iter_mut() {
        column.set_padding((0, 1));
    }
    table
}

/// Trailing padding is noise for anyone piping the output through `awk`/`cut`.
fn finish(table: &Table) -> String {
    table
        .to_string()
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

// --- Tasks ---

/// Render tasks as a `Name / Type / Enabled` table. The header is always present.
#[must_use]
pub fn render_tasks(tasks: &[Task]) -> String {
    let mut table = fixed_table(["Name", "Type", "Enabled"], [30, 10, 10]);
    for task in tasks {
        table.add_row([
            task.name.as_str(),
            task.task_type.as_str(),
            if task.enabled { "true" } else { "false" },
        ]);
    }
    finish(&table)
}

/// Write tasks to stdout.
pub fn write_tasks(tasks: &[Task], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(tasks),
        OutputFormat::Table => println!("{}", render_tasks(tasks)),
    }
}

// --- Recordings ---

/// Render recordings as an `ID / Type / Size (MB)` table, sizes in MiB with two decimals.
#[must_use]
pub fn render_recordings(recordings: &[Recording]) -> String {
    let mut table = fixed_table(["ID", "Type", "Size (MB)"], [40, 10, 15]);
    if let Some(size) = table.column_mut(2) {
        size.set_cell_alignment(CellAlignment::Right);
    }
    for rec in recordings {
        table.add_row([
            Cell::new(&rec.id),
            Cell::new(rec.recording_type.as_str()),
            Cell::new(format!("{:.2}", rec.size_mib())),
        ]);
    }
    finish(&table)
}

/// Write recordings to stdout.
pub fn write_recordings(recordings: &[Recording], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(recordings),
        OutputFormat::Table => println!("{}", render_recordings(recordings)),
    }
}

// --- Error output ---

/// Write a failure to stderr, followed by usage text where it helps.
pub fn write_error(err: &CliError, ctx: &OutputCtx) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();

    if ctx.format == OutputFormat::Json {
        let s = serde_json::to_string_pretty(&ErrorOutput::from_cli_error(err)).unwrap_or_default();
        let _ = writeln!(out, "{s}");
        return;
    }

    let _ = writeln!(out, "{err}");
    match err {
        CliError::Usage { command, .. } => {
            if let Some(usage) = command_usage(command) {
                let _ = writeln!(out, "{usage}");
            }
        }
        CliError::UnknownCommand(_) => {
            let _ = writeln!(out, "{}", general_usage());
        }
        _ => {}
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
