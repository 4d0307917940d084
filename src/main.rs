#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! kapacitor: command-line control client for the Kapacitor data-processing service.

mod cli;
mod client;
mod commands;
mod duration;
mod errors;
mod types;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use cli::{OutputCtx, parse_args, write_error};

fn main() {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(failure) => {
            failure.report();
            std::process::exit(failure.exit_code());
        }
    };

    setup_logging(cli.debug);

    let ctx = OutputCtx::new(cli.output, cli.json);

    if let Err(err) = commands::dispatch(&cli.command, &cli.url, &ctx) {
        tracing::debug!(code = err.code(), "command failed");
        write_error(&err, &ctx);
        std::process::exit(err.exit_code());
    }
}

/// Log to stderr. `RUST_LOG` wins over `-d` when set.
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,kapacitor={level}")));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}
