/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod define;
pub mod delete;
pub mod disable;
pub mod enable;
pub mod help;
pub mod level;
pub mod list;
pub mod record;
pub mod replay;
pub mod version;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::client::{Client, Request};
use crate::errors::CliError;
use crate::types::Empty;

/// Dispatch a parsed `Command` to its handler.
///
/// `version` and `help` never contact the service, so the client is only built for
/// the commands that need it.
///
/// # Errors
///
/// Returns `CliError` on any command failure.
pub fn dispatch(command: &Command, url: &str, ctx: &OutputCtx) -> Result<(), CliError> {
    match command {
        Command::Version => version::run(),
        Command::Help(args) => help::run(args),
        Command::Record(args) => record::run(args, &connect(url)?),
        Command::Define(args) => define::run(args, &connect(url)?),
        Command::Replay(args) => replay::run(args, &connect(url)?),
        Command::Enable(args) => enable::run(args, &connect(url)?),
        Command::Disable(args) => disable::run(args, &connect(url)?),
        Command::Delete(args) => delete::run(args, &connect(url)?),
        Command::List(args) => list::run(args, &connect(url)?, ctx),
        Command::Level(args) => level::run(args, &connect(url)?),
    }
}

fn connect(url: &str) -> Result<Client, CliError> {
    Ok(Client::new(url)?)
}

/// Send one request per target, in order, stopping at the first failure.
///
/// Targets already processed are not rolled back.
pub(crate) fn send_each<F>(client: &Client, targets: &[String], request: F) -> Result<(), CliError>
where
    F: Fn(&str) -> Request,
{
    for target in targets {
        client.send::<Empty>(request(target))?;
    }
    Ok(())
}
