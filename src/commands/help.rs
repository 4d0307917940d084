/// `help` command: show the usage banner or one command's help.
use crate::cli::args::HelpArgs;
use crate::cli::parse::{command_usage, general_usage};
use crate::errors::CliError;

/// Run `kapacitor help [command]`.
///
/// # Errors
///
/// Returns `CliError::UnknownCommand` if the named command does not exist.
pub fn run(args: &HelpArgs) -> Result<(), CliError> {
    println!("{}", help_text(args.command.as_deref())?);
    Ok(())
}

fn help_text(command: Option<&str>) -> Result<String, CliError> {
    match command {
        None => Ok(general_usage()),
        Some(name) => command_usage(name).ok_or_else(|| CliError::UnknownCommand(name.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_for_known_command() {
        let text = help_text(Some("define")).unwrap();
        assert!(text.contains("--tick"));
    }

    #[test]
    fn test_help_without_command_is_banner() {
        let text = help_text(None).unwrap();
        for cmd in ["record", "define", "replay", "enable", "disable", "delete", "list", "level", "version"] {
            assert!(text.contains(cmd), "banner lists {cmd}");
        }
    }

    #[test]
    fn test_help_for_unknown_command_exits_1() {
        let err = help_text(Some("push")).unwrap_err();
        assert!(matches!(err, CliError::UnknownCommand(ref name) if name == "push"));
        assert_eq!(err.exit_code(), 1);
    }
}
