/// `version` command: print build information.

/// Release version of this client.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `Kapacitor <version> (git: <branch> <commit>)`, with branch and commit taken from
/// `KAPACITOR_BRANCH` / `KAPACITOR_COMMIT` at build time.
#[must_use]
pub fn version_string() -> String {
    let branch = option_env!("KAPACITOR_BRANCH").unwrap_or("unknown");
    let commit = option_env!("KAPACITOR_COMMIT").unwrap_or("unknown");
    format!("Kapacitor {VERSION} (git: {branch} {commit})")
}

/// Run `kapacitor version`. Never contacts the service.
///
/// # Errors
///
/// Cannot currently fail.
#[allow(clippy::unnecessary_wraps)]
pub fn run() -> Result<(), crate::errors::CliError> {
    println!("{}", version_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string_shape() {
        let v = version_string();
        assert!(v.starts_with(&format!("Kapacitor {VERSION} (git: ")));
        assert!(v.ends_with(')'));
    }
}
