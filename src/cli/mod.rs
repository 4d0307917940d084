/// CLI layer: argument parsing, exit-code triage and output formatting.
pub mod args;
pub mod output;
pub mod parse;

pub use output::{OutputCtx, write_error};
pub use parse::parse_args;
