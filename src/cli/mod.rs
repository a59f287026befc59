//! Command-line surface: argument definitions, token parsers and the job runner.

/// clap definitions and parse-error classification.
pub mod args;
/// Validated invocation and its execution.
pub mod job;
/// `X.Y` / `R.G.B` / integer token parsers.
pub mod tokens;
