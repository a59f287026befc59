use std::process::ExitCode;

use clap::Parser as _;
use pngshape::{Cli, Job, ParseOutcome, classify_clap_error, run};
use tracing::Level;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match classify_clap_error(&err) {
                ParseOutcome::Informational => ExitCode::SUCCESS,
                ParseOutcome::Failed(kind) => ExitCode::from(kind.exit_code()),
            };
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .init();

    let result = Job::try_from(cli).and_then(|job| run(&job, &mut std::io::stdout().lock()));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(kind = ?err.kind(), "job failed");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
