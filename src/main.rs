mod cli;
mod commands;
mod util;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;
use vivado_report::ReportError;

use crate::cli::{Cli, Commands};

const UNSUPPORTED_MESSAGE: &str = "Error: This type of report file is not currently supported.";

fn main() {
    init_tracing();

    if let Err(err) = run() {
        if is_unsupported_report(&err) {
            println!("{UNSUPPORTED_MESSAGE}");
            std::process::exit(1);
        }

        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(exit_code(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse(args) => commands::parse::run(args),
        Commands::Metadata(args) => commands::metadata::run(args),
        Commands::Sections(args) => commands::sections::run(args),
        Commands::Timing(args) => commands::timing::run(args),
    }
}

fn is_unsupported_report(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<ReportError>(),
            Some(ReportError::UnsupportedReportKind(_))
        )
    })
}

/// File access failures exit with the OS error code, everything else with 1.
fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<std::io::Error>())
        .and_then(std::io::Error::raw_os_error)
        .filter(|code| *code != 0)
        .unwrap_or(1)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
