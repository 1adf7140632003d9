//! scriptlint entry point.
//!
//! ```bash
//! scriptlint templates/            # walk a directory
//! scriptlint --staged              # pre-commit: lint staged markup
//! scriptlint --mode aware a.html   # ignore delimiters in strings/comments
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use scriptlint_cli::{run, Cli, DEFAULT_DIRECTIVE, EXIT_ERROR};

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(DEFAULT_DIRECTIVE.parse()?);
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = init_tracing() {
        eprintln!("scriptlint: {err:#}");
        return ExitCode::from(EXIT_ERROR);
    }

    let cli = Cli::parse();

    match run(&cli) {
        Ok(outcome) => {
            print!("{}", outcome.output);
            ExitCode::from(outcome.exit_code())
        }
        Err(err) => {
            eprintln!("scriptlint: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
