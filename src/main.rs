//! Restcheck CLI entrypoint: a one-shot probe of the configured service.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use restcheck::{ApiError, ApiResponse, ObjectsEndpoint, RequestExecutor};

/// Issues a single GET against the configured objects service and reports
/// the raw outcome.
#[derive(Debug, Parser)]
#[command(
    name = "restcheck",
    about = "Probe the configured objects service and report the raw outcome"
)]
struct Cli {
    /// Base address to probe; overrides RESTCHECK_BASE_URL, restcheck.json,
    /// and the built-in default.
    #[arg(long, short = 'b')]
    base_url: Option<String>,

    /// Object identifier to fetch; omit to fetch the collection root.
    #[arg(long)]
    id: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), ApiError> {
    let endpoint = match cli.base_url.as_deref() {
        Some(base_address) => ObjectsEndpoint::new(RequestExecutor::new(base_address)?),
        None => ObjectsEndpoint::from_config()?,
    };

    let response = endpoint.get(cli.id.as_deref().unwrap_or(""))?;
    write_outcome(&response);
    Ok(())
}

fn write_outcome(response: &ApiResponse) {
    let mut stdout = io::stdout().lock();
    let _ignored = writeln!(stdout, "{}", response.status);
    if !response.body.is_empty() {
        let _ignored = writeln!(stdout, "{}", response.body);
    }
}
