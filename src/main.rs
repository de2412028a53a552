//! `apache2-config` binary: reconcile one configuration and print a JSON report.

use std::io::Write as _;
use std::process::ExitCode;

use clap::Parser;

use apache2_config::cli::Cli;
use apache2_config::error::Apache2ConfigError;
use apache2_config::exec::{SearchPath, SystemExecutor};
use apache2_config::logging;
use apache2_config::reconcile::{Outcome, Reconciler};
use apache2_config::report::Report;
use apache2_config::request::Request;

fn run(args: &Cli) -> Result<Outcome, Apache2ConfigError> {
    let request = Request::new(&args.name, args.state)?;
    let lookup = SearchPath::from_env();
    let executor = SystemExecutor;
    Ok(Reconciler::new(&lookup, &executor).apply(&request)?)
}

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init_subscriber(args.verbose, "apache2-config");

    let result = run(&args);
    if let Err(e) = &result {
        tracing::error!("{e}");
    }
    let report = Report::from(result);

    let json = match report.to_json() {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("failed to serialize report: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut stdout = std::io::stdout().lock();
    if writeln!(stdout, "{json}").and_then(|()| stdout.flush()).is_err() {
        return ExitCode::FAILURE;
    }
    report.exit_code()
}
