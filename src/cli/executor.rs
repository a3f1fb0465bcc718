//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use std::process::ExitCode;

use anyhow::Context;

use super::config_merger::ConfigurationMerger;
use super::handlers::{SendCommandHandler, SendOutcome};
use super::parser::{Cli, Commands};
use crate::logger::init_logger;

/// Load configuration, install the logger and run the parsed command
///
/// # Returns
/// `ExitCode::SUCCESS` when the command completed and the backend (if
/// contacted) answered 2xx, `ExitCode::FAILURE` for any other status.
///
/// # Errors
/// Configuration, logger, validation and transport errors.
pub async fn execute_command(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = ConfigurationMerger::from_cli(&cli)
        .and_then(|merger| merger.merge_cli_args(&cli))
        .context("Failed to load configuration")?;

    let logger_config = config
        .logger
        .clone()
        .into_logger_config()
        .context("Invalid logger configuration")?;
    init_logger(logger_config)?;

    match &cli.command {
        Commands::Send(args) => {
            let outcome = SendCommandHandler::new(config).execute(args).await?;
            Ok(report(outcome))
        }
    }
}

/// Print the outcome and map it to a process exit code
fn report(outcome: SendOutcome) -> ExitCode {
    match outcome {
        SendOutcome::DryRun(document) => {
            println!("{}", document);
            ExitCode::SUCCESS
        }
        SendOutcome::Delivered(response) if response.is_success() => {
            println!(
                "✓ Notification accepted ({}) in {} ms",
                response.status_code, response.duration_ms
            );
            if !response.body.is_empty() {
                println!("{}", response.body);
            }
            ExitCode::SUCCESS
        }
        SendOutcome::Delivered(response) => {
            eprintln!("✗ Notification rejected ({})", response.status_code);
            if !response.body.is_empty() {
                eprintln!("{}", response.body);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::push::PushResponse;

    fn delivered(status_code: u16) -> SendOutcome {
        SendOutcome::Delivered(PushResponse {
            status_code,
            body: String::new(),
            duration_ms: 5,
        })
    }

    #[test]
    fn test_report_exit_codes() {
        assert_eq!(report(SendOutcome::DryRun("{}".to_string())), ExitCode::SUCCESS);
        assert_eq!(report(delivered(202)), ExitCode::SUCCESS);
        assert_eq!(report(delivered(401)), ExitCode::FAILURE);
        assert_eq!(report(delivered(500)), ExitCode::FAILURE);
    }
}
