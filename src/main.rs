use std::process::ExitCode;

use clap::Parser;
use imfpush_rs::cli::{Cli, execute_command};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute_command(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
