use std::process::ExitCode;

use clap::Parser;
use mediakit_cli::cli::{commands, TrimArgs};

#[tokio::main]
async fn main() -> ExitCode {
    commands::trim(TrimArgs::parse()).await
}
