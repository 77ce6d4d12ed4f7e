use std::process::ExitCode;

use clap::Parser;
use mediakit_cli::cli::{commands, DownloadArgs};

#[tokio::main]
async fn main() -> ExitCode {
    commands::download(DownloadArgs::parse()).await
}
