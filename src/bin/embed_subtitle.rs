use std::process::ExitCode;

use clap::Parser;
use mediakit_cli::cli::{commands, EmbedArgs};

#[tokio::main]
async fn main() -> ExitCode {
    commands::embed(EmbedArgs::parse()).await
}
