mod bootstrap_helpers;
mod cli_args;
mod startup_dispatch;

use std::process::ExitCode;

use clap::Parser;

use crate::bootstrap_helpers::init_tracing;
use crate::cli_args::Cli;
use crate::startup_dispatch::run_cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    run_cli(cli).await
}
