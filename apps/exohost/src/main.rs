//! # Exohost
//!
//! Entry point: parses the command line, sets up logging, dispatches.

use clap::Parser;
use exohost::cli::{cmd_compute, cmd_serve, cmd_sweep, Cli, Commands};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "exohost=debug,tower_http=debug"
    } else {
        "exohost=info,tower_http=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Serve { host, port } => cmd_serve(&host, port).await,
        Commands::Compute {
            mass,
            metallicity,
            json,
            detailed,
        } => cmd_compute(&mass, &metallicity, json, detailed),
        Commands::Sweep { json } => cmd_sweep(json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
