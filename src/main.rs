// ABOUTME: Main entry point for the sbt command-line dashboard
//
// Binary: sbt
// Usage: sbt [OPTIONS] <COMMAND>
// - mint: issue a certification SBT
// - query: fetch an SBT by owner and token id
// - owner: find the SBT held by an address
// - tokens: list all token ids
// - transfer: attempt a transfer (always rejected)
// - auth: manage the gateway API key
// - config: show or initialize configuration
// - history: show recent audited actions

#![allow(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use soulbound::cli::{self, Commands};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    setup_logging();

    let args = cli::Cli::parse();
    let globals = args.globals;

    let result = match args.command {
        Commands::Mint(mint_args) => cli::mint::execute(mint_args, &globals).await,
        Commands::Query(query_args) => cli::query::execute(query_args, &globals).await,
        Commands::Owner(owner_args) => cli::owner::execute(owner_args, &globals).await,
        Commands::Tokens => cli::tokens::execute(&globals).await,
        Commands::Transfer(transfer_args) => cli::transfer::execute(transfer_args, &globals).await,
        Commands::Auth(auth_command) => cli::auth::execute(auth_command, &globals),
        Commands::Config(config_command) => cli::config::execute(config_command, &globals),
        Commands::History(history_args) => cli::history::execute(&history_args, &globals),
    };

    if let Err(ref e) = result {
        tracing::error!("Command failed: {e:#}");
    }

    result
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use std::path::PathBuf;
    use tracing_subscriber::prelude::*;

    let filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "soulbound=info,sbt=info".into())
    };

    // Log directory lives next to the config and audit trail
    let log_dir = dirs::home_dir()
        .map(|home| home.join(".soulbound").join("logs"))
        .unwrap_or_else(|| PathBuf::from(".soulbound/logs"));

    let _ = std::fs::create_dir_all(&log_dir);

    // JSONL log file with timestamp
    let log_file = log_dir.join(format!(
        "soulbound-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    match OpenOptions::new().create(true).append(true).open(&log_file) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_writer(file)
                        .with_ansi(false),
                )
                .with(filter())
                .init();
        }
        Err(e) => {
            // stdout is reserved for command output
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .with(tracing_subscriber::EnvFilter::new("warn"))
                .init();
            tracing::warn!("Could not open log file {}: {e}", log_file.display());
        }
    }
}
