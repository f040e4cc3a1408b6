// ABOUTME: CLI argument parsing and command routing for sbt
//
// Provides command-line interface for:
// - Token operations (mint, query, owner, tokens, transfer)
// - Gateway API key management (auth)
// - Effective configuration (config)
// - Local audit trail (history)

pub mod auth;
pub mod config;
pub mod history;
pub mod mint;
pub mod owner;
pub mod query;
pub mod tokens;
pub mod transfer;
pub mod util;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Soulbound Token dashboard - mint and inspect non-transferable credentials
#[derive(Parser)]
#[command(name = "sbt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub globals: GlobalArgs,
}

/// Options shared by every command
#[derive(clap::Args, Clone, Default)]
pub struct GlobalArgs {
    /// Output format (defaults to the configured format)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Gateway API key (overrides SBT_API_KEY and the keychain)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Gateway base URL (overrides config)
    #[arg(long, global = true)]
    pub gateway_url: Option<String>,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a configured format name, falling back to text
    pub fn from_config(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Mint a certification SBT to an address
    Mint(MintArgs),

    /// Query an SBT by owner and token id
    Query(QueryArgs),

    /// Find the SBT held by an owner
    Owner(OwnerArgs),

    /// List all SBT token ids
    Tokens,

    /// Attempt a transfer (always rejected by the contract)
    Transfer(TransferArgs),

    /// Manage the gateway API key
    #[command(subcommand)]
    Auth(AuthCommand),

    /// Show or initialize configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Show recent audited actions
    History(HistoryArgs),
}

/// Arguments for the mint command
#[derive(clap::Args)]
pub struct MintArgs {
    /// Recipient wallet address
    pub address: String,
}

/// Arguments for the query command
#[derive(clap::Args)]
pub struct QueryArgs {
    /// Owner wallet address
    pub owner: String,

    /// Token id
    pub token_id: String,
}

/// Arguments for the owner command
#[derive(clap::Args)]
pub struct OwnerArgs {
    /// Owner wallet address
    pub owner: String,
}

/// Arguments for the transfer command
#[derive(clap::Args)]
pub struct TransferArgs {
    /// Current owner address
    pub from: String,

    /// Recipient address
    pub to: String,

    /// Token id
    pub token_id: String,
}

/// API key management
#[derive(Subcommand)]
pub enum AuthCommand {
    /// Store an API key in the system keychain (reads stdin when omitted)
    Set {
        /// API key value
        key: Option<String>,
    },

    /// Remove the stored API key
    Clear,

    /// Show which API key would be used
    Status,
}

/// Configuration commands
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write the default configuration to the user config file
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

/// Arguments for the history command
#[derive(clap::Args)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(long, short, default_value = "20")]
    pub limit: usize,
}
