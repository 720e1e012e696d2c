//! Lattice wallet console — entry point.

use clap::Parser;
use lattice_types::ContractHash;
use lattice_wallet_core::{NodeClient, TransferIntent, VoteIntent};
use std::path::PathBuf;

mod commands;

const DEFAULT_NODE_URL: &str = "http://127.0.0.1:20332";

#[derive(Parser)]
#[command(name = "lattice-cli", about = "Lattice wallet console")]
struct Cli {
    /// Node JSON-RPC endpoint.
    /// When a config file is provided, defaults to the file's value.
    #[arg(long, env = "LATTICE_NODE_URL")]
    node_url: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Transfer tokens to an account.
    Transfer {
        /// Token contract hash.
        asset: ContractHash,
        /// Destination account hash.
        to: ContractHash,
        /// Human decimal amount, e.g. "10.5".
        amount: String,
        /// Payload forwarded to the receiver's transfer hook.
        #[arg(long)]
        data: Option<String>,
        /// Paying account; the wallet picks one when omitted.
        #[arg(long)]
        from: Option<ContractHash>,
        /// Additional cosigning account (repeatable, entry-only scope).
        #[arg(long = "signer")]
        signers: Vec<ContractHash>,
    },
    /// Vote for consensus candidates.
    Vote {
        /// Voting account hash.
        account: ContractHash,
        /// Candidate public keys (compressed hex), in ballot order.
        #[arg(required = true)]
        candidates: Vec<String>,
    },
    /// Show an account's balance of a token.
    #[command(name = "balance-of")]
    BalanceOf {
        asset: ContractHash,
        address: ContractHash,
    },
    /// Show a token contract's manifest name.
    Name { asset: ContractHash },
    /// Show a token contract's decimal count.
    Decimals { asset: ContractHash },
}

/// Optional TOML configuration.
#[derive(Debug, Default, serde::Deserialize)]
struct FileConfig {
    #[serde(default)]
    node_url: Option<String>,
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let file_config: Option<FileConfig> = if let Some(ref config_path) = cli.config {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str::<FileConfig>(&contents) {
                Ok(cfg) => {
                    tracing::info!("Loaded config from {}", config_path.display());
                    Some(cfg)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {e}, using CLI defaults");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to read config file {}: {e}, using CLI defaults",
                    config_path.display()
                );
                None
            }
        }
    } else {
        None
    };

    let node_url = cli
        .node_url
        .or(file_config.and_then(|cfg| cfg.node_url))
        .unwrap_or_else(|| DEFAULT_NODE_URL.to_string());

    let client = NodeClient::new(node_url)?;

    match cli.command {
        Command::Transfer {
            asset,
            to,
            amount,
            data,
            from,
            signers,
        } => {
            let intent = TransferIntent {
                asset,
                to,
                amount,
                data,
                from,
                signers,
            };
            commands::transfer(&client, &client, &client, intent)
        }
        Command::Vote {
            account,
            candidates,
        } => commands::vote(&client, &client, VoteIntent {
            account,
            candidates,
        }),
        Command::BalanceOf { asset, address } => commands::balance_of(&client, asset, address),
        Command::Name { asset } => commands::name(&client, asset),
        Command::Decimals { asset } => commands::decimals(&client, asset),
    }
}
