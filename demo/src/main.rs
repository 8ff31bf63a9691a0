//! august-demo — scripted walkthrough of the AugustDAO governance demo.
//!
//! Runs the delegation manager against the in-memory mock backend (or a
//! live node when one exists), with the terminal standing in for the UI:
//! proposals are listed, a delegation is created, shown, and revoked.

use anyhow::Context;
use august_app::{
    demo_proposals, DelegationManager, DemoBalanceSource, LogNotifier, WalletSession,
};
use august_client::{GovernanceClient, NodeClient};
use august_store::MemoryDelegationStore;
use august_types::{Address, Timestamp};
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "august-demo", about = "AugustDAO governance demo (mock data)")]
struct Cli {
    /// Backend mode: "mock" or "remote".
    /// When a config file is provided, defaults to the file's mode value.
    #[arg(long, env = "AUGUST_MODE")]
    mode: Option<String>,

    /// Node RPC URL for remote mode.
    #[arg(long, env = "AUGUST_NODE_URL")]
    node_url: Option<String>,

    /// Wallet address to bind to the session. Without it the demo runs
    /// disconnected and shows an empty delegation view.
    #[arg(long, env = "AUGUST_CALLER")]
    caller: Option<String>,

    /// Delegatee address used by the scripted create step.
    #[arg(
        long,
        default_value = "EzYfF5kvbgTNcSMyhoMbuAGNXSBkgetnVKYNgJTyxQpP",
        env = "AUGUST_DELEGATEE"
    )]
    delegatee: String,

    /// Amount of voting power the scripted create step delegates.
    #[arg(long, default_value_t = 250.0, env = "AUGUST_AMOUNT")]
    amount: f64,

    /// Log level when RUST_LOG is unset: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "AUGUST_LOG_LEVEL")]
    log_level: String,

    /// Path to a TOML configuration file. If provided, file settings are
    /// used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct DemoConfig {
    mode: Option<String>,
    node_url: Option<String>,
    caller: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    august_utils::init_tracing(&cli.log_level);

    let file_config = match &cli.config {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            let cfg: DemoConfig = toml::from_str(&contents)
                .with_context(|| format!("failed to parse config file {}", path.display()))?;
            tracing::info!("loaded config from {}", path.display());
            cfg
        }
        None => DemoConfig::default(),
    };

    let mode = cli
        .mode
        .or(file_config.mode)
        .unwrap_or_else(|| "mock".to_string());
    let node_url = cli
        .node_url
        .or(file_config.node_url)
        .unwrap_or_else(|| "http://127.0.0.1:8899".to_string());
    let caller = cli.caller.or(file_config.caller);

    let client = match mode.as_str() {
        "remote" => {
            tracing::info!(%node_url, "targeting remote governance program");
            GovernanceClient::remote(NodeClient::new(&node_url)?)
        }
        _ => {
            tracing::info!("running against mock data; no program is deployed");
            GovernanceClient::mock(Arc::new(MemoryDelegationStore::with_seed_data()))
        }
    };

    // Wallet connection boundary: bind the caller identity, if given.
    let mut session = WalletSession::disconnected();
    if let Some(raw) = caller {
        session.connect(Address::new(raw), &DemoBalanceSource);
    }
    let client = match session.identity() {
        Some(address) => {
            tracing::info!(
                wallet = %address.short(4),
                balance = %format!("{:.5}", session.balance().unwrap_or(0.0)),
                "wallet connected"
            );
            client.with_caller(address.clone())
        }
        None => {
            tracing::info!("no wallet connected");
            client
        }
    };

    // Proposal view: a stateless render of the fixed demo set.
    let now = Timestamp::now();
    for proposal in demo_proposals(now) {
        tracing::info!(
            id = %proposal.id,
            title = %proposal.title,
            status = ?proposal.status,
            approval = %format!("{:.1}%", proposal.approval_percent()),
            time_left = %proposal.time_left(now).unwrap_or_else(|| "closed".to_string()),
            "proposal"
        );
    }

    let mut manager = DelegationManager::new(client, Arc::new(LogNotifier));
    manager.load().await;
    log_delegations(&manager, "initial delegation view");

    // Scripted create: fill the form the way the UI would.
    manager.form.delegatee = cli.delegatee;
    manager.form.amount = cli.amount.to_string();
    manager.submit().await;
    log_delegations(&manager, "after create");

    // Revoke the newest record, then show the final view.
    if let Some(last) = manager.delegations().last().map(|d| d.id.clone()) {
        manager.revoke(&last).await;
    }
    log_delegations(&manager, "after revoke");

    Ok(())
}

fn log_delegations(manager: &DelegationManager, label: &str) {
    tracing::info!(count = manager.delegations().len(), "{label}");
    for record in manager.delegations() {
        tracing::info!(
            id = %record.id,
            delegatee = %record.delegatee.short(4),
            amount = record.amount,
            created = %record.timestamp,
            "delegation"
        );
    }
}
