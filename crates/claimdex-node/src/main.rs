//! claimdex-node — the claim indexer binary.
//!
//! Startup sequence:
//!   1. Open (or create) the claim stores
//!   2. Build the claim indexer, resuming from the last flushed height
//!   3. Start the JSON-RPC 2.0 session layer
//!   4. Run the sync loop: poll the daemon → advance or rollback → flush

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};

use claimdex_core::config::IndexerConfig;
use claimdex_core::error::IndexError;
use claimdex_rpc::{RpcServer, RpcServerState};
use claimdex_state::{ClaimDb, ClaimIndexer, DbMode};

mod daemon;
mod sync;

use daemon::DaemonClient;
use sync::{sync_step, SyncAction};

#[derive(Parser, Debug)]
#[command(
    name = "claimdex-node",
    version,
    about = "Auxiliary claim indexer — folds name claims, updates and supports into queryable indexes"
)]
struct Args {
    /// Directory for the persistent claim stores.
    #[arg(long, default_value = "~/.claimdex/data")]
    data_dir: PathBuf,

    /// JSON-RPC listen address.
    #[arg(long, default_value = "127.0.0.1:8445")]
    rpc_addr: SocketAddr,

    /// Full-node daemon JSON-RPC endpoint.
    #[arg(long, default_value = "http://127.0.0.1:9245")]
    daemon_url: String,

    /// Seconds between daemon polls once caught up.
    #[arg(long, default_value_t = 5)]
    poll_secs: u64,

    /// Verify certificate signatures while indexing. A database built with
    /// one setting must not be resumed under the other.
    #[arg(long)]
    validate_claim_signatures: bool,

    /// Tune the stores for random-read serving instead of bulk sync writes.
    #[arg(long)]
    serving: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,claimdex=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();
    info!("claimdex node starting");

    // ── Claim stores ──────────────────────────────────────────────────────────
    let data_dir = expand_tilde(&args.data_dir);
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating data dir {}", data_dir.display()))?;

    let mode = if args.serving { DbMode::Serving } else { DbMode::Sync };
    let db = Arc::new(ClaimDb::open(&data_dir, mode).context("opening claim database")?);

    // ── Indexer ───────────────────────────────────────────────────────────────
    let config = IndexerConfig {
        validate_claim_signatures: args.validate_claim_signatures,
    };
    info!(
        validate_claim_signatures = config.validate_claim_signatures,
        mode = ?db.mode(),
        "indexer configuration"
    );
    let mut indexer =
        ClaimIndexer::new(Arc::clone(&db), config).context("building claim indexer")?;

    // ── RPC session layer ─────────────────────────────────────────────────────
    let rpc_state = Arc::new(RpcServerState { db: Arc::clone(&db) });
    let _rpc_handle = RpcServer::new(rpc_state)
        .start(args.rpc_addr)
        .await
        .context("starting RPC server")?;

    // ── Sync loop ─────────────────────────────────────────────────────────────
    let daemon = DaemonClient::new(&args.daemon_url);
    info!(height = indexer.height(), daemon = %args.daemon_url, "node ready, entering sync loop");

    loop {
        match sync_once(&daemon, &mut indexer).await {
            Ok(()) => {}
            Err(IndexError::Daemon(e)) => {
                warn!(error = %e, "daemon unreachable, retrying next poll");
            }
            Err(e @ (IndexError::MissingUndo(_) | IndexError::Corrupt(_))) => {
                error!(error = %e, "claim index is unrecoverable; rebuild it from scratch");
                return Err(e.into());
            }
            // Flush failures and everything else: exit so a supervisor can
            // restart from the last committed boundary.
            Err(e) => {
                error!(error = %e, "fatal indexing error");
                return Err(e.into());
            }
        }
        tokio::time::sleep(Duration::from_secs(args.poll_secs)).await;
    }
}

/// Catch up with the daemon: advance past new blocks, backing off across
/// forks, flushing at every block boundary.
async fn sync_once(daemon: &DaemonClient, indexer: &mut ClaimIndexer) -> Result<(), IndexError> {
    let remote_tip = daemon.get_block_count().await?;
    while indexer.height() < remote_tip {
        let next = indexer.height() + 1;
        let block = daemon.get_block(next).await?;
        let local_tip = indexer.db().get_block_hash(indexer.height())?;
        match sync_step(local_tip, &block.header) {
            SyncAction::Advance => {
                indexer.advance_block(&block)?;
                indexer.flush()?;
                indexer
                    .db()
                    .put_block_hash(block.header.height, &block.header.hash)?;
                info!(height = block.header.height, "indexed block");
            }
            SyncAction::Rollback => {
                let height = indexer.height();
                warn!(height, "chain fork detected, rolling back");
                indexer.rollback_block(height)?;
                indexer.flush()?;
                indexer.db().delete_block_hash(height)?;
            }
        }
    }
    Ok(())
}

/// Expand a leading `~` to the user's home directory (`HOME` or `USERPROFILE`).
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Ok(home) = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")) {
            return PathBuf::from(home).join(stripped);
        }
    }
    path.to_path_buf()
}
