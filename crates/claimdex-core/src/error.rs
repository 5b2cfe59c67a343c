use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    // ── Storage / serialization ──────────────────────────────────────────────
    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    /// A flush failed partway through the per-store batch commits. The
    /// on-disk state may straddle a flush boundary; the process must exit
    /// and restart from the last committed boundary.
    #[error("flush commit failed: {0}")]
    FlushFailed(String),

    // ── Block advance / rollback ─────────────────────────────────────────────
    #[error("block height mismatch: expected {expected}, got {got}")]
    HeightMismatch { expected: u32, got: u32 },

    #[error("missing undo journal for height {0}; the index must be rebuilt from scratch")]
    MissingUndo(u32),

    #[error("claim index is inconsistent ({0}); the index must be rebuilt from scratch")]
    Corrupt(String),

    // ── Identifier parsing ───────────────────────────────────────────────────
    #[error("{0} should be a claim id hash")]
    InvalidClaimId(String),

    #[error("{0} should be a transaction hash")]
    InvalidTxId(String),

    // ── Daemon client ────────────────────────────────────────────────────────
    #[error("daemon error: {0}")]
    Daemon(String),
}
