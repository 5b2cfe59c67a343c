use serde::{Deserialize, Serialize};

/// JSON-serializable stratum claim record returned by
/// `claimtrie_getClaimById`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcStratumClaim {
    /// Name as lossy UTF-8 (names are raw bytes on-chain).
    pub name: String,
    pub claim_id: String,
    /// Reversed-hex transaction hash of the claim's current outpoint.
    pub txid: String,
    pub nout: u32,
    pub amount: u64,
    pub address: String,
    pub height: u32,
    /// Confirmations of the claim's current outpoint.
    pub depth: u32,
    pub claim_sequence: u32,
    /// Value blob as hex.
    pub value: String,
    /// amount plus the sum of all support amounts.
    pub effective_amount: u64,
    /// `[txid, nout, amount]` per active support.
    pub supports: Vec<(String, u32, u64)>,
}

/// `(name, claim_id)` pair backed by a support outpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcSupportedClaim {
    pub name: String,
    pub claim_id: String,
}
