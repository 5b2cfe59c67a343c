//! Minimal chain model consumed by the claim indexer.
//!
//! The base indexer owns full block fetching and script execution; the
//! claim core only needs outpoints, output amounts and scripts, and the
//! metadata tag an output may carry. Blocks travel as hex-encoded bincode
//! on the daemon RPC.

use serde::{Deserialize, Serialize};

use crate::types::{BlockHash, ClaimId, Outpoint, TxId};

// ── ClaimOp ──────────────────────────────────────────────────────────────────

/// Metadata tag on a transaction output. At most one per output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimOp {
    /// Create a new claim under `name`.
    NameClaim { name: Vec<u8>, value: Vec<u8> },
    /// Replace the content of the existing claim `claim_id`. Valid only
    /// when the same transaction spends the claim's current outpoint.
    Update {
        claim_id: ClaimId,
        name: Vec<u8>,
        value: Vec<u8>,
    },
    /// Add this output's amount as weight behind `claim_id` under `name`.
    Support { name: Vec<u8>, claim_id: ClaimId },
}

// ── Transaction ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    pub prevout: Outpoint,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Amount carried by the output.
    pub amount: u64,
    /// Locking script; only used for address derivation.
    pub script: Vec<u8>,
    pub claim: Option<ClaimOp>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub txid: TxId,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
}

impl Transaction {
    pub fn has_claims(&self) -> bool {
        self.outputs.iter().any(|o| o.claim.is_some())
    }

    /// True if one of this transaction's inputs spends `outpoint`.
    pub fn spends(&self, outpoint: &Outpoint) -> bool {
        self.inputs.iter().any(|i| i.prevout == *outpoint)
    }
}

// ── Block ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub height: u32,
    pub hash: BlockHash,
    pub prev_hash: BlockHash,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub txs: Vec<Transaction>,
}

// ── Tests ────────────────────────────────────────────────────────────────────
