//! Records held by the claim indexes.
//!
//! All of these are stored as `bincode(serde struct)`; bincode's
//! length-prefixed encoding of `Vec<u8>` fields and fixed-width integers
//! gives the self-delimiting binary layout the stores expect.

use serde::{Deserialize, Serialize};

use crate::types::{CertId, ClaimId, Outpoint, TxId};

// ── ClaimInfo ────────────────────────────────────────────────────────────────

/// The full indexed state of one claim, keyed by claim id in the `claims`
/// store. Created by a name-claim output, replaced by a claim-update
/// output, deleted on abandon, restored from the undo journal on reorg.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimInfo {
    /// Raw name bytes (not required to be UTF-8).
    pub name: Vec<u8>,
    /// Opaque value blob as published on-chain.
    pub value: Vec<u8>,
    /// Transaction carrying the claim's current outpoint.
    pub txid: TxId,
    pub nout: u32,
    pub amount: u64,
    /// Address of the claim output, derived from its locking script.
    pub address: Vec<u8>,
    /// Height of the block that created (or last updated) the claim.
    pub height: u32,
    /// Signing certificate reference extracted from the value blob, or
    /// `None` when absent, unparseable, or failing signature validation.
    pub cert_id: Option<CertId>,
}

impl ClaimInfo {
    pub fn outpoint(&self) -> Outpoint {
        Outpoint::new(self.txid, self.nout)
    }
}

// ── SupportEntry ─────────────────────────────────────────────────────────────

/// One support output backing a claim, stored under the supported name in
/// the `supports` store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportEntry {
    pub txid: TxId,
    pub nout: u32,
    pub height: u32,
    pub amount: u64,
}

impl SupportEntry {
    pub fn outpoint(&self) -> Outpoint {
        Outpoint::new(self.txid, self.nout)
    }
}

// ── UndoEntry ────────────────────────────────────────────────────────────────

/// One pre-image record in a block's undo journal. `previous` is `None`
/// when the action created the claim (a fresh name claim), and the prior
/// `ClaimInfo` when it replaced or removed one (update, abandon).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoEntry {
    pub claim_id: ClaimId,
    pub previous: Option<ClaimInfo>,
}

// ── StratumClaimInfo ─────────────────────────────────────────────────────────

/// Composite record served to stratum clients: the claim joined with its
/// name sequence number and aggregated support weight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StratumClaimInfo {
    pub name: Vec<u8>,
    pub claim_id: ClaimId,
    pub txid: TxId,
    pub nout: u32,
    pub amount: u64,
    pub address: Vec<u8>,
    pub height: u32,
    /// `db_height - height`: confirmations of the claim's current outpoint.
    pub depth: u32,
    /// 1-based position of the claim under its name.
    pub claim_sequence: u32,
    pub value: Vec<u8>,
    /// `amount` plus the sum of all support amounts.
    pub effective_amount: u64,
    /// `(txid, nout, amount)` per active support.
    pub supports: Vec<(TxId, u32, u64)>,
}
