use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::IndexError;

// ── ClaimId ──────────────────────────────────────────────────────────────────

/// 20-byte claim identifier: RIPEMD160(SHA256(txid ‖ vout-BE)) of the
/// outpoint that first created the claim.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClaimId(pub [u8; 20]);

/// A certificate is itself a claim; its identifier is a plain claim id.
pub type CertId = ClaimId;

impl ClaimId {
    pub fn from_bytes(b: [u8; 20]) -> Self {
        Self(b)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, IndexError> {
        let bytes = hex::decode(s).map_err(|_| IndexError::InvalidClaimId(s.to_string()))?;
        if bytes.len() != 20 {
            return Err(IndexError::InvalidClaimId(s.to_string()));
        }
        let mut arr = [0u8; 20];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Byte-reversed copy. Certificate references inside claim values are
    /// stored big-endian; the index keys them little-endian.
    pub fn reversed(&self) -> Self {
        let mut arr = self.0;
        arr.reverse();
        Self(arr)
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClaimId({}…)", &self.to_hex()[..8])
    }
}

// ── TxId ─────────────────────────────────────────────────────────────────────

/// 32-byte transaction identifier, held in internal (wire) byte order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TxId(pub [u8; 32]);

impl TxId {
    pub fn from_bytes(b: [u8; 32]) -> Self {
        Self(b)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Display convention: byte-reversed hex, as chain explorers and the
    /// stratum protocol print transaction hashes.
    pub fn to_display_hex(&self) -> String {
        let mut arr = self.0;
        arr.reverse();
        hex::encode(arr)
    }

    pub fn from_display_hex(s: &str) -> Result<Self, IndexError> {
        let bytes = hex::decode(s).map_err(|_| IndexError::InvalidTxId(s.to_string()))?;
        if bytes.len() != 32 {
            return Err(IndexError::InvalidTxId(s.to_string()));
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        arr.reverse();
        Ok(Self(arr))
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display_hex())
    }
}

impl fmt::Debug for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxId({}…)", &self.to_display_hex()[..16])
    }
}

// ── BlockHash ────────────────────────────────────────────────────────────────

/// 32-byte block header hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockHash(pub [u8; 32]);

impl BlockHash {
    pub fn from_bytes(b: [u8; 32]) -> Self {
        Self(b)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({}…)", &self.to_hex()[..16])
    }
}

// ── Outpoint ─────────────────────────────────────────────────────────────────

/// The `(txid, vout)` pair identifying a transaction output.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outpoint {
    pub txid: TxId,
    pub nout: u32,
}

impl Outpoint {
    pub fn new(txid: TxId, nout: u32) -> Self {
        Self { txid, nout }
    }

    /// 36-byte store key: txid ‖ vout as big-endian u32.
    pub fn to_key(&self) -> [u8; 36] {
        let mut key = [0u8; 36];
        key[..32].copy_from_slice(&self.txid.0);
        key[32..].copy_from_slice(&self.nout.to_be_bytes());
        key
    }

    pub fn from_key(key: &[u8]) -> Result<Self, IndexError> {
        if key.len() != 36 {
            return Err(IndexError::Corrupt(format!(
                "outpoint key must be 36 bytes, got {}",
                key.len()
            )));
        }
        let mut txid = [0u8; 32];
        txid.copy_from_slice(&key[..32]);
        let mut nout = [0u8; 4];
        nout.copy_from_slice(&key[32..]);
        Ok(Self {
            txid: TxId(txid),
            nout: u32::from_be_bytes(nout),
        })
    }
}

impl fmt::Display for Outpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.txid, self.nout)
    }
}

impl fmt::Debug for Outpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Outpoint({}:{})", self.txid, self.nout)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
