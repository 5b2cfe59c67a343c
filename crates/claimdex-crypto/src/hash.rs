use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use claimdex_core::types::{ClaimId, TxId};

/// SHA-256 of arbitrary bytes → 32-byte array.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Double SHA-256 (checksum hash of the chain).
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// RIPEMD-160 of SHA-256 — the 20-byte script/claim hash.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(sha256(data)).into()
}

/// Derive the claim id of a first-time name claim from its outpoint:
/// `RIPEMD160(SHA256(txid ‖ vout-BE))`. Updates reuse the id carried in
/// the update output instead.
pub fn claim_id_hash(txid: &TxId, nout: u32) -> ClaimId {
    let mut packed = [0u8; 36];
    packed[..32].copy_from_slice(txid.as_bytes());
    packed[32..].copy_from_slice(&nout.to_be_bytes());
    ClaimId::from_bytes(hash160(&packed))
}

// ── Tests ────────────────────────────────────────────────────────────────────
