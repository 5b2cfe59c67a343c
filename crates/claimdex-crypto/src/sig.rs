//! Certificate signature validation.
//!
//! A signed claim's envelope carries a compact ECDSA signature made with
//! the key published in the signer certificate's content. The digest binds
//! the claim to its address (canonicalization input), its content, and the
//! certificate reference exactly as stored in the blob (big-endian).

use secp256k1::ecdsa::Signature;
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};

use crate::hash::sha256;

fn signing_digest(address: &[u8], content: &[u8], cert_id_stored: &[u8; 20]) -> [u8; 32] {
    let mut preimage = Vec::with_capacity(address.len() + content.len() + 20);
    preimage.extend_from_slice(address);
    preimage.extend_from_slice(content);
    preimage.extend_from_slice(cert_id_stored);
    sha256(&preimage)
}

/// Verify a claim's publisher signature against its certificate's public
/// key (33-byte compressed secp256k1). Returns `false` on any malformed
/// input; validation failures are recoverable by design.
pub fn verify_claim_signature(
    address: &[u8],
    content: &[u8],
    cert_id_stored: &[u8; 20],
    signature: &[u8],
    cert_pubkey: &[u8],
) -> bool {
    let Ok(pubkey) = PublicKey::from_slice(cert_pubkey) else {
        return false;
    };
    let Ok(sig) = Signature::from_compact(signature) else {
        return false;
    };
    let msg = Message::from_digest(signing_digest(address, content, cert_id_stored));
    Secp256k1::verification_only()
        .verify_ecdsa(&msg, &sig, &pubkey)
        .is_ok()
}

/// Produce the 64-byte compact signature a publisher embeds in a signed
/// claim value. Used by channel tooling and the test suite.
pub fn sign_claim(
    address: &[u8],
    content: &[u8],
    cert_id_stored: &[u8; 20],
    secret_key: &SecretKey,
) -> Vec<u8> {
    let msg = Message::from_digest(signing_digest(address, content, cert_id_stored));
    Secp256k1::signing_only()
        .sign_ecdsa(&msg, secret_key)
        .serialize_compact()
        .to_vec()
}

// ── Tests ────────────────────────────────────────────────────────────────────
