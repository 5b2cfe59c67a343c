//! Claim value envelope.
//!
//! Claim values are opaque to the chain but carry an optional publisher
//! signature: a reference to the signing certificate claim plus a compact
//! signature over the content. The envelope is bincode-encoded; a blob
//! that fails to decode is indexed as-is with no certificate reference
//! (the chain already accepted it, so the index must too).

use serde::{Deserialize, Serialize};

use crate::error::IndexError;
use crate::types::{CertId, ClaimId};

/// Maximum accepted name length in bytes.
pub const MAX_NAME_LEN: usize = 255;

// ── ClaimValue ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimValue {
    /// Publisher content (stream descriptor, certificate public key, …).
    pub content: Vec<u8>,
    /// Signing certificate claim id, big-endian as published.
    pub certificate_id: Option<[u8; 20]>,
    /// Compact ECDSA signature over the content, when signed.
    pub signature: Option<Vec<u8>>,
}

impl ClaimValue {
    pub fn encode(&self) -> Result<Vec<u8>, IndexError> {
        bincode::serialize(self).map_err(|e| IndexError::Serialization(e.to_string()))
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, IndexError> {
        bincode::deserialize(bytes).map_err(|e| IndexError::Serialization(e.to_string()))
    }
}

// ── Name validity ────────────────────────────────────────────────────────────

/// URI-level name check standing in for the external URI parser. Claims
/// with invalid names are still indexed but never treated as signed
/// (their certificate reference is dropped).
pub fn valid_name(name: &[u8]) -> bool {
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return false;
    }
    let Ok(s) = std::str::from_utf8(name) else {
        return false;
    };
    s.chars()
        .all(|c| !c.is_whitespace() && !c.is_control() && !matches!(c, '#' | '/'))
}

// ── Certificate extraction ───────────────────────────────────────────────────

/// Extract the signing-certificate reference from a claim's value blob,
/// reversed to the little-endian form the index keys by. Returns `None`
/// for an invalid name, an unparseable blob, or an unsigned value.
pub fn extract_cert_id(name: &[u8], value: &[u8]) -> Option<CertId> {
    if !valid_name(name) {
        return None;
    }
    let envelope = ClaimValue::decode(value).ok()?;
    envelope
        .certificate_id
        .map(|raw| ClaimId::from_bytes(raw).reversed())
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_validity() {
        assert!(valid_name(b"gaming"));
        assert!(valid_name("émission".as_bytes()));
        assert!(!valid_name(b""));
        assert!(valid_name(b"@channel"));
        assert!(!valid_name(b"two words"));
        assert!(!valid_name(b"a/b"));
        assert!(!valid_name(b"tag#1"));
        assert!(!valid_name(&[0xff, 0xfe]));
        assert!(!valid_name(&vec![b'x'; MAX_NAME_LEN + 1]));
    }

    #[test]
    fn extract_reverses_certificate_reference() {
        let mut raw = [0u8; 20];
        raw[0] = 0xaa;
        let value = ClaimValue {
            content: b"stream".to_vec(),
            certificate_id: Some(raw),
            signature: None,
        }
        .encode()
        .unwrap();

        let cert = extract_cert_id(b"name", &value).unwrap();
        assert_eq!(cert.as_bytes()[19], 0xaa);
        assert_eq!(cert, ClaimId::from_bytes(raw).reversed());
    }

    #[test]
    fn extract_handles_garbage_and_unsigned() {
        // Arbitrary bytes that are not a valid envelope.
        assert_eq!(extract_cert_id(b"name", &[0xde, 0xad, 0xbe]), None);

        let unsigned = ClaimValue {
            content: b"stream".to_vec(),
            certificate_id: None,
            signature: None,
        }
        .encode()
        .unwrap();
        assert_eq!(extract_cert_id(b"name", &unsigned), None);
    }

    #[test]
    fn invalid_name_drops_certificate() {
        let value = ClaimValue {
            content: vec![],
            certificate_id: Some([1u8; 20]),
            signature: None,
        }
        .encode()
        .unwrap();
        assert_eq!(extract_cert_id(b"bad name", &value), None);
    }
}
