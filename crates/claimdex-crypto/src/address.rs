use crate::hash::{hash160, sha256d};

/// Base58Check version byte for pay-to-pubkey-hash addresses.
pub const ADDRESS_VERSION: u8 = 0x55;

/// Derive the display address of an output's locking script.
///
/// A standard P2PKH script yields the embedded pubkey hash; any other
/// script is addressed by its own hash160 (P2SH-style). This stands in
/// for the base indexer's coin parameters.
pub fn address_from_script(script: &[u8]) -> Vec<u8> {
    let hash = p2pkh_hash(script).unwrap_or_else(|| hash160(script));
    base58check(ADDRESS_VERSION, &hash).into_bytes()
}

/// Extract the pubkey hash from `OP_DUP OP_HASH160 <20> OP_EQUALVERIFY
/// OP_CHECKSIG`.
fn p2pkh_hash(script: &[u8]) -> Option<[u8; 20]> {
    if script.len() == 25
        && script[0] == 0x76
        && script[1] == 0xa9
        && script[2] == 0x14
        && script[23] == 0x88
        && script[24] == 0xac
    {
        let mut hash = [0u8; 20];
        hash.copy_from_slice(&script[3..23]);
        Some(hash)
    } else {
        None
    }
}

/// version ‖ payload ‖ first 4 bytes of sha256d(version ‖ payload), base58.
pub fn base58check(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + 5);
    data.push(version);
    data.extend_from_slice(payload);
    let check = sha256d(&data);
    data.extend_from_slice(&check[..4]);
    bs58::encode(data).into_string()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn p2pkh_script(hash: [u8; 20]) -> Vec<u8> {
        let mut script = vec![0x76, 0xa9, 0x14];
        script.extend_from_slice(&hash);
        script.extend_from_slice(&[0x88, 0xac]);
        script
    }

    #[test]
    fn p2pkh_scripts_with_same_hash_share_an_address() {
        let hash = [0x11u8; 20];
        let addr = address_from_script(&p2pkh_script(hash));
        assert_eq!(addr, address_from_script(&p2pkh_script(hash)));
        assert_ne!(addr, address_from_script(&p2pkh_script([0x12u8; 20])));
    }

    #[test]
    fn non_standard_script_falls_back_to_script_hash() {
        let script = vec![0x51]; // OP_TRUE
        let addr = address_from_script(&script);
        assert_eq!(
            addr,
            base58check(ADDRESS_VERSION, &hash160(&script)).into_bytes()
        );
    }

    #[test]
    fn base58check_embeds_version_and_checksum() {
        let encoded = base58check(ADDRESS_VERSION, &[0u8; 20]);
        let decoded = bs58::decode(&encoded).into_vec().unwrap();
        assert_eq!(decoded.len(), 25);
        assert_eq!(decoded[0], ADDRESS_VERSION);
        let check = sha256d(&decoded[..21]);
        assert_eq!(&decoded[21..], &check[..4]);
    }
}
