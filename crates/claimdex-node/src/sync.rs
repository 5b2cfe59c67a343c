use claimdex_core::transaction::BlockHeader;
use claimdex_core::types::BlockHash;

/// What the sync loop should do with the next daemon block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncAction {
    /// The block extends the local tip.
    Advance,
    /// The block belongs to a different branch; back off one block first.
    Rollback,
}

/// Fork check for the next block. `local_tip` is the stored hash of the
/// current local tip block, absent on a fresh database.
pub fn sync_step(local_tip: Option<BlockHash>, header: &BlockHeader) -> SyncAction {
    match local_tip {
        Some(tip) if header.prev_hash != tip => SyncAction::Rollback,
        _ => SyncAction::Advance,
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn header(height: u32, hash: u8, prev: u8) -> BlockHeader {
        BlockHeader {
            height,
            hash: BlockHash::from_bytes([hash; 32]),
            prev_hash: BlockHash::from_bytes([prev; 32]),
        }
    }

    #[test]
    fn fresh_database_always_advances() {
        assert_eq!(sync_step(None, &header(1, 1, 0)), SyncAction::Advance);
    }

    #[test]
    fn matching_prev_hash_advances() {
        let tip = BlockHash::from_bytes([5; 32]);
        assert_eq!(sync_step(Some(tip), &header(6, 6, 5)), SyncAction::Advance);
    }

    #[test]
    fn mismatched_prev_hash_rolls_back() {
        let tip = BlockHash::from_bytes([5; 32]);
        assert_eq!(sync_step(Some(tip), &header(6, 6, 9)), SyncAction::Rollback);
    }
}
