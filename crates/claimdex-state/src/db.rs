use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use claimdex_core::claims::{ClaimInfo, SupportEntry, UndoEntry};
use claimdex_core::error::IndexError;
use claimdex_core::types::{BlockHash, CertId, ClaimId, Outpoint};

/// Persistent claim stores backed by sled (pure-Rust, no C dependencies).
///
/// Named trees:
///   claims            — 20-byte claim id      → bincode(ClaimInfo)
///   names             — raw name bytes        → bincode(BTreeMap<ClaimId, u32>)
///   signatures        — 20-byte cert id       → bincode(Vec<ClaimId>)
///   outpoint_claim_id — 36-byte outpoint key  → raw 20-byte claim id
///   supports          — name bytes            → bincode(BTreeMap<ClaimId, Vec<SupportEntry>>)
///                       36-byte outpoint key  → bincode((name, ClaimId))
///   claim_undo        — u32 BE height         → bincode(Vec<UndoEntry>)
///   meta              — utf8 key bytes        → raw bytes
pub struct ClaimDb {
    db: sled::Db,
    claims: sled::Tree,
    names: sled::Tree,
    signatures: sled::Tree,
    outpoint_claim_id: sled::Tree,
    supports: sled::Tree,
    claim_undo: sled::Tree,
    meta: sled::Tree,
    path: PathBuf,
    mode: DbMode,
}

/// Tuning profile for the underlying engine. `Sync` favors the bulk writes
/// of initial sync; `Serving` favors the random reads of a serving node.
/// Switching modes closes and reopens every tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DbMode {
    Sync,
    Serving,
}

/// Logical store identifier used by the cache layer and flush path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreId {
    Claims,
    Names,
    Signatures,
    Outpoints,
    Supports,
    Undo,
}

/// Fixed commit order of the per-store batches during a flush.
pub const STORE_FLUSH_ORDER: [StoreId; 6] = [
    StoreId::Claims,
    StoreId::Names,
    StoreId::Signatures,
    StoreId::Outpoints,
    StoreId::Supports,
    StoreId::Undo,
];

const HEIGHT_KEY: &[u8] = b"height";

pub(crate) fn undo_key(height: u32) -> [u8; 4] {
    height.to_be_bytes()
}

fn block_hash_key(height: u32) -> Vec<u8> {
    let mut key = b"block_hash/".to_vec();
    key.extend_from_slice(&height.to_be_bytes());
    key
}

pub(crate) fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, IndexError> {
    bincode::serialize(value).map_err(|e| IndexError::Serialization(e.to_string()))
}

pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, IndexError> {
    bincode::deserialize(bytes).map_err(|e| IndexError::Serialization(e.to_string()))
}

fn storage_err(e: sled::Error) -> IndexError {
    IndexError::Storage(e.to_string())
}

impl ClaimDb {
    /// Open or create the claim database at `path` with the given tuning.
    pub fn open<P: AsRef<Path>>(path: P, mode: DbMode) -> Result<Self, IndexError> {
        let config = match mode {
            DbMode::Sync => sled::Config::new()
                .path(path.as_ref())
                .cache_capacity(256 * 1024 * 1024)
                .flush_every_ms(Some(10_000)),
            DbMode::Serving => sled::Config::new()
                .path(path.as_ref())
                .cache_capacity(64 * 1024 * 1024)
                .flush_every_ms(Some(500)),
        };
        let db = config.open().map_err(storage_err)?;
        let claims            = db.open_tree("claims").map_err(storage_err)?;
        let names             = db.open_tree("names").map_err(storage_err)?;
        let signatures        = db.open_tree("signatures").map_err(storage_err)?;
        let outpoint_claim_id = db.open_tree("outpoint_claim_id").map_err(storage_err)?;
        let supports          = db.open_tree("supports").map_err(storage_err)?;
        let claim_undo        = db.open_tree("claim_undo").map_err(storage_err)?;
        let meta              = db.open_tree("meta").map_err(storage_err)?;
        Ok(Self {
            db, claims, names, signatures, outpoint_claim_id, supports, claim_undo, meta,
            path: path.as_ref().to_path_buf(),
            mode,
        })
    }

    /// Close every tree and reopen under a different tuning profile.
    /// Requires exclusive ownership: sled holds a file lock per path.
    pub fn reopen(self, mode: DbMode) -> Result<Self, IndexError> {
        let path = self.path.clone();
        drop(self);
        Self::open(path, mode)
    }

    pub fn mode(&self) -> DbMode {
        self.mode
    }

    fn tree(&self, store: StoreId) -> &sled::Tree {
        match store {
            StoreId::Claims => &self.claims,
            StoreId::Names => &self.names,
            StoreId::Signatures => &self.signatures,
            StoreId::Outpoints => &self.outpoint_claim_id,
            StoreId::Supports => &self.supports,
            StoreId::Undo => &self.claim_undo,
        }
    }

    /// Point read of the raw stored bytes.
    pub fn get_raw(&self, store: StoreId, key: &[u8]) -> Result<Option<Vec<u8>>, IndexError> {
        Ok(self.tree(store).get(key).map_err(storage_err)?.map(|v| v.to_vec()))
    }

    /// Apply one store's drained cache as an atomic batch.
    pub fn apply_batch(&self, store: StoreId, batch: sled::Batch) -> Result<(), IndexError> {
        self.tree(store).apply_batch(batch).map_err(storage_err)
    }

    /// Force all pending writes to disk.
    pub fn flush(&self) -> Result<(), IndexError> {
        self.db.flush().map_err(storage_err)?;
        Ok(())
    }

    /// Dump a store's full contents, for consistency checks.
    pub fn export(&self, store: StoreId) -> Result<Vec<(Vec<u8>, Vec<u8>)>, IndexError> {
        let mut out = Vec::new();
        for item in self.tree(store).iter() {
            let (k, v) = item.map_err(storage_err)?;
            out.push((k.to_vec(), v.to_vec()));
        }
        Ok(out)
    }

    // ── Typed reads (post-flush state, used by the session layer) ────────────

    pub fn get_claim_info(&self, claim_id: &ClaimId) -> Result<Option<ClaimInfo>, IndexError> {
        match self.claims.get(claim_id.as_bytes()).map_err(storage_err)? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    pub fn get_claims_for_name(&self, name: &[u8]) -> Result<BTreeMap<ClaimId, u32>, IndexError> {
        match self.names.get(name).map_err(storage_err)? {
            Some(bytes) => decode(&bytes),
            None => Ok(BTreeMap::new()),
        }
    }

    pub fn get_signed_claim_ids(&self, cert_id: &CertId) -> Result<Vec<ClaimId>, IndexError> {
        match self.signatures.get(cert_id.as_bytes()).map_err(storage_err)? {
            Some(bytes) => decode(&bytes),
            None => Ok(Vec::new()),
        }
    }

    pub fn get_claim_id_for_outpoint(
        &self,
        outpoint: &Outpoint,
    ) -> Result<Option<ClaimId>, IndexError> {
        match self.outpoint_claim_id.get(outpoint.to_key()).map_err(storage_err)? {
            Some(bytes) => claim_id_from_raw(&bytes).map(Some),
            None => Ok(None),
        }
    }

    pub fn get_supports_for_name(
        &self,
        name: &[u8],
    ) -> Result<BTreeMap<ClaimId, Vec<SupportEntry>>, IndexError> {
        match self.supports.get(name).map_err(storage_err)? {
            Some(bytes) => decode(&bytes),
            None => Ok(BTreeMap::new()),
        }
    }

    pub fn get_supported_claim_for_outpoint(
        &self,
        outpoint: &Outpoint,
    ) -> Result<Option<(Vec<u8>, ClaimId)>, IndexError> {
        match self.supports.get(outpoint.to_key()).map_err(storage_err)? {
            Some(bytes) => decode(&bytes).map(Some),
            None => Ok(None),
        }
    }

    pub fn get_undo(&self, height: u32) -> Result<Option<Vec<UndoEntry>>, IndexError> {
        match self.claim_undo.get(undo_key(height)).map_err(storage_err)? {
            Some(bytes) => decode(&bytes).map(Some),
            None => Ok(None),
        }
    }

    // ── Meta ─────────────────────────────────────────────────────────────────

    /// Height of the last flushed block (0 for a fresh database).
    pub fn get_height(&self) -> Result<u32, IndexError> {
        match self.meta.get(HEIGHT_KEY).map_err(storage_err)? {
            Some(bytes) if bytes.len() == 4 => {
                let mut arr = [0u8; 4];
                arr.copy_from_slice(&bytes);
                Ok(u32::from_be_bytes(arr))
            }
            Some(_) => Err(IndexError::Corrupt("malformed height meta entry".into())),
            None => Ok(0),
        }
    }

    pub fn put_height(&self, height: u32) -> Result<(), IndexError> {
        self.meta
            .insert(HEIGHT_KEY, height.to_be_bytes().to_vec())
            .map_err(storage_err)?;
        Ok(())
    }

    pub fn get_block_hash(&self, height: u32) -> Result<Option<BlockHash>, IndexError> {
        match self.meta.get(block_hash_key(height)).map_err(storage_err)? {
            Some(bytes) if bytes.len() == 32 => {
                let mut arr = [0u8; 32];
                arr.copy_from_slice(&bytes);
                Ok(Some(BlockHash::from_bytes(arr)))
            }
            Some(_) => Err(IndexError::Corrupt("malformed block hash meta entry".into())),
            None => Ok(None),
        }
    }

    pub fn put_block_hash(&self, height: u32, hash: &BlockHash) -> Result<(), IndexError> {
        self.meta
            .insert(block_hash_key(height), hash.as_bytes().as_slice())
            .map_err(storage_err)?;
        Ok(())
    }

    pub fn delete_block_hash(&self, height: u32) -> Result<(), IndexError> {
        self.meta.remove(block_hash_key(height)).map_err(storage_err)?;
        Ok(())
    }
}

pub(crate) fn claim_id_from_raw(bytes: &[u8]) -> Result<ClaimId, IndexError> {
    if bytes.len() != 20 {
        return Err(IndexError::Corrupt(format!(
            "outpoint store value must be 20 bytes, got {}",
            bytes.len()
        )));
    }
    let mut arr = [0u8; 20];
    arr.copy_from_slice(bytes);
    Ok(ClaimId::from_bytes(arr))
}

// ── Tests ────────────────────────────────────────────────────────────────────
