use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info, warn};

use claimdex_core::claims::{ClaimInfo, StratumClaimInfo, SupportEntry, UndoEntry};
use claimdex_core::config::IndexerConfig;
use claimdex_core::error::IndexError;
use claimdex_core::schema::{self, ClaimValue};
use claimdex_core::transaction::{Block, ClaimOp, Transaction, TxOutput};
use claimdex_core::types::{CertId, ClaimId, Outpoint, TxId};
use claimdex_crypto::{address_from_script, claim_id_hash, verify_claim_signature};

use crate::cache::{Staged, StoreCache};
use crate::db::{self, ClaimDb, StoreId};
use crate::query;

/// The claim-side block processor.
///
/// Hooks the base indexer's advance/spend callbacks, stages every index
/// mutation in write-back caches, and commits them in one batched flush
/// per store immediately before the base indexer commits its UTXO batch.
/// A per-block undo journal makes every advance reversible.
pub struct ClaimIndexer {
    db: Arc<ClaimDb>,
    config: IndexerConfig,

    claim_cache: StoreCache,
    name_cache: StoreCache,
    cert_cache: StoreCache,
    outpoint_cache: StoreCache,
    support_cache: StoreCache,
    undo_cache: StoreCache,

    /// Deletes observed during advance but not yet applied; drained at flush.
    pending_abandons: HashMap<ClaimId, Vec<Outpoint>>,
    /// Undo records of the block currently being advanced.
    undo_buf: Vec<UndoEntry>,

    /// Height of the last advanced block (may be ahead of the flushed
    /// height between a block and its flush).
    height: u32,
}

impl ClaimIndexer {
    pub fn new(db: Arc<ClaimDb>, config: IndexerConfig) -> Result<Self, IndexError> {
        let height = db.get_height()?;
        Ok(Self {
            db,
            config,
            claim_cache: StoreCache::default(),
            name_cache: StoreCache::default(),
            cert_cache: StoreCache::default(),
            outpoint_cache: StoreCache::default(),
            support_cache: StoreCache::default(),
            undo_cache: StoreCache::default(),
            pending_abandons: HashMap::new(),
            undo_buf: Vec::new(),
            height,
        })
    }

    pub fn db(&self) -> &Arc<ClaimDb> {
        &self.db
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Align with the host indexer's chain height. The base indexer owns
    /// header storage; this only seeds depth computation and the
    /// next-block check.
    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }

    // ── Cache-then-store reads ───────────────────────────────────────────────

    fn cached_get(
        &self,
        cache: &StoreCache,
        store: StoreId,
        key: &[u8],
    ) -> Result<Option<Vec<u8>>, IndexError> {
        match cache.get(key) {
            Some(Staged::Present(bytes)) => Ok(Some(bytes.clone())),
            Some(Staged::Tombstone) => Ok(None),
            None => self.db.get_raw(store, key),
        }
    }

    pub fn get_claim_info(&self, claim_id: &ClaimId) -> Result<Option<ClaimInfo>, IndexError> {
        match self.cached_get(&self.claim_cache, StoreId::Claims, claim_id.as_bytes())? {
            Some(bytes) => Ok(Some(db::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    pub fn put_claim_info(
        &mut self,
        claim_id: &ClaimId,
        info: &ClaimInfo,
    ) -> Result<(), IndexError> {
        self.claim_cache
            .put(claim_id.as_bytes().to_vec(), db::encode(info)?);
        Ok(())
    }

    // ── Name index ───────────────────────────────────────────────────────────

    pub fn get_claims_for_name(
        &self,
        name: &[u8],
    ) -> Result<BTreeMap<ClaimId, u32>, IndexError> {
        match self.cached_get(&self.name_cache, StoreId::Names, name)? {
            Some(bytes) => db::decode(&bytes),
            None => Ok(BTreeMap::new()),
        }
    }

    /// Append a claim under a name with the next sequence number. A claim
    /// already listed keeps its position: rollback re-appends
    /// unconditionally and must not renumber a claim that never left.
    pub fn put_claim_for_name(&mut self, name: &[u8], claim_id: ClaimId) -> Result<u32, IndexError> {
        let mut claims = self.get_claims_for_name(name)?;
        if let Some(seq) = claims.get(&claim_id) {
            return Ok(*seq);
        }
        let seq = claims.values().copied().max().unwrap_or(0) + 1;
        claims.insert(claim_id, seq);
        self.name_cache.put(name.to_vec(), db::encode(&claims)?);
        Ok(seq)
    }

    /// Remove a claim from its name, closing the gap in the 1..k sequence.
    pub fn remove_claim_for_name(
        &mut self,
        name: &[u8],
        claim_id: &ClaimId,
    ) -> Result<(), IndexError> {
        let mut claims = self.get_claims_for_name(name)?;
        let Some(removed) = claims.remove(claim_id) else {
            return Ok(());
        };
        for seq in claims.values_mut() {
            if *seq > removed {
                *seq -= 1;
            }
        }
        if claims.is_empty() {
            self.name_cache.delete(name.to_vec());
        } else {
            self.name_cache.put(name.to_vec(), db::encode(&claims)?);
        }
        Ok(())
    }

    // ── Certificate index ────────────────────────────────────────────────────

    pub fn get_signed_claim_ids(&self, cert_id: &CertId) -> Result<Vec<ClaimId>, IndexError> {
        match self.cached_get(&self.cert_cache, StoreId::Signatures, cert_id.as_bytes())? {
            Some(bytes) => db::decode(&bytes),
            None => Ok(Vec::new()),
        }
    }

    pub fn put_claim_id_signed_by_cert_id(
        &mut self,
        cert_id: &CertId,
        claim_id: ClaimId,
    ) -> Result<(), IndexError> {
        let mut signed = self.get_signed_claim_ids(cert_id)?;
        if !signed.contains(&claim_id) {
            signed.push(claim_id);
            self.cert_cache
                .put(cert_id.as_bytes().to_vec(), db::encode(&signed)?);
        }
        Ok(())
    }

    /// Drop a certificate's entire signed-claims list (the certificate
    /// claim itself was abandoned).
    pub fn remove_certificate(&mut self, cert_id: &CertId) {
        self.cert_cache.delete(cert_id.as_bytes().to_vec());
    }

    pub fn remove_claim_from_certificate_claims(
        &mut self,
        cert_id: &CertId,
        claim_id: &ClaimId,
    ) -> Result<(), IndexError> {
        let mut signed = self.get_signed_claim_ids(cert_id)?;
        signed.retain(|c| c != claim_id);
        if signed.is_empty() {
            self.cert_cache.delete(cert_id.as_bytes().to_vec());
        } else {
            self.cert_cache
                .put(cert_id.as_bytes().to_vec(), db::encode(&signed)?);
        }
        Ok(())
    }

    // ── Outpoint index ───────────────────────────────────────────────────────

    pub fn put_claim_id_for_outpoint(&mut self, outpoint: &Outpoint, claim_id: ClaimId) {
        self.outpoint_cache
            .put(outpoint.to_key().to_vec(), claim_id.as_bytes().to_vec());
    }

    pub fn get_claim_id_from_outpoint(
        &self,
        outpoint: &Outpoint,
    ) -> Result<Option<ClaimId>, IndexError> {
        match self.cached_get(&self.outpoint_cache, StoreId::Outpoints, &outpoint.to_key())? {
            Some(bytes) => db::claim_id_from_raw(&bytes).map(Some),
            None => Ok(None),
        }
    }

    pub fn delete_claim_id_for_outpoint(&mut self, outpoint: &Outpoint) {
        self.outpoint_cache.delete(outpoint.to_key().to_vec());
    }

    // ── Support index ────────────────────────────────────────────────────────

    pub fn get_supports_for_name(
        &self,
        name: &[u8],
    ) -> Result<BTreeMap<ClaimId, Vec<SupportEntry>>, IndexError> {
        match self.cached_get(&self.support_cache, StoreId::Supports, name)? {
            Some(bytes) => db::decode(&bytes),
            None => Ok(BTreeMap::new()),
        }
    }

    pub fn get_supported_claim_name_id_from_outpoint(
        &self,
        outpoint: &Outpoint,
    ) -> Result<Option<(Vec<u8>, ClaimId)>, IndexError> {
        match self.cached_get(&self.support_cache, StoreId::Supports, &outpoint.to_key())? {
            Some(bytes) => db::decode(&bytes).map(Some),
            None => Ok(None),
        }
    }

    pub fn put_support(
        &mut self,
        name: &[u8],
        claim_id: ClaimId,
        txid: TxId,
        nout: u32,
        height: u32,
        amount: u64,
    ) -> Result<(), IndexError> {
        let mut supports = self.get_supports_for_name(name)?;
        supports.entry(claim_id).or_default().push(SupportEntry {
            txid,
            nout,
            height,
            amount,
        });
        self.support_cache.put(name.to_vec(), db::encode(&supports)?);
        let outpoint = Outpoint::new(txid, nout);
        self.support_cache.put(
            outpoint.to_key().to_vec(),
            db::encode(&(name.to_vec(), claim_id))?,
        );
        Ok(())
    }

    /// Drop the support living at `outpoint`, if any, from both key shapes.
    pub fn remove_support_outpoint(&mut self, outpoint: &Outpoint) -> Result<(), IndexError> {
        let Some((name, claim_id)) = self.get_supported_claim_name_id_from_outpoint(outpoint)?
        else {
            return Ok(());
        };
        self.support_cache.delete(outpoint.to_key().to_vec());
        let mut supports = self.get_supports_for_name(&name)?;
        if let Some(entries) = supports.get_mut(&claim_id) {
            entries.retain(|s| s.outpoint() != *outpoint);
        }
        self.support_cache.put(name, db::encode(&supports)?);
        Ok(())
    }

    // ── Abandons ─────────────────────────────────────────────────────────────

    /// Queue the claim living at a spent outpoint for abandonment. The
    /// actual index removal is deferred to the next flush. Returns the
    /// queued claim id, if the outpoint carried one.
    pub fn abandon_spent(&mut self, outpoint: &Outpoint) -> Result<Option<ClaimId>, IndexError> {
        let Some(claim_id) = self.get_claim_id_from_outpoint(outpoint)? else {
            return Ok(None);
        };
        debug!(claim_id = %claim_id, outpoint = %outpoint, "claim outpoint spent, queueing abandon");
        self.pending_abandons
            .entry(claim_id)
            .or_default()
            .push(*outpoint);
        Ok(Some(claim_id))
    }

    // ── Metadata extraction ──────────────────────────────────────────────────

    fn claim_info_from_output(
        &self,
        output: &TxOutput,
        name: &[u8],
        value: &[u8],
        txid: TxId,
        nout: u32,
        height: u32,
    ) -> ClaimInfo {
        let address = address_from_script(&output.script);
        let cert_id = schema::extract_cert_id(name, value);
        let mut info = ClaimInfo {
            name: name.to_vec(),
            value: value.to_vec(),
            txid,
            nout,
            amount: output.amount,
            address,
            height,
            cert_id,
        };
        if self.config.validate_claim_signatures && info.cert_id.is_some() {
            info.cert_id = self.validated_cert_id(&info);
        }
        info
    }

    /// Re-check the signer relation of a claim whose `cert_id` is set.
    /// Returns the cert id when the signature holds (or the signer
    /// certificate is not indexed), `None` when the link must be dropped.
    fn validated_cert_id(&self, info: &ClaimInfo) -> Option<CertId> {
        let cert_id = info.cert_id?;
        let cert_claim = match self.get_claim_info(&cert_id) {
            Ok(Some(claim)) => claim,
            Ok(None) => return Some(cert_id),
            Err(e) => {
                warn!(error = %e, cert_id = %cert_id, "certificate lookup failed during signature validation");
                return None;
            }
        };
        let Ok(envelope) = ClaimValue::decode(&info.value) else {
            return None;
        };
        let Some(signature) = envelope.signature else {
            return None;
        };
        let Ok(cert_envelope) = ClaimValue::decode(&cert_claim.value) else {
            return None;
        };
        // Back to the big-endian form the signature was made over.
        let stored = cert_id.reversed();
        if verify_claim_signature(
            &info.address,
            &envelope.content,
            stored.as_bytes(),
            &signature,
            &cert_envelope.content,
        ) {
            Some(cert_id)
        } else {
            warn!(outpoint = %info.outpoint(), cert_id = %cert_id,
                  "claim signature invalid, dropping certificate link");
            None
        }
    }

    // ── Block advance ────────────────────────────────────────────────────────

    /// Fold one block's metadata outputs and spends into the caches and
    /// stage its undo journal. Must be followed by `flush` before the base
    /// indexer commits its own batch.
    pub fn advance_block(&mut self, block: &Block) -> Result<(), IndexError> {
        let height = block.header.height;
        if height != self.height + 1 {
            return Err(IndexError::HeightMismatch {
                expected: self.height + 1,
                got: height,
            });
        }
        for tx in &block.txs {
            self.advance_tx(tx, height)?;
        }
        let undo: Vec<UndoEntry> = std::mem::take(&mut self.undo_buf);
        self.undo_cache
            .put(db::undo_key(height).to_vec(), db::encode(&undo)?);
        self.height = height;
        debug!(height, txs = block.txs.len(), "advanced claim state");
        Ok(())
    }

    fn advance_tx(&mut self, tx: &Transaction, height: u32) -> Result<(), IndexError> {
        // Outputs first: an update in this tx must be applied before the
        // input walk turns its consumed outpoint into an abandon.
        let mut update_spends: HashSet<Outpoint> = HashSet::new();
        for (nout, output) in tx.outputs.iter().enumerate() {
            let nout = nout as u32;
            match &output.claim {
                Some(ClaimOp::NameClaim { name, value }) => {
                    self.advance_name_claim(tx, output, nout, name, value, height)?;
                }
                Some(ClaimOp::Update {
                    claim_id,
                    name,
                    value,
                }) => match self.update_prior_outpoint(tx, claim_id)? {
                    Some(prior) => {
                        self.advance_update(tx, output, nout, *claim_id, name, value, height, prior)?;
                        update_spends.insert(prior);
                    }
                    None => {
                        warn!(txid = %tx.txid, claim_id = %claim_id,
                              "rejected claim update: prior outpoint not among inputs");
                    }
                },
                Some(ClaimOp::Support { name, claim_id }) => {
                    self.advance_support(tx, output, nout, name, *claim_id, height)?;
                }
                None => {}
            }
        }
        for input in &tx.inputs {
            if update_spends.contains(&input.prevout) {
                continue;
            }
            self.spend_claim_outpoint(&input.prevout)?;
            self.remove_support_outpoint(&input.prevout)?;
        }
        Ok(())
    }

    /// The update-consumes-prior rule: an update is valid only when the
    /// claim exists and its current outpoint is spent by this transaction.
    fn update_prior_outpoint(
        &self,
        tx: &Transaction,
        claim_id: &ClaimId,
    ) -> Result<Option<Outpoint>, IndexError> {
        let Some(info) = self.get_claim_info(claim_id)? else {
            return Ok(None);
        };
        let prior = info.outpoint();
        Ok(tx.spends(&prior).then_some(prior))
    }

    fn advance_name_claim(
        &mut self,
        tx: &Transaction,
        output: &TxOutput,
        nout: u32,
        name: &[u8],
        value: &[u8],
        height: u32,
    ) -> Result<(), IndexError> {
        let claim_id = claim_id_hash(&tx.txid, nout);
        let info = self.claim_info_from_output(output, name, value, tx.txid, nout, height);
        self.undo_buf.push(UndoEntry {
            claim_id,
            previous: None,
        });
        if let Some(cert_id) = info.cert_id {
            self.put_claim_id_signed_by_cert_id(&cert_id, claim_id)?;
        }
        self.put_claim_info(&claim_id, &info)?;
        self.put_claim_for_name(name, claim_id)?;
        self.put_claim_id_for_outpoint(&info.outpoint(), claim_id);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn advance_update(
        &mut self,
        tx: &Transaction,
        output: &TxOutput,
        nout: u32,
        claim_id: ClaimId,
        name: &[u8],
        value: &[u8],
        height: u32,
        prior: Outpoint,
    ) -> Result<(), IndexError> {
        let Some(old) = self.get_claim_info(&claim_id)? else {
            return Ok(());
        };
        // A spend callback may already have queued this outpoint for
        // abandon; the accepted update supersedes it.
        if let Some(outpoints) = self.pending_abandons.get_mut(&claim_id) {
            outpoints.retain(|o| *o != prior);
            if outpoints.is_empty() {
                self.pending_abandons.remove(&claim_id);
            }
        }
        self.undo_buf.push(UndoEntry {
            claim_id,
            previous: Some(old.clone()),
        });
        self.delete_claim_id_for_outpoint(&old.outpoint());
        if let Some(old_cert) = old.cert_id {
            self.remove_claim_from_certificate_claims(&old_cert, &claim_id)?;
        }
        let info = self.claim_info_from_output(output, name, value, tx.txid, nout, height);
        if let Some(new_cert) = info.cert_id {
            self.put_claim_id_signed_by_cert_id(&new_cert, claim_id)?;
        }
        self.put_claim_info(&claim_id, &info)?;
        // Name is invariant across updates; the sequence entry stays put.
        self.put_claim_id_for_outpoint(&info.outpoint(), claim_id);
        Ok(())
    }

    fn advance_support(
        &mut self,
        tx: &Transaction,
        output: &TxOutput,
        nout: u32,
        name: &[u8],
        claim_id: ClaimId,
        height: u32,
    ) -> Result<(), IndexError> {
        let own = Outpoint::new(tx.txid, nout);
        if tx.spends(&own) {
            // A support that dies in its own transaction is never indexed.
            return Ok(());
        }
        self.put_support(name, claim_id, tx.txid, nout, height, output.amount)
    }

    fn spend_claim_outpoint(&mut self, outpoint: &Outpoint) -> Result<(), IndexError> {
        if let Some(claim_id) = self.abandon_spent(outpoint)? {
            if let Some(old) = self.get_claim_info(&claim_id)? {
                self.undo_buf.push(UndoEntry {
                    claim_id,
                    previous: Some(old),
                });
            }
        }
        Ok(())
    }

    // ── Flush ────────────────────────────────────────────────────────────────

    fn caches_empty(&self) -> bool {
        self.claim_cache.is_empty()
            && self.name_cache.is_empty()
            && self.cert_cache.is_empty()
            && self.outpoint_cache.is_empty()
            && self.support_cache.is_empty()
            && self.undo_cache.is_empty()
    }

    fn cache_mut(&mut self, store: StoreId) -> &mut StoreCache {
        match store {
            StoreId::Claims => &mut self.claim_cache,
            StoreId::Names => &mut self.name_cache,
            StoreId::Signatures => &mut self.cert_cache,
            StoreId::Outpoints => &mut self.outpoint_cache,
            StoreId::Supports => &mut self.support_cache,
            StoreId::Undo => &mut self.undo_cache,
        }
    }

    /// Commit every staged mutation in one batch per store, in a fixed
    /// store order, then clear the caches. A failure here is fatal: the
    /// five stores cannot be partially rolled back in-process.
    pub fn flush(&mut self) -> Result<(), IndexError> {
        if self.caches_empty() && self.pending_abandons.is_empty() {
            return Ok(());
        }
        let abandoned = self.pending_abandons.len();
        self.drain_pending_abandons()?;
        let (claims, names, certs, outpoints, supports) = (
            self.claim_cache.len(),
            self.name_cache.len(),
            self.cert_cache.len(),
            self.outpoint_cache.len(),
            self.support_cache.len(),
        );
        for store in db::STORE_FLUSH_ORDER {
            let mut batch = sled::Batch::default();
            self.cache_mut(store).drain_into(&mut batch);
            self.db
                .apply_batch(store, batch)
                .map_err(|e| IndexError::FlushFailed(e.to_string()))?;
        }
        self.db
            .put_height(self.height)
            .map_err(|e| IndexError::FlushFailed(e.to_string()))?;
        self.db
            .flush()
            .map_err(|e| IndexError::FlushFailed(e.to_string()))?;
        info!(
            height = self.height,
            claims, names, certs, outpoints, supports, abandoned,
            "flushed claim stores"
        );
        Ok(())
    }

    fn drain_pending_abandons(&mut self) -> Result<(), IndexError> {
        let pending = std::mem::take(&mut self.pending_abandons);
        for (claim_id, outpoints) in pending {
            if outpoints.is_empty() {
                continue;
            }
            let Some(claim) = self.get_claim_info(&claim_id)? else {
                warn!(claim_id = %claim_id, "pending abandon for unknown claim, skipping");
                continue;
            };
            self.remove_claim_for_name(&claim.name, &claim_id)?;
            if let Some(cert_id) = claim.cert_id {
                self.remove_claim_from_certificate_claims(&cert_id, &claim_id)?;
            }
            // If the claim was itself a certificate, detach everything it
            // signed. The signed claims keep their own cert_id fields.
            self.remove_certificate(&claim_id);
            self.claim_cache.delete(claim_id.as_bytes().to_vec());
            for outpoint in outpoints {
                self.delete_claim_id_for_outpoint(&outpoint);
            }
        }
        Ok(())
    }

    /// Sync-loop sanity hook: panics if anything is still staged.
    pub fn assert_flushed(&self) {
        assert!(self.caches_empty(), "write-back caches not empty after flush");
        assert!(
            self.pending_abandons.is_empty(),
            "pending abandons not drained after flush"
        );
        assert!(self.undo_buf.is_empty(), "undo buffer not drained after flush");
    }

    // ── Rollback ─────────────────────────────────────────────────────────────

    /// Reverse one block using its undo journal. The caller flushes
    /// between blocks of a deep reorg (or relies on the caches to hold
    /// the whole depth).
    pub fn rollback_block(&mut self, height: u32) -> Result<(), IndexError> {
        if height != self.height {
            return Err(IndexError::HeightMismatch {
                expected: self.height,
                got: height,
            });
        }
        let key = db::undo_key(height);
        let Some(bytes) = self.cached_get(&self.undo_cache, StoreId::Undo, &key)? else {
            return Err(IndexError::MissingUndo(height));
        };
        let entries: Vec<UndoEntry> = db::decode(&bytes)?;

        for entry in entries.iter().rev() {
            let current = self.get_claim_info(&entry.claim_id)?;
            match (&current, &entry.previous) {
                // Was an update: unhook the current incarnation.
                (Some(cur), Some(_)) => {
                    self.delete_claim_id_for_outpoint(&cur.outpoint());
                    if let Some(cert_id) = cur.cert_id {
                        self.remove_claim_from_certificate_claims(&cert_id, &entry.claim_id)?;
                    }
                }
                // Was a fresh name claim: abandon it outright.
                (Some(cur), None) => {
                    let outpoint = cur.outpoint();
                    self.abandon_spent(&outpoint)?;
                }
                // Was an abandon: the restore below is the whole story.
                (None, Some(_)) => {}
                (None, None) => {
                    return Err(IndexError::Corrupt(format!(
                        "undo entry for claim {} has neither current nor prior state",
                        entry.claim_id
                    )));
                }
            }

            if let Some(previous) = &entry.previous {
                let mut restored = previous.clone();
                if restored.cert_id.is_some() {
                    if self.config.validate_claim_signatures {
                        restored.cert_id = self.validated_cert_id(&restored);
                    }
                    if let Some(cert_id) = restored.cert_id {
                        self.put_claim_id_signed_by_cert_id(&cert_id, entry.claim_id)?;
                    }
                }
                self.put_claim_info(&entry.claim_id, &restored)?;
                self.put_claim_for_name(&restored.name, entry.claim_id)?;
                self.put_claim_id_for_outpoint(&restored.outpoint(), entry.claim_id);
            }
        }

        self.undo_cache.delete(key.to_vec());
        self.height = height - 1;
        info!(height, entries = entries.len(), "rolled back claim state");
        Ok(())
    }

    // ── Query surface ────────────────────────────────────────────────────────

    /// Stratum-formatted claim lookup observing staged mutations.
    pub fn get_stratum_claim_info(
        &self,
        claim_id: &ClaimId,
    ) -> Result<Option<StratumClaimInfo>, IndexError> {
        let Some(claim) = self.get_claim_info(claim_id)? else {
            return Ok(None);
        };
        let sequence = self
            .get_claims_for_name(&claim.name)?
            .get(claim_id)
            .copied()
            .unwrap_or(0);
        let supports = self
            .get_supports_for_name(&claim.name)?
            .remove(claim_id)
            .unwrap_or_default();
        Ok(Some(query::assemble_stratum(
            claim,
            *claim_id,
            sequence,
            &supports,
            self.height,
        )))
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
