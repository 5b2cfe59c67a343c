//! Read-side assembly of the composite stratum record.
//!
//! Two entry points share the same assembly: the cache-aware
//! `ClaimIndexer::get_stratum_claim_info` used inside the sync task, and
//! `stratum_claim_info` here, which reads the post-flush store state and
//! is what the session layer calls.

use claimdex_core::claims::{ClaimInfo, StratumClaimInfo, SupportEntry};
use claimdex_core::error::IndexError;
use claimdex_core::types::ClaimId;

use crate::db::ClaimDb;

pub(crate) fn assemble_stratum(
    claim: ClaimInfo,
    claim_id: ClaimId,
    sequence: u32,
    supports: &[SupportEntry],
    db_height: u32,
) -> StratumClaimInfo {
    let effective_amount = claim.amount + supports.iter().map(|s| s.amount).sum::<u64>();
    StratumClaimInfo {
        depth: db_height.saturating_sub(claim.height),
        claim_sequence: sequence,
        effective_amount,
        supports: supports.iter().map(|s| (s.txid, s.nout, s.amount)).collect(),
        name: claim.name,
        claim_id,
        txid: claim.txid,
        nout: claim.nout,
        amount: claim.amount,
        address: claim.address,
        height: claim.height,
        value: claim.value,
    }
}

/// Stratum-formatted claim lookup against the flushed store state.
pub fn stratum_claim_info(
    db: &ClaimDb,
    claim_id: &ClaimId,
) -> Result<Option<StratumClaimInfo>, IndexError> {
    let Some(claim) = db.get_claim_info(claim_id)? else {
        return Ok(None);
    };
    let sequence = db
        .get_claims_for_name(&claim.name)?
        .get(claim_id)
        .copied()
        .unwrap_or(0);
    let supports = db
        .get_supports_for_name(&claim.name)?
        .remove(claim_id)
        .unwrap_or_default();
    let db_height = db.get_height()?;
    Ok(Some(assemble_stratum(
        claim, *claim_id, sequence, &supports, db_height,
    )))
}
