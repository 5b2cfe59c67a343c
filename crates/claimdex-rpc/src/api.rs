use std::collections::BTreeMap;

use jsonrpsee::core::RpcResult;
use jsonrpsee::proc_macros::rpc;

use crate::types::{RpcStratumClaim, RpcSupportedClaim};

/// Claim-index JSON-RPC 2.0 API.
///
/// All method names are prefixed with "claimtrie_" via
/// `namespace = "claimtrie"`. Transaction hashes cross the wire in the
/// reversed-hex display convention; claim ids as plain 40-char hex.
#[rpc(server, namespace = "claimtrie")]
pub trait ClaimtrieApi {
    /// Stratum-formatted record for a claim id, or null if unknown.
    #[method(name = "getClaimById")]
    async fn get_claim_by_id(&self, claim_id: String) -> RpcResult<Option<RpcStratumClaim>>;

    /// Map of claim-id hex → 1-based sequence number for every active
    /// claim under `name`.
    #[method(name = "getClaimsForName")]
    async fn get_claims_for_name(&self, name: String) -> RpcResult<BTreeMap<String, u32>>;

    /// Claim id living at `(txid, nout)`, or null.
    #[method(name = "getClaimIdFromOutpoint")]
    async fn get_claim_id_from_outpoint(
        &self,
        txid: String,
        nout: u32,
    ) -> RpcResult<Option<String>>;

    /// Supports under `name`, grouped by claim id. Each support is a
    /// `[txid, nout, height, amount]` tuple.
    #[method(name = "getSupportsForName")]
    async fn get_supports_for_name(
        &self,
        name: String,
    ) -> RpcResult<BTreeMap<String, Vec<(String, u32, u32, u64)>>>;

    /// The `(name, claim_id)` a support outpoint backs, or null.
    #[method(name = "getSupportedClaimByOutpoint")]
    async fn get_supported_claim_by_outpoint(
        &self,
        txid: String,
        nout: u32,
    ) -> RpcResult<Option<RpcSupportedClaim>>;

    /// Height of the last flushed block.
    #[method(name = "getHeight")]
    async fn get_height(&self) -> RpcResult<u32>;
}
