use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;

use jsonrpsee::core::{async_trait, RpcResult};
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::types::ErrorObject;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use claimdex_core::claims::StratumClaimInfo;
use claimdex_core::types::{ClaimId, Outpoint, TxId};
use claimdex_state::{query, ClaimDb};

use crate::api::ClaimtrieApiServer;
use crate::types::{RpcStratumClaim, RpcSupportedClaim};

fn rpc_err(code: i32, msg: impl Into<String>) -> ErrorObject<'static> {
    ErrorObject::owned(code, msg.into(), None::<()>)
}

/// Shared state passed to the RPC server.
pub struct RpcServerState {
    pub db: Arc<ClaimDb>,
}

/// The RPC server implementation.
pub struct RpcServer {
    state: Arc<RpcServerState>,
}

impl RpcServer {
    pub fn new(state: Arc<RpcServerState>) -> Self {
        Self { state }
    }

    /// Start the JSON-RPC server on `addr` with permissive CORS headers.
    /// Returns a handle to stop it.
    pub async fn start(self, addr: SocketAddr) -> anyhow::Result<ServerHandle> {
        let cors = CorsLayer::new()
            .allow_methods(Any)
            .allow_origin(Any)
            .allow_headers(Any);

        let server = Server::builder()
            .set_http_middleware(tower::ServiceBuilder::new().layer(cors))
            .build(addr)
            .await?;

        let module = self.into_rpc();
        let handle = server.start(module);
        info!(%addr, "RPC server started");
        Ok(handle)
    }
}

// ── Parameter parsing ────────────────────────────────────────────────────────

fn parse_claim_id(value: &str) -> Result<ClaimId, ErrorObject<'static>> {
    ClaimId::from_hex(value)
        .map_err(|_| rpc_err(-32602, format!("{value} should be a claim id hash")))
}

fn parse_txid(value: &str) -> Result<TxId, ErrorObject<'static>> {
    TxId::from_display_hex(value)
        .map_err(|_| rpc_err(-32602, format!("{value} should be a transaction hash")))
}

// ── Conversion ───────────────────────────────────────────────────────────────

fn stratum_to_rpc(info: StratumClaimInfo) -> RpcStratumClaim {
    RpcStratumClaim {
        name: String::from_utf8_lossy(&info.name).into_owned(),
        claim_id: info.claim_id.to_hex(),
        txid: info.txid.to_display_hex(),
        nout: info.nout,
        amount: info.amount,
        address: String::from_utf8_lossy(&info.address).into_owned(),
        height: info.height,
        depth: info.depth,
        claim_sequence: info.claim_sequence,
        value: hex::encode(&info.value),
        effective_amount: info.effective_amount,
        supports: info
            .supports
            .into_iter()
            .map(|(txid, nout, amount)| (txid.to_display_hex(), nout, amount))
            .collect(),
    }
}

// ── RPC implementation ───────────────────────────────────────────────────────

#[async_trait]
impl ClaimtrieApiServer for RpcServer {
    async fn get_claim_by_id(&self, claim_id: String) -> RpcResult<Option<RpcStratumClaim>> {
        let id = parse_claim_id(&claim_id)?;
        let info = query::stratum_claim_info(&self.state.db, &id)
            .map_err(|e| rpc_err(-32603, e.to_string()))?;
        Ok(info.map(stratum_to_rpc))
    }

    async fn get_claims_for_name(&self, name: String) -> RpcResult<BTreeMap<String, u32>> {
        let claims = self
            .state
            .db
            .get_claims_for_name(name.as_bytes())
            .map_err(|e| rpc_err(-32603, e.to_string()))?;
        Ok(claims
            .into_iter()
            .map(|(claim_id, seq)| (claim_id.to_hex(), seq))
            .collect())
    }

    async fn get_claim_id_from_outpoint(
        &self,
        txid: String,
        nout: u32,
    ) -> RpcResult<Option<String>> {
        let txid = parse_txid(&txid)?;
        let claim_id = self
            .state
            .db
            .get_claim_id_for_outpoint(&Outpoint::new(txid, nout))
            .map_err(|e| rpc_err(-32603, e.to_string()))?;
        Ok(claim_id.map(|c| c.to_hex()))
    }

    async fn get_supports_for_name(
        &self,
        name: String,
    ) -> RpcResult<BTreeMap<String, Vec<(String, u32, u32, u64)>>> {
        let supports = self
            .state
            .db
            .get_supports_for_name(name.as_bytes())
            .map_err(|e| rpc_err(-32603, e.to_string()))?;
        Ok(supports
            .into_iter()
            .map(|(claim_id, entries)| {
                (
                    claim_id.to_hex(),
                    entries
                        .into_iter()
                        .map(|s| (s.txid.to_display_hex(), s.nout, s.height, s.amount))
                        .collect(),
                )
            })
            .collect())
    }

    async fn get_supported_claim_by_outpoint(
        &self,
        txid: String,
        nout: u32,
    ) -> RpcResult<Option<RpcSupportedClaim>> {
        let txid = parse_txid(&txid)?;
        let supported = self
            .state
            .db
            .get_supported_claim_for_outpoint(&Outpoint::new(txid, nout))
            .map_err(|e| rpc_err(-32603, e.to_string()))?;
        Ok(supported.map(|(name, claim_id)| RpcSupportedClaim {
            name: String::from_utf8_lossy(&name).into_owned(),
            claim_id: claim_id.to_hex(),
        }))
    }

    async fn get_height(&self) -> RpcResult<u32> {
        self.state
            .db
            .get_height()
            .map_err(|e| rpc_err(-32603, e.to_string()))
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
