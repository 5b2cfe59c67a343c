//! claimdex-rpc
//!
//! JSON-RPC 2.0 session layer over the claim indexes.
//!
//! Namespace: "claimtrie"
//! Methods:
//!   claimtrie_getClaimById               — stratum-formatted claim record
//!   claimtrie_getClaimsForName           — claim-id → sequence map for a name
//!   claimtrie_getClaimIdFromOutpoint     — claim id living at an outpoint
//!   claimtrie_getSupportsForName         — supports grouped by claim id
//!   claimtrie_getSupportedClaimByOutpoint — (name, claim id) backed by an outpoint
//!   claimtrie_getHeight                  — last flushed block height
//!
//! Reads go straight to the flushed store state; the sync task's staged
//! mutations become visible at its next flush boundary.

pub mod api;
pub mod server;
pub mod types;

pub use server::{RpcServer, RpcServerState};
pub use types::{RpcStratumClaim, RpcSupportedClaim};
