//! claimdex-state
//!
//! The claim-side state of the indexer: five persistent key-value stores
//! plus the per-block undo journal, a write-back cache layer over them,
//! the block-advance engine, and the reorg rollback engine.

pub mod cache;
pub mod db;
pub mod processor;
pub mod query;

pub use db::{ClaimDb, DbMode, StoreId};
pub use processor::ClaimIndexer;
pub use query::stratum_claim_info;
