pub mod claims;
pub mod config;
pub mod error;
pub mod schema;
pub mod transaction;
pub mod types;

pub use claims::{ClaimInfo, StratumClaimInfo, SupportEntry, UndoEntry};
pub use config::IndexerConfig;
pub use error::IndexError;
pub use schema::ClaimValue;
pub use transaction::{Block, BlockHeader, ClaimOp, Transaction, TxInput, TxOutput};
pub use types::{BlockHash, CertId, ClaimId, Outpoint, TxId};
