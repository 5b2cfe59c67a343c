pub mod address;
pub mod hash;
pub mod sig;

pub use address::address_from_script;
pub use hash::{claim_id_hash, hash160, sha256, sha256d};
pub use sig::{sign_claim, verify_claim_signature};
