/// Core-owned indexer options. Everything else (data dir, listen
/// addresses, daemon URL) belongs to the node binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndexerConfig {
    /// Verify the certificate signature of every claim that carries a
    /// certificate reference. On verification failure the claim is still
    /// indexed with its `cert_id` dropped. Off by default; a database built
    /// with one setting must not be resumed under the other.
    pub validate_claim_signatures: bool,
}
