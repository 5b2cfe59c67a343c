use claimdex_core::error::IndexError;
use claimdex_core::transaction::Block;

/// JSON-RPC 2.0 client for the full-node daemon the indexer trails.
///
/// Uses raw HTTP POST with serde_json rather than a full jsonrpsee client
/// to keep the binary lean. Every failure maps to `IndexError::Daemon`,
/// which the sync loop treats as transient.
pub struct DaemonClient {
    url: String,
    client: reqwest::Client,
}

impl DaemonClient {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Call a JSON-RPC method and return the `result` field.
    async fn call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, IndexError> {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1
        });

        let resp = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| IndexError::Daemon(format!("connecting to daemon at {}: {e}", self.url)))?;

        let json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| IndexError::Daemon(format!("parsing daemon response: {e}")))?;

        if let Some(err) = json.get("error") {
            if !err.is_null() {
                return Err(IndexError::Daemon(format!("daemon RPC error: {err}")));
            }
        }

        Ok(json["result"].clone())
    }

    /// Current chain height of the daemon.
    pub async fn get_block_count(&self) -> Result<u32, IndexError> {
        let result = self.call("getblockcount", serde_json::json!([])).await?;
        result
            .as_u64()
            .map(|h| h as u32)
            .ok_or_else(|| IndexError::Daemon("getblockcount returned a non-numeric height".into()))
    }

    /// Fetch the block at `height` as hex-encoded bincode.
    pub async fn get_block(&self, height: u32) -> Result<Block, IndexError> {
        let result = self.call("getblock", serde_json::json!([height])).await?;
        let block_hex = result
            .as_str()
            .ok_or_else(|| IndexError::Daemon(format!("getblock({height}) returned a non-string block")))?;
        let bytes = hex::decode(block_hex)
            .map_err(|e| IndexError::Daemon(format!("invalid block hex at height {height}: {e}")))?;
        bincode::deserialize(&bytes)
            .map_err(|e| IndexError::Daemon(format!("decoding block {height}: {e}")))
    }
}
