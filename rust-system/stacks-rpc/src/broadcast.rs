//! Transaction broadcaster - submits signed transactions to a ledger node

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{endpoints, Result, RpcError, StacksClient};

/// Successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastResult {
    pub txid: String,
}

impl BroadcastResult {
    /// The node answers with the txid as plain text; newlines are dropped wherever they appear
    pub fn from_node_text(text: &str) -> Self {
        Self { txid: text.replace('\n', "") }
    }
}

/// Convert a hex-encoded signed transaction into bytes
pub fn decode_raw_tx(raw_tx_hex: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(raw_tx_hex)?)
}

impl StacksClient {
    pub fn transactions_url(&self) -> String {
        format!("{}{}", self.base_url(), endpoints::TRANSACTIONS)
    }

    /// Broadcast a hex-encoded signed transaction
    pub async fn broadcast_transaction(&self, raw_tx_hex: &str) -> Result<BroadcastResult> {
        let tx_bytes = decode_raw_tx(raw_tx_hex)?;
        let url = self.transactions_url();

        debug!(bytes = tx_bytes.len(), "broadcasting transaction");

        let response = self
            .http()
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(tx_bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "transaction rejected by node");
            return Err(RpcError::upstream(response).await);
        }

        let text = response.text().await?;

        let result = BroadcastResult::from_node_text(&text);
        info!(txid = %result.txid, "transaction broadcast");
        Ok(result)
    }
}
