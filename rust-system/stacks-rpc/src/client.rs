//! Read-only call client - runs contract queries against a ledger node

use std::time::Duration;

use tracing::{debug, warn};

use crate::codec::{encode_all, TypedArgument};
use crate::{endpoints, ContractIdentifier, ReadOnlyCallBody, Result, RpcError};

/// Default per-call deadline
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A single read-only contract call
#[derive(Debug, Clone)]
pub struct CallRequest {
    pub contract_id: ContractIdentifier,
    pub function_name: String,
    pub sender: String,
    pub arguments: Vec<TypedArgument>,
}

/// HTTP client for a ledger node
#[derive(Debug, Clone)]
pub struct StacksClient {
    base_url: String,
    client: reqwest::Client,
}

impl StacksClient {
    /// Create new client; every upstream call is bounded by `timeout`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// Upstream URL for a read-only call. Segments are used verbatim.
    pub fn call_read_url(&self, contract_id: &ContractIdentifier, function_name: &str) -> String {
        format!(
            "{}{}/{}/{}/{}",
            self.base_url, endpoints::CALL_READ, contract_id.address, contract_id.name, function_name
        )
    }

    /// Run a read-only call and return the node's JSON body untouched
    pub async fn call_read_only(&self, request: &CallRequest) -> Result<serde_json::Value> {
        let url = self.call_read_url(&request.contract_id, &request.function_name);
        let body = ReadOnlyCallBody {
            sender: request.sender.clone(),
            arguments: encode_all(&request.arguments)?,
        };

        debug!(
            contract = %request.contract_id,
            function = %request.function_name,
            sender = %request.sender,
            "call-read"
        );

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "call-read rejected by node");
            return Err(RpcError::upstream(response).await);
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| RpcError::InvalidResponse(format!("call-read body is not JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = StacksClient::new("http://localhost:3999/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3999");
    }

    #[test]
    fn test_call_read_url() {
        let client = StacksClient::new("http://localhost:3999", DEFAULT_TIMEOUT).unwrap();
        let id = ContractIdentifier::resolve("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.bitrent-fractional-nft").unwrap();
        assert_eq!(
            client.call_read_url(&id, "get-property-info"),
            "http://localhost:3999/v2/contracts/call-read/ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM/bitrent-fractional-nft/get-property-info"
        );
    }
}
