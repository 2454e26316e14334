//! Error types for ledger node interaction

/// Failures raised while talking to the ledger node
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("Invalid contract identifier: {0}")]
    InvalidContractId(String),

    #[error("rawTx is not valid hex: {0}")]
    MalformedHex(#[from] hex::FromHexError),

    #[error("Argument codec error: {0}")]
    Codec(String),

    #[error("Upstream returned status {status}: {}", String::from_utf8_lossy(.body))]
    Upstream {
        status: u16,
        /// Raw response bytes, forwarded untouched
        body: Vec<u8>,
        content_type: Option<String>,
    },

    #[error("Upstream request timed out")]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(reqwest::Error),

    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for RpcError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RpcError::Timeout
        } else {
            RpcError::Transport(err)
        }
    }
}

impl RpcError {
    /// Build an upstream rejection from a non-success node response
    pub(crate) async fn upstream(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        match response.bytes().await {
            Ok(body) => RpcError::Upstream { status, body: body.to_vec(), content_type },
            Err(err) => err.into(),
        }
    }
}

/// Result type for ledger node operations
pub type Result<T> = std::result::Result<T, RpcError>;
