//! Application state shared across handlers

use std::sync::Arc;

use stacks_rpc::StacksClient;

use crate::config::{Contracts, GatewayConfig};

/// Read-only after startup; cloned into every handler
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<StacksClient>,
    pub contracts: Arc<Contracts>,
    pub default_sender: Arc<str>,
}

impl AppState {
    /// Validate the configuration and build the upstream client
    pub fn from_config(config: &GatewayConfig) -> stacks_rpc::Result<Self> {
        let contracts = config.contracts()?;
        let client = StacksClient::new(&config.stacks_api_url, config.upstream_timeout())?;

        Ok(Self {
            client: Arc::new(client),
            contracts: Arc::new(contracts),
            default_sender: Arc::from(config.default_sender.as_str()),
        })
    }

    /// Fall back to the default sender when the request names none
    pub fn sender_or_default(&self, sender: Option<String>) -> String {
        sender
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.default_sender.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SENDER;

    #[test]
    fn test_sender_fallback() {
        let state = AppState::from_config(&GatewayConfig::default()).unwrap();

        assert_eq!(state.sender_or_default(None), DEFAULT_SENDER);
        assert_eq!(state.sender_or_default(Some(String::new())), DEFAULT_SENDER);
        assert_eq!(state.sender_or_default(Some("ST2ABC".to_string())), "ST2ABC");
    }

    #[test]
    fn test_bad_contract_fails_state() {
        let config = GatewayConfig {
            revenue_contract: "no-dot".to_string(),
            ..GatewayConfig::default()
        };
        assert!(AppState::from_config(&config).is_err());
    }
}
