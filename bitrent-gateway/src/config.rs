//! Gateway configuration
//!
//! Loaded once at startup from built-in defaults, an optional TOML file and
//! the process environment, in that order of precedence.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use stacks_rpc::ContractIdentifier;

pub const DEFAULT_STACKS_API_URL: &str = "http://localhost:3999";
pub const DEFAULT_NFT_CONTRACT: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.bitrent-fractional-nft";
pub const DEFAULT_REVENUE_CONTRACT: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM.bitrent-revenue-split";
pub const DEFAULT_SENDER: &str = "ST1SJ3DTE5DN7X54YDH5D64R3BCB6A2AG2ZQ8YPD5";
pub const DEFAULT_LISTEN_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Raw gateway settings
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Ledger node base URL
    pub stacks_api_url: String,
    /// `address.name` of the fractional NFT contract
    pub nft_contract: String,
    /// `address.name` of the revenue split contract
    pub revenue_contract: String,
    /// Sender principal used when a request names none
    pub default_sender: String,
    pub listen_host: String,
    pub port: u16,
    /// Deadline applied to every upstream call
    pub upstream_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            stacks_api_url: DEFAULT_STACKS_API_URL.to_string(),
            nft_contract: DEFAULT_NFT_CONTRACT.to_string(),
            revenue_contract: DEFAULT_REVENUE_CONTRACT.to_string(),
            default_sender: DEFAULT_SENDER.to_string(),
            listen_host: DEFAULT_LISTEN_HOST.to_string(),
            port: DEFAULT_PORT,
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

/// Contract identifiers resolved from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contracts {
    pub nft: ContractIdentifier,
    pub revenue: ContractIdentifier,
}

impl GatewayConfig {
    /// Load settings, layering an optional file and the process environment over the defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        Self::from_sources(path.map(::config::File::from), ::config::Environment::default())
    }

    /// Defaults, then `file`, then `env`; the result is validated
    pub fn from_sources<F>(file: Option<F>, env: ::config::Environment) -> Result<Self, ::config::ConfigError>
    where
        F: ::config::Source + Send + Sync + 'static,
    {
        let mut builder = Self::defaults()?;
        if let Some(file) = file {
            builder = builder.add_source(file);
        }
        let config: Self = builder.add_source(env.try_parsing(true)).build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ::config::ConfigError> {
        if self.upstream_timeout_secs == 0 {
            return Err(::config::ConfigError::Message(
                "upstream_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Command-line flags win over every other source
    pub fn apply_cli_overrides(&mut self, host: Option<String>, port: Option<u16>) {
        if let Some(host) = host {
            self.listen_host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
    }

    /// Builder pre-populated with the fallback value of every setting
    pub fn defaults() -> Result<::config::ConfigBuilder<::config::builder::DefaultState>, ::config::ConfigError> {
        let defaults = Self::default();
        ::config::Config::builder()
            .set_default("stacks_api_url", defaults.stacks_api_url)?
            .set_default("nft_contract", defaults.nft_contract)?
            .set_default("revenue_contract", defaults.revenue_contract)?
            .set_default("default_sender", defaults.default_sender)?
            .set_default("listen_host", defaults.listen_host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("upstream_timeout_secs", defaults.upstream_timeout_secs as i64)
    }

    /// Resolve both contract identifiers; a malformed one is fatal
    pub fn contracts(&self) -> stacks_rpc::Result<Contracts> {
        Ok(Contracts {
            nft: ContractIdentifier::resolve(&self.nft_contract)?,
            revenue: ContractIdentifier::resolve(&self.revenue_contract)?,
        })
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.listen_host, self.port).parse()
    }
}
