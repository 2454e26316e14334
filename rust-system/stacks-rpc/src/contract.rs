//! Contract identifier parsing

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Result, RpcError};

/// Deploying address plus contract name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContractIdentifier {
    pub address: String,
    pub name: String,
}

impl ContractIdentifier {
    /// Parse `address.name`, splitting on the first `.` only
    pub fn resolve(raw: &str) -> Result<Self> {
        match raw.split_once('.') {
            Some((address, name)) if !address.is_empty() && !name.is_empty() => Ok(Self {
                address: address.to_string(),
                name: name.to_string(),
            }),
            _ => Err(RpcError::InvalidContractId(raw.to_string())),
        }
    }
}

impl FromStr for ContractIdentifier {
    type Err = RpcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl fmt::Display for ContractIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.address, self.name)
    }
}
