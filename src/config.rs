//! Environment-derived network configuration for the BBTM toolkit.
//!
//! Every variable is optional and defaults to a safe empty value; only the
//! deploy path requires a credential, and it checks for one explicitly
//! before touching the network.

use std::env;

use crate::{constants::DEFAULT_RPC, errors::ScriptError};

/// Network profile resolved from the environment (`.env` is loaded at startup)
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// RPC endpoint of the target network
    pub rpc_url: String,
    /// Private key of the deployer, hex encoded
    pub private_key: String,
    /// Polygonscan API key, used by contract verification tooling
    pub etherscan_api_key: String,
}

impl NetworkConfig {
    /// Read the Polygon mainnet profile from the environment
    pub fn from_env() -> NetworkConfig {
        let rpc_url = match env::var("NODE_URL_POLYGON_MAINNET") {
            Ok(url) if !url.is_empty() => url,
            _ => DEFAULT_RPC.to_string(),
        };
        NetworkConfig {
            rpc_url,
            private_key: env::var("PRIVATE_KEY").unwrap_or_default(),
            etherscan_api_key: env::var("POLYGONSCAN_API_KEY").unwrap_or_default(),
        }
    }

    /// The signing credential, or a configuration error when none is set
    pub fn require_private_key(&self) -> Result<&str, ScriptError> {
        if self.private_key.is_empty() {
            return Err(ScriptError::Configuration(String::from(
                "PRIVATE_KEY is not set; configure it in your environment or .env file",
            )));
        }
        Ok(&self.private_key)
    }
}
