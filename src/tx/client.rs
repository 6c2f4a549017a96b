//! Provider setup for the deploy path

use alloy::{
    hex,
    network::{Ethereum, EthereumWallet},
    primitives::B256,
    providers::{
        fillers::{ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller},
        Identity, Provider, ProviderBuilder, ReqwestProvider,
    },
    signers::local::PrivateKeySigner,
};
use reqwest::{Client, Url};
use tracing::{info, warn};

use crate::{config::NetworkConfig, constants::POLYGON_CHAIN_ID, errors::ScriptError};

/// Re-export from alloy recommend filter
type RecommendFiller =
    JoinFill<JoinFill<JoinFill<Identity, GasFiller>, NonceFiller>, ChainIdFiller>;

/// A provider that uses a local wallet to generate signatures
/// & interfaces with the RPC endpoint over HTTP
pub type RpcProvider = FillProvider<
    JoinFill<RecommendFiller, WalletFiller<EthereumWallet>>,
    ReqwestProvider,
    alloy::transports::http::Http<Client>,
    Ethereum,
>;

/// Build the RPC provider with the configured signer attached.
///
/// Fails before anything is broadcast when the credential or the
/// endpoint is unusable.
pub async fn create_rpc_provider(config: &NetworkConfig) -> Result<RpcProvider, ScriptError> {
    // Map the configured private key to a B256
    let decoded = hex::decode(config.require_private_key()?)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    if decoded.len() != 32 {
        return Err(ScriptError::ClientInitialization(String::from(
            "PRIVATE_KEY must decode to 32 bytes",
        )));
    }
    let private_key = B256::from_slice(&decoded);

    // Create our signer
    let signer = PrivateKeySigner::from_bytes(&private_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let wallet = EthereumWallet::from(signer);

    let rpc_url = config
        .rpc_url
        .parse::<Url>()
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    // Create our provider with the rpc client + signer
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(rpc_url);

    // Fetch chain id
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    info!("Build client on chain ID: {}", chain_id);
    if chain_id != POLYGON_CHAIN_ID {
        warn!(
            "Endpoint reports chain ID {} instead of Polygon mainnet ({})",
            chain_id, POLYGON_CHAIN_ID
        );
    }

    Ok(provider)
}
