//! One-shot deployment of the BBTM contract.
//!
//! Compilation happened elsewhere: this path consumes the emitted build
//! artifact, appends the ABI-encoded constructor arguments to its creation
//! bytecode and broadcasts a single transaction. Everything after the
//! broadcast is owned by the node.

use alloy::{
    primitives::{
        keccak256,
        utils::{format_ether, parse_ether},
        Address,
    },
    providers::{Provider, WalletProvider},
    sol_types::SolValue,
};
use ethers::{prelude::U256, utils::rlp};
use tracing::{info, warn};

use crate::{
    artifact::{artifact_path, ContractArtifact},
    constants::{DEPLOY_OUTPUT_FILE, GAS_PRICE_WEI, MIN_DEPLOYER_BALANCE_POL},
    errors::ScriptError,
    output_writer::{read_deployed_address, write_deployed_address},
    tx::{client::RpcProvider, sender::send_deployment_tx},
};

/// Deploy `contract_name` with its three constructor arguments and return
/// the resulting address
pub async fn deploy_contract(
    contract_name: &str,
    base_uri: &str,
    owner: Address,
    creator: Address,
    client: RpcProvider,
) -> Result<Address, ScriptError> {
    // Resolve the deployer and check its funds; a low balance only warns
    let deployer = client.default_signer_address();
    let balance = client
        .get_balance(deployer)
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    info!("Deployer account: {}", deployer);
    info!("Deployer balance: {} POL", format_ether(balance));
    let min_balance = parse_ether(MIN_DEPLOYER_BALANCE_POL)
        .map_err(|e| ScriptError::Configuration(e.to_string()))?;
    if balance < min_balance {
        warn!(
            "Deployer balance is below {} POL; the deployment and follow-up transactions may run out of funds",
            MIN_DEPLOYER_BALANCE_POL
        );
    }

    // The contract factory, by name: creation bytecode from the artifact
    let artifact = ContractArtifact::load(&artifact_path(contract_name))?;
    let mut deploy_code = artifact.creation_bytecode()?;
    info!(
        "Deploying '{}' with base URI {}, owner {}, creator {}",
        contract_name, base_uri, owner, creator
    );

    // Constructor takes (string baseURI, address owner, address creator)
    let constructor_args = (base_uri.to_string(), owner, creator).abi_encode_params();
    deploy_code.extend_from_slice(&constructor_args);

    // Predict the contract address
    let predicted = predict_contract_address(client.clone()).await?;
    info!("Predicted contract address: {}", predicted);

    if let Ok(previous) = read_deployed_address(DEPLOY_OUTPUT_FILE, contract_name) {
        warn!(
            "A deployment of '{}' is already recorded at {}; it will be overwritten",
            contract_name, previous
        );
    }

    // Broadcast and wait
    let mined = send_deployment_tx(deploy_code, GAS_PRICE_WEI, client).await?;
    let deployed = match mined {
        Some(address) => {
            if address != predicted {
                warn!(
                    "Receipt reports {} but {} was predicted from the nonce",
                    address, predicted
                );
            }
            address
        }
        None => predicted,
    };

    // Save the address for the frontend
    write_deployed_address(DEPLOY_OUTPUT_FILE, contract_name, deployed)?;

    Ok(deployed)
}

/// Predict the contract address of the deployed contract from the signer
/// and its pending nonce (RLP of the pair, keccak, last 20 bytes)
async fn predict_contract_address(client: RpcProvider) -> Result<Address, ScriptError> {
    // Get signer
    let signer = client.default_signer_address();

    // Get the signer nonce
    let signer_nonce = client
        .get_transaction_count(signer)
        .await
        .map_err(|e| ScriptError::NonceFetching(e.to_string()))?;

    let mut stream = rlp::RlpStream::new();
    stream.begin_list(2);
    stream.append(&signer.to_vec());
    stream.append(&U256::from(signer_nonce));
    let hash = keccak256(&stream.out());

    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&hash[12..]);
    Ok(Address::from(bytes))
}
