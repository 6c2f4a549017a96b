//! Deployment transaction submission

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, U256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
};
use tracing::info;

use crate::{errors::ScriptError, tx::client::RpcProvider};

/// Submit the contract creation transaction and wait for its inclusion.
///
/// One attempt, no retry: the pending transaction either confirms or the
/// whole deployment aborts. Returns the deployed address the node reported
/// in the receipt, when it reported one.
pub async fn send_deployment_tx(
    deploy_code: Vec<u8>,
    gas_price: u128,
    client: RpcProvider,
) -> Result<Option<Address>, ScriptError> {
    // Build the creation tx
    let tx_request = TransactionRequest::default()
        .with_deploy_code(deploy_code)
        .with_gas_price(gas_price)
        .with_value(U256::from(0));

    // Send it
    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
    info!("Pending deployment transaction... {}", pending_tx.tx_hash());

    // Wait for the transaction to be included.
    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
    info!(
        "Deployment tx done on block: {}",
        receipt.block_number.unwrap_or_default()
    );

    Ok(receipt.contract_address)
}
