//! Common client setup and contract helpers for the payroll scripts and tests.

use alloy::{
    hex,
    network::{EthereumWallet, TransactionBuilder},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    sol,
};
use anyhow::{Context, Result};
use tracing::info;

sol! {
    #[sol(rpc)]
    contract Payroll {
        function addEmployee(address employee, uint256 salary) external;
        function employees(address employee) external view returns (uint256 salary);
    }
}

/// Deployment bytecode of the payroll contract. The artifact is checked in
/// under `contracts/payroll/` together with its assembly listing and is
/// deployed as-is.
pub const PAYROLL_BYTECODE: &str = include_str!("../contracts/payroll/payroll.bin");

/// Connection settings for the deploy script, read from the environment.
///
/// When `RPC_URL` is unset the script falls back to a disposable local dev
/// chain, so a fresh checkout can deploy without any configuration.
pub struct ClientConfig {
    pub rpc_url: Option<String>,
    pub private_key: Option<String>,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            rpc_url: std::env::var("RPC_URL").ok(),
            private_key: std::env::var("DEPLOYER_PRIVATE_KEY").ok(),
        }
    }
}

/// Build a wallet-backed provider for the configured endpoint.
///
/// A remote endpoint needs a funded deployer key; the local dev chain comes
/// with pre-funded accounts.
pub async fn connect(config: ClientConfig) -> Result<DynProvider> {
    match config.rpc_url {
        Some(url) => {
            let key = config
                .private_key
                .context("DEPLOYER_PRIVATE_KEY must be set when RPC_URL is given")?;
            let signer: PrivateKeySigner = key
                .parse()
                .context("DEPLOYER_PRIVATE_KEY is not a valid private key")?;
            info!(%url, "connecting to rpc endpoint");
            let provider = ProviderBuilder::new()
                .wallet(EthereumWallet::from(signer))
                .connect(&url)
                .await
                .context("failed to connect to rpc endpoint")?;
            Ok(provider.erased())
        }
        None => {
            info!("RPC_URL not set, starting local dev chain");
            let provider = ProviderBuilder::new().connect_anvil_with_wallet();
            Ok(provider.erased())
        }
    }
}

/// Deploy a fresh payroll instance and return typed bindings to it.
///
/// Sends the checked-in init code as a create transaction and waits for the
/// receipt; the deployed address comes from the receipt. Nothing is retried.
pub async fn deploy_payroll<P>(provider: &P) -> Result<Payroll::PayrollInstance<P>>
where
    P: Provider + Clone,
{
    let init_code =
        hex::decode(PAYROLL_BYTECODE.trim()).context("payroll artifact is not valid hex")?;
    let tx = TransactionRequest::default().with_deploy_code(init_code);
    let receipt = provider
        .send_transaction(tx)
        .await
        .context("failed to send deployment transaction")?
        .get_receipt()
        .await
        .context("deployment transaction was not confirmed")?;
    let address = receipt
        .contract_address
        .context("deployment receipt carries no contract address")?;
    info!(%address, "payroll contract deployed");
    Ok(Payroll::new(address, provider.clone()))
}
