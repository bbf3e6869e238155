//! Thin async wrapper over the nonblocking RPC client.
//!
//! Keeps the rest of the workspace off the raw client API and pins the
//! commitment level in one place.

use solana_client::client_error::ClientError;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_response::RpcSimulateTransactionResult;
use solana_sdk::account::Account;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use tracing::debug;

/// RPC provider for blockchain interaction.
pub struct RpcProvider {
    client: RpcClient,
    commitment: CommitmentConfig,
}

impl RpcProvider {
    /// Creates a provider against `url` at confirmed commitment.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: RpcClient::new(url.into()),
            commitment: CommitmentConfig::confirmed(),
        }
    }

    /// Fetches an account, returning `None` when it does not exist.
    ///
    /// # Errors
    /// Returns the transport error on RPC failure.
    pub async fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>, ClientError> {
        debug!(account = %pubkey, "fetching account");
        let response = self
            .client
            .get_account_with_commitment(pubkey, self.commitment)
            .await?;
        Ok(response.value)
    }

    /// Returns the latest blockhash for transaction signing.
    ///
    /// # Errors
    /// Returns the transport error on RPC failure.
    pub async fn get_latest_blockhash(&self) -> Result<Hash, ClientError> {
        self.client.get_latest_blockhash().await
    }

    /// Returns the current slot at the provider's commitment level.
    ///
    /// # Errors
    /// Returns the transport error on RPC failure.
    pub async fn get_slot(&self) -> Result<u64, ClientError> {
        self.client
            .get_slot_with_commitment(self.commitment)
            .await
    }

    /// Sends a signed transaction and waits for confirmation.
    ///
    /// # Errors
    /// Returns the transport error, including on-chain rejection.
    pub async fn send_and_confirm_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Signature, ClientError> {
        self.client.send_and_confirm_transaction(transaction).await
    }

    /// Simulates a signed transaction without broadcasting it.
    ///
    /// # Errors
    /// Returns the transport error on RPC failure.
    pub async fn simulate_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<RpcSimulateTransactionResult, ClientError> {
        let response = self.client.simulate_transaction(transaction).await?;
        Ok(response.value)
    }
}
