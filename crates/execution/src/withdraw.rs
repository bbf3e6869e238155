//! Remove-liquidity instruction building and submission.

use anyhow::{Context, Result};
use lp_redeem_domain::Pool;
use lp_redeem_protocols::parse_pubkey;
use lp_redeem_protocols::rpc::RpcProvider;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::Signature,
    signer::Signer,
    transaction::Transaction,
};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Pool program ID.
pub const POOL_PROGRAM_ID: Pubkey =
    Pubkey::new_from_array(*b"lp_redeem_pool_program_v1\0\0\0\0\0\0\0");

/// Token program ID.
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// Associated token program ID.
pub const ASSOCIATED_TOKEN_PROGRAM_ID: &str = "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL";

/// Withdraw instruction discriminator.
const WITHDRAW_DISCRIMINATOR: [u8; 8] = [0xb7, 0x12, 0x46, 0x9c, 0x94, 0x6d, 0xa1, 0x22];

/// Parameters for a remove-liquidity transaction.
///
/// Amounts are raw integer units; display-scale conversion happens in the
/// service layer before this point.
#[derive(Debug, Clone)]
pub struct WithdrawParams {
    /// Pool being redeemed from.
    pub pool: Pool,
    /// LP tokens to burn, raw units.
    pub lp_amount: u64,
    /// Minimum acceptable token X out, raw units (slippage floor).
    pub min_x: u64,
    /// Minimum acceptable token Y out, raw units (slippage floor).
    pub min_y: u64,
}

/// Result of a submitted transaction.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Transaction signature.
    pub signature: Signature,
    /// Whether the transaction was confirmed.
    pub success: bool,
    /// Slot at which the transaction was confirmed.
    pub slot: Option<u64>,
    /// Error message if failed.
    pub error: Option<String>,
}

impl ExecutionResult {
    /// Creates a successful result.
    #[must_use]
    pub fn success(signature: Signature, slot: u64) -> Self {
        Self {
            signature,
            success: true,
            slot: Some(slot),
            error: None,
        }
    }

    /// Creates a failed result.
    #[must_use]
    pub fn failure(signature: Signature, error: String) -> Self {
        Self {
            signature,
            success: false,
            slot: None,
            error: Some(error),
        }
    }
}

/// Builds, signs and submits remove-liquidity transactions.
pub struct WithdrawalSubmitter {
    /// RPC provider for blockchain interaction.
    provider: Arc<RpcProvider>,
    /// Pool program ID.
    program_id: Pubkey,
    /// Token program ID.
    token_program: Pubkey,
    /// Associated token program ID.
    ata_program: Pubkey,
}

impl WithdrawalSubmitter {
    /// Creates a new submitter.
    pub fn new(provider: Arc<RpcProvider>) -> Self {
        Self {
            provider,
            program_id: POOL_PROGRAM_ID,
            token_program: Pubkey::from_str(TOKEN_PROGRAM_ID).expect("Invalid token program ID"),
            ata_program: Pubkey::from_str(ASSOCIATED_TOKEN_PROGRAM_ID)
                .expect("Invalid ATA program ID"),
        }
    }

    /// Submits a withdrawal and waits for confirmation.
    ///
    /// An on-chain rejection (slippage floor hit, balance moved since the
    /// preview) comes back as [`ExecutionResult::failure`], never as a
    /// silent retry.
    ///
    /// # Errors
    /// Returns an error only for local failures (bad addresses, no
    /// blockhash); RPC-side rejection is reported in the result.
    pub async fn submit<S: Signer>(
        &self,
        params: &WithdrawParams,
        payer: &S,
    ) -> Result<ExecutionResult> {
        info!(
            pool = %params.pool.label(),
            lp_amount = params.lp_amount,
            min_x = params.min_x,
            min_y = params.min_y,
            "Submitting withdrawal"
        );

        let ix = self.build_withdraw_instruction(params, &payer.pubkey())?;
        self.send_transaction(&[ix], payer).await
    }

    /// Simulates the withdrawal without broadcasting it.
    ///
    /// # Errors
    /// Returns an error for local build failures or RPC transport errors.
    pub async fn simulate<S: Signer>(&self, params: &WithdrawParams, payer: &S) -> Result<bool> {
        let ix = self.build_withdraw_instruction(params, &payer.pubkey())?;

        let recent_blockhash = self
            .provider
            .get_latest_blockhash()
            .await
            .context("Failed to get recent blockhash")?;

        let transaction = Transaction::new_signed_with_payer(
            &[ix],
            Some(&payer.pubkey()),
            &[payer],
            recent_blockhash,
        );

        let result = self
            .provider
            .simulate_transaction(&transaction)
            .await
            .context("Failed to simulate transaction")?;

        if let Some(err) = result.err {
            warn!("Simulation failed: {err:?}");
            return Ok(false);
        }

        debug!("Simulation successful");
        Ok(true)
    }

    /// Builds the remove-liquidity instruction.
    ///
    /// # Errors
    /// Returns an error when a configured pool address does not parse.
    pub fn build_withdraw_instruction(
        &self,
        params: &WithdrawParams,
        owner: &Pubkey,
    ) -> Result<Instruction> {
        let addresses = &params.pool.addresses;
        let pool = parse_pubkey(&addresses.pool)?;
        let vault_x = parse_pubkey(&addresses.vault_x)?;
        let vault_y = parse_pubkey(&addresses.vault_y)?;
        let lp_mint = parse_pubkey(&addresses.lp_mint)?;
        let mint_x = parse_pubkey(&params.pool.token_x.mint_address)?;
        let mint_y = parse_pubkey(&params.pool.token_y.mint_address)?;

        let user_lp = self.derive_ata(owner, &lp_mint);
        let user_x = self.derive_ata(owner, &mint_x);
        let user_y = self.derive_ata(owner, &mint_y);

        let mut data = Vec::with_capacity(32);
        data.extend_from_slice(&WITHDRAW_DISCRIMINATOR);
        data.extend_from_slice(&params.lp_amount.to_le_bytes());
        data.extend_from_slice(&params.min_x.to_le_bytes());
        data.extend_from_slice(&params.min_y.to_le_bytes());

        let accounts = vec![
            AccountMeta::new(pool, false),            // pool state
            AccountMeta::new_readonly(*owner, true),  // owner / authority
            AccountMeta::new(lp_mint, false),         // lp mint (burn)
            AccountMeta::new(vault_x, false),         // vault x
            AccountMeta::new(vault_y, false),         // vault y
            AccountMeta::new(user_lp, false),         // user lp account
            AccountMeta::new(user_x, false),          // user token x account
            AccountMeta::new(user_y, false),          // user token y account
            AccountMeta::new_readonly(self.token_program, false), // token_program
        ];

        Ok(Instruction {
            program_id: self.program_id,
            accounts,
            data,
        })
    }

    fn derive_ata(&self, owner: &Pubkey, mint: &Pubkey) -> Pubkey {
        let (ata, _bump) = Pubkey::find_program_address(
            &[owner.as_ref(), self.token_program.as_ref(), mint.as_ref()],
            &self.ata_program,
        );
        ata
    }

    async fn send_transaction<S: Signer>(
        &self,
        instructions: &[Instruction],
        payer: &S,
    ) -> Result<ExecutionResult> {
        let recent_blockhash = self
            .provider
            .get_latest_blockhash()
            .await
            .context("Failed to get recent blockhash")?;

        let transaction = Transaction::new_signed_with_payer(
            instructions,
            Some(&payer.pubkey()),
            &[payer],
            recent_blockhash,
        );

        debug!("Sending transaction...");

        match self
            .provider
            .send_and_confirm_transaction(&transaction)
            .await
        {
            Ok(signature) => {
                info!(signature = %signature, "Transaction confirmed");
                let slot = self.provider.get_slot().await.unwrap_or(0);
                Ok(ExecutionResult::success(signature, slot))
            }
            Err(e) => {
                let signature = transaction.signatures.first().copied().unwrap_or_default();
                warn!(signature = %signature, "Transaction failed: {e}");
                Ok(ExecutionResult::failure(signature, e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp_redeem_domain::{PoolAddresses, PoolType, Token};

    fn test_pool() -> Pool {
        Pool {
            token_x: Token::new(
                Pubkey::new_unique().to_string(),
                "SOL",
                9,
                "Wrapped SOL",
            ),
            token_y: Token::new(
                Pubkey::new_unique().to_string(),
                "USDC",
                6,
                "USD Coin",
            ),
            pool_type: PoolType::ConstantProduct,
            addresses: PoolAddresses {
                pool: Pubkey::new_unique().to_string(),
                vault_x: Pubkey::new_unique().to_string(),
                vault_y: Pubkey::new_unique().to_string(),
                lp_mint: Pubkey::new_unique().to_string(),
            },
            lp_decimals: 6,
        }
    }

    fn submitter() -> WithdrawalSubmitter {
        WithdrawalSubmitter::new(Arc::new(RpcProvider::new("http://localhost:8899")))
    }

    #[test]
    fn test_program_ids() {
        assert!(Pubkey::from_str(TOKEN_PROGRAM_ID).is_ok());
        assert!(Pubkey::from_str(ASSOCIATED_TOKEN_PROGRAM_ID).is_ok());
    }

    #[test]
    fn test_execution_result() {
        let sig = Signature::default();

        let success = ExecutionResult::success(sig, 12345);
        assert!(success.success);
        assert_eq!(success.slot, Some(12345));
        assert!(success.error.is_none());

        let failure = ExecutionResult::failure(sig, "slippage exceeded".to_string());
        assert!(!failure.success);
        assert!(failure.slot.is_none());
        assert_eq!(failure.error, Some("slippage exceeded".to_string()));
    }

    #[test]
    fn test_instruction_data_layout() {
        let params = WithdrawParams {
            pool: test_pool(),
            lp_amount: 50_000_000,
            min_x: 1_000,
            min_y: 2_000,
        };
        let owner = Pubkey::new_unique();

        let ix = submitter()
            .build_withdraw_instruction(&params, &owner)
            .unwrap();

        assert_eq!(ix.program_id, POOL_PROGRAM_ID);
        assert_eq!(ix.data.len(), 8 + 8 + 8 + 8);
        assert_eq!(&ix.data[..8], &WITHDRAW_DISCRIMINATOR);
        assert_eq!(&ix.data[8..16], &50_000_000u64.to_le_bytes());
        assert_eq!(&ix.data[16..24], &1_000u64.to_le_bytes());
        assert_eq!(&ix.data[24..32], &2_000u64.to_le_bytes());
    }

    #[test]
    fn test_instruction_accounts() {
        let params = WithdrawParams {
            pool: test_pool(),
            lp_amount: 1,
            min_x: 0,
            min_y: 0,
        };
        let owner = Pubkey::new_unique();

        let ix = submitter()
            .build_withdraw_instruction(&params, &owner)
            .unwrap();

        assert_eq!(ix.accounts.len(), 9);
        // Only the owner signs.
        let signers: Vec<_> = ix.accounts.iter().filter(|a| a.is_signer).collect();
        assert_eq!(signers.len(), 1);
        assert_eq!(signers[0].pubkey, owner);
        // Vaults, mint and user accounts are writable; owner and token
        // program are not.
        assert!(ix.accounts[0].is_writable);
        assert!(!ix.accounts[1].is_writable);
        assert!(ix.accounts[2].is_writable);
        assert!(!ix.accounts[8].is_writable);
    }

    #[test]
    fn test_bad_address_rejected() {
        let mut params = WithdrawParams {
            pool: test_pool(),
            lp_amount: 1,
            min_x: 0,
            min_y: 0,
        };
        params.pool.addresses.vault_x = "not-base58!".to_string();

        let owner = Pubkey::new_unique();
        assert!(
            submitter()
                .build_withdraw_instruction(&params, &owner)
                .is_err()
        );
    }
}
