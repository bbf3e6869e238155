//! Live pool-state and LP-balance reader.

use crate::errors::ProtocolError;
use crate::{PoolStateReader, parse_pubkey};
use crate::onchain::layout::PoolAccount;
use crate::rpc::RpcProvider;
use async_trait::async_trait;
use lp_redeem_domain::{Amount, Pool, PoolState};
use solana_program::program_pack::Pack;
use solana_sdk::pubkey::Pubkey;
use spl_token::state::{Account as SplTokenAccount, Mint};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

/// Token program ID.
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// Associated token program ID.
pub const ASSOCIATED_TOKEN_PROGRAM_ID: &str = "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL";

/// Reads reserves, LP supply and user balances over RPC.
///
/// Every read hits the chain; nothing is cached between calls.
pub struct ChainPoolReader {
    provider: Arc<RpcProvider>,
    token_program: Pubkey,
    ata_program: Pubkey,
}

impl ChainPoolReader {
    /// Creates a reader on top of an RPC provider.
    #[must_use]
    pub fn new(provider: Arc<RpcProvider>) -> Self {
        Self {
            provider,
            token_program: Pubkey::from_str(TOKEN_PROGRAM_ID).expect("Invalid token program ID"),
            ata_program: Pubkey::from_str(ASSOCIATED_TOKEN_PROGRAM_ID)
                .expect("Invalid ATA program ID"),
        }
    }

    /// Cross-checks a registry entry against the on-chain pool account.
    ///
    /// # Errors
    /// [`ProtocolError::AccountNotFound`] when the pool account is missing,
    /// [`ProtocolError::LayoutMismatch`] when it disagrees with the entry.
    pub async fn verify_layout(&self, pool: &Pool) -> Result<(), ProtocolError> {
        let address = parse_pubkey(&pool.addresses.pool)?;
        let account = self
            .provider
            .get_account(&address)
            .await?
            .ok_or_else(|| ProtocolError::AccountNotFound(pool.addresses.pool.clone()))?;
        let layout = PoolAccount::from_account_data(&pool.addresses.pool, &account.data)?;
        layout.matches(pool)?;
        debug!(pool = %pool.label(), "pool account layout verified");
        Ok(())
    }

    /// Returns the owner's LP token balance for a pool.
    ///
    /// A missing associated token account means the user simply does not
    /// hold this LP token, so it reads as zero rather than an error.
    ///
    /// # Errors
    /// RPC or decode failures.
    pub async fn lp_balance(&self, owner: &Pubkey, pool: &Pool) -> Result<Amount, ProtocolError> {
        let lp_mint = parse_pubkey(&pool.addresses.lp_mint)?;
        let token_account = self.derive_lp_token_account(owner, &lp_mint);
        match self.provider.get_account(&token_account).await? {
            Some(account) => {
                let parsed = SplTokenAccount::unpack(&account.data).map_err(|e| {
                    ProtocolError::AccountDecode {
                        account: token_account.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                Ok(Amount::from_raw_u64(parsed.amount, pool.lp_decimals))
            }
            None => Ok(Amount::zero(pool.lp_decimals)),
        }
    }

    /// Associated token account holding the owner's LP tokens.
    #[must_use]
    pub fn derive_lp_token_account(&self, owner: &Pubkey, lp_mint: &Pubkey) -> Pubkey {
        let (ata, _bump) = Pubkey::find_program_address(
            &[
                owner.as_ref(),
                self.token_program.as_ref(),
                lp_mint.as_ref(),
            ],
            &self.ata_program,
        );
        ata
    }

    async fn token_account_amount(&self, address: &str) -> Result<u64, ProtocolError> {
        let pubkey = parse_pubkey(address)?;
        let account = self
            .provider
            .get_account(&pubkey)
            .await?
            .ok_or_else(|| ProtocolError::AccountNotFound(address.to_string()))?;
        let parsed =
            SplTokenAccount::unpack(&account.data).map_err(|e| ProtocolError::AccountDecode {
                account: address.to_string(),
                reason: e.to_string(),
            })?;
        Ok(parsed.amount)
    }

    async fn mint_state(&self, address: &str) -> Result<Mint, ProtocolError> {
        let pubkey = parse_pubkey(address)?;
        let account = self
            .provider
            .get_account(&pubkey)
            .await?
            .ok_or_else(|| ProtocolError::AccountNotFound(address.to_string()))?;
        Mint::unpack(&account.data).map_err(|e| ProtocolError::AccountDecode {
            account: address.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl PoolStateReader for ChainPoolReader {
    async fn read_state(&self, pool: &Pool) -> Result<PoolState, ProtocolError> {
        let reserve_x = self.token_account_amount(&pool.addresses.vault_x).await?;
        let reserve_y = self.token_account_amount(&pool.addresses.vault_y).await?;
        let lp_mint = self.mint_state(&pool.addresses.lp_mint).await?;
        let slot = self.provider.get_slot().await?;

        info!(
            pool = %pool.label(),
            reserve_x,
            reserve_y,
            lp_supply = lp_mint.supply,
            slot,
            "pool state snapshot"
        );

        Ok(PoolState {
            reserve_x: Amount::from_raw_u64(reserve_x, pool.token_x.decimals),
            reserve_y: Amount::from_raw_u64(reserve_y, pool.token_y.decimals),
            // The mint is authoritative for LP decimals.
            lp_supply: Amount::from_raw_u64(lp_mint.supply, lp_mint.decimals),
            slot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_ids() {
        assert!(Pubkey::from_str(TOKEN_PROGRAM_ID).is_ok());
        assert!(Pubkey::from_str(ASSOCIATED_TOKEN_PROGRAM_ID).is_ok());
    }

    #[test]
    fn test_derive_lp_token_account_is_deterministic() {
        let reader = ChainPoolReader::new(Arc::new(RpcProvider::new("http://localhost:8899")));
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let a = reader.derive_lp_token_account(&owner, &mint);
        let b = reader.derive_lp_token_account(&owner, &mint);
        assert_eq!(a, b);
        assert_ne!(a, reader.derive_lp_token_account(&mint, &owner));
    }

    #[test]
    fn test_parse_pubkey_rejects_garbage() {
        let err = parse_pubkey("not-a-pubkey").unwrap_err();
        assert!(matches!(err, ProtocolError::BadAddress { .. }));
    }
}
