//! Borsh layout of the pool program's state account.
//!
//! Only the prefix of the account is modeled: enough to cross-check a
//! registry entry against the chain (pool type tag, vault and LP mint
//! addresses). The program appends further fields (fee accounting,
//! rewards) after this prefix, so deserialization must tolerate trailing
//! bytes.

use crate::errors::ProtocolError;
use borsh::{BorshDeserialize, BorshSerialize};
use lp_redeem_domain::{Pool, PoolType};
use solana_sdk::pubkey::Pubkey;

/// 8-byte discriminator identifying a pool state account.
pub const POOL_ACCOUNT_DISCRIMINATOR: [u8; 8] = [0x70, 0x6f, 0x6f, 0x6c, 0x61, 0x63, 0x63, 0x74];

/// Prefix of the on-chain pool state account.
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone)]
pub struct PoolAccount {
    /// Account discriminator; must equal [`POOL_ACCOUNT_DISCRIMINATOR`].
    pub discriminator: [u8; 8],
    /// Layout version.
    pub version: u8,
    /// Pricing-curve tag, see [`PoolType::tag`].
    pub pool_type_tag: u8,
    /// PDA bump seed.
    pub bump: u8,
    /// Vault holding the X-side reserve.
    pub vault_x: [u8; 32],
    /// Vault holding the Y-side reserve.
    pub vault_y: [u8; 32],
    /// LP token mint.
    pub lp_mint: [u8; 32],
    /// Swap fee in basis points.
    pub fee_bps: u16,
}

impl PoolAccount {
    /// Deserializes the account prefix, ignoring trailing program fields.
    ///
    /// # Errors
    /// [`ProtocolError::AccountDecode`] on short or malformed data,
    /// [`ProtocolError::LayoutMismatch`] on a wrong discriminator.
    pub fn from_account_data(address: &str, data: &[u8]) -> Result<Self, ProtocolError> {
        let mut slice = data;
        let account =
            Self::deserialize(&mut slice).map_err(|e| ProtocolError::AccountDecode {
                account: address.to_string(),
                reason: e.to_string(),
            })?;
        if account.discriminator != POOL_ACCOUNT_DISCRIMINATOR {
            return Err(ProtocolError::LayoutMismatch(format!(
                "{address} is not a pool state account"
            )));
        }
        Ok(account)
    }

    /// Checks that the on-chain account agrees with a registry entry.
    ///
    /// # Errors
    /// [`ProtocolError::LayoutMismatch`] naming the first disagreement.
    pub fn matches(&self, pool: &Pool) -> Result<(), ProtocolError> {
        if PoolType::from_tag(self.pool_type_tag) != Some(pool.pool_type) {
            return Err(ProtocolError::LayoutMismatch(format!(
                "pool type tag {} does not match registry type {}",
                self.pool_type_tag, pool.pool_type
            )));
        }
        let checks = [
            ("vault_x", &self.vault_x, &pool.addresses.vault_x),
            ("vault_y", &self.vault_y, &pool.addresses.vault_y),
            ("lp_mint", &self.lp_mint, &pool.addresses.lp_mint),
        ];
        for (field, on_chain, configured) in checks {
            let on_chain = Pubkey::new_from_array(*on_chain).to_string();
            if &on_chain != configured {
                return Err(ProtocolError::LayoutMismatch(format!(
                    "{field}: chain has {on_chain}, registry has {configured}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp_redeem_domain::{PoolAddresses, Token};

    fn sample_account(pool_type_tag: u8) -> PoolAccount {
        PoolAccount {
            discriminator: POOL_ACCOUNT_DISCRIMINATOR,
            version: 1,
            pool_type_tag,
            bump: 254,
            vault_x: [1u8; 32],
            vault_y: [2u8; 32],
            lp_mint: [3u8; 32],
            fee_bps: 30,
        }
    }

    fn matching_pool() -> Pool {
        Pool {
            token_x: Token::new("mx", "SOL", 9, "Wrapped SOL"),
            token_y: Token::new("my", "USDC", 6, "USD Coin"),
            pool_type: PoolType::ConstantProduct,
            addresses: PoolAddresses {
                pool: Pubkey::new_from_array([9u8; 32]).to_string(),
                vault_x: Pubkey::new_from_array([1u8; 32]).to_string(),
                vault_y: Pubkey::new_from_array([2u8; 32]).to_string(),
                lp_mint: Pubkey::new_from_array([3u8; 32]).to_string(),
            },
            lp_decimals: 6,
        }
    }

    #[test]
    fn test_deserialize_tolerates_trailing_bytes() {
        let mut data = borsh::to_vec(&sample_account(0)).unwrap();
        data.extend_from_slice(&[0xff; 64]); // trailing program fields

        let account = PoolAccount::from_account_data("addr", &data).unwrap();
        assert_eq!(account.fee_bps, 30);
        assert_eq!(account.vault_x, [1u8; 32]);
    }

    #[test]
    fn test_wrong_discriminator_rejected() {
        let mut account = sample_account(0);
        account.discriminator = [0u8; 8];
        let data = borsh::to_vec(&account).unwrap();

        let err = PoolAccount::from_account_data("addr", &data).unwrap_err();
        assert!(matches!(err, ProtocolError::LayoutMismatch(_)));
    }

    #[test]
    fn test_short_data_rejected() {
        let err = PoolAccount::from_account_data("addr", &[1, 2, 3]).unwrap_err();
        assert!(matches!(err, ProtocolError::AccountDecode { .. }));
    }

    #[test]
    fn test_matches_accepts_consistent_entry() {
        let account = sample_account(0);
        assert!(account.matches(&matching_pool()).is_ok());
    }

    #[test]
    fn test_matches_rejects_pool_type_mismatch() {
        let account = sample_account(1); // stable-swap tag
        let err = account.matches(&matching_pool()).unwrap_err();
        assert!(matches!(err, ProtocolError::LayoutMismatch(_)));
    }

    #[test]
    fn test_matches_rejects_vault_mismatch() {
        let mut account = sample_account(0);
        account.vault_y = [7u8; 32];
        let err = account.matches(&matching_pool()).unwrap_err();
        assert!(err.to_string().contains("vault_y"));
    }
}
