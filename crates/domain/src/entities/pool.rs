use crate::entities::token::Token;
use crate::enums::PoolType;
use crate::value_objects::amount::Amount;
use serde::{Deserialize, Serialize};

/// On-chain addresses backing a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolAddresses {
    /// Pool state account.
    pub pool: String,
    /// Vault holding the X-side reserve.
    pub vault_x: String,
    /// Vault holding the Y-side reserve.
    pub vault_y: String,
    /// Mint of the pool's LP token.
    pub lp_mint: String,
}

/// A liquidity pool, identified by its ordered token pair and pool type.
///
/// The pair is ordered: `(SOL, USDC)` and `(USDC, SOL)` are different pool
/// identities even when they point at the same reserves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pool {
    /// First token of the ordered pair.
    pub token_x: Token,
    /// Second token of the ordered pair.
    pub token_y: Token,
    /// Pricing-curve discriminator.
    pub pool_type: PoolType,
    /// On-chain account addresses.
    pub addresses: PoolAddresses,
    /// Decimals of the LP token mint.
    pub lp_decimals: u8,
}

impl Pool {
    /// "X/Y (type)" label used in logs and CLI output.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{}/{} ({})",
            self.token_x.symbol, self.token_y.symbol, self.pool_type
        )
    }
}

/// Snapshot of a pool's reserves and LP supply at a given slot.
///
/// Snapshots are read fresh on every estimation and never cached. The
/// chain keeps moving after the read, so any preview derived from a
/// snapshot is advisory, not a binding quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolState {
    /// Reserve of token X.
    pub reserve_x: Amount,
    /// Reserve of token Y.
    pub reserve_y: Amount,
    /// Total outstanding LP token supply.
    pub lp_supply: Amount,
    /// Slot at which the accounts were read.
    pub slot: u64,
}
