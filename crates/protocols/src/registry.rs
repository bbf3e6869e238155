//! Pool registry keyed by ordered symbol pair and pool type.
//!
//! The registry is plain configuration data (typically a JSON file shipped
//! with the deployment); it carries no live state. Symbol order is
//! significant: `SOL/USDC` and `USDC/SOL` are distinct identities.

use crate::errors::ProtocolError;
use lp_redeem_domain::{Pool, PoolType};
use serde::{Deserialize, Serialize};

/// Lookup table of known pools.
///
/// # Registry file format
///
/// ```json
/// {
///   "pools": [
///     {
///       "token_x": {
///         "mint_address": "So11111111111111111111111111111111111111112",
///         "symbol": "SOL", "decimals": 9, "name": "Wrapped SOL"
///       },
///       "token_y": {
///         "mint_address": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
///         "symbol": "USDC", "decimals": 6, "name": "USD Coin"
///       },
///       "pool_type": "ConstantProduct",
///       "addresses": { "pool": "...", "vault_x": "...", "vault_y": "...", "lp_mint": "..." },
///       "lp_decimals": 6
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoolRegistry {
    pools: Vec<Pool>,
}

impl PoolRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a registry from its JSON representation.
    ///
    /// # Errors
    /// Returns the parse error for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Registers a pool.
    pub fn insert(&mut self, pool: Pool) {
        self.pools.push(pool);
    }

    /// All registered pools.
    #[must_use]
    pub fn all(&self) -> &[Pool] {
        &self.pools
    }

    /// Finds the pool for an ordered symbol pair and pool type.
    ///
    /// Symbols match case-insensitively; order matters.
    ///
    /// # Errors
    /// [`ProtocolError::PoolNotFound`] when no entry matches.
    pub fn lookup(
        &self,
        symbol_x: &str,
        symbol_y: &str,
        pool_type: PoolType,
    ) -> Result<&Pool, ProtocolError> {
        self.pools
            .iter()
            .find(|p| {
                p.token_x.symbol.eq_ignore_ascii_case(symbol_x)
                    && p.token_y.symbol.eq_ignore_ascii_case(symbol_y)
                    && p.pool_type == pool_type
            })
            .ok_or_else(|| ProtocolError::PoolNotFound {
                symbol_x: symbol_x.to_string(),
                symbol_y: symbol_y.to_string(),
                pool_type,
            })
    }
}
