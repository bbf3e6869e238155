use serde::{Deserialize, Serialize};

/// A fungible token held by a pool or a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// On-chain mint address.
    pub mint_address: String,
    /// Ticker symbol, e.g. "SOL".
    pub symbol: String,
    /// Decimal exponent scaling raw units to the display unit.
    pub decimals: u8,
    /// Human-readable name.
    pub name: String,
}

impl Token {
    pub fn new(
        mint: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
        name: impl Into<String>,
    ) -> Self {
        Self {
            mint_address: mint.into(),
            symbol: symbol.into(),
            decimals,
            name: name.into(),
        }
    }
}
