use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pricing-curve discriminator for a pool.
///
/// Pools with different curves share the same reserve / LP-supply
/// interface, so the redemption math does not branch on this tag; it only
/// participates in pool identity and on-chain layout checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolType {
    /// Constant product curve (x * y = k).
    ConstantProduct,
    /// StableSwap curve with amplification.
    StableSwap,
}

impl PoolType {
    /// On-chain tag byte used in the pool account layout.
    #[must_use]
    pub fn tag(&self) -> u8 {
        match self {
            PoolType::ConstantProduct => 0,
            PoolType::StableSwap => 1,
        }
    }

    /// Inverse of [`PoolType::tag`].
    #[must_use]
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(PoolType::ConstantProduct),
            1 => Some(PoolType::StableSwap),
            _ => None,
        }
    }
}

impl fmt::Display for PoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolType::ConstantProduct => write!(f, "constant-product"),
            PoolType::StableSwap => write!(f, "stable-swap"),
        }
    }
}

impl FromStr for PoolType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "constant-product" | "cp" => Ok(PoolType::ConstantProduct),
            "stable-swap" | "stable" => Ok(PoolType::StableSwap),
            other => Err(format!("unknown pool type: {other}")),
        }
    }
}
