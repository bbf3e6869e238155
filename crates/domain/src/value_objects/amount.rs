use crate::errors::DomainError;
use primitive_types::U256;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

/// A token amount in raw integer units plus the decimal exponent that
/// scales it to the display unit.
///
/// `raw` is what the chain stores; `to_decimal` / `from_decimal` convert
/// between raw units and the human-readable scale at the boundary, so the
/// rest of the domain works with a single well-typed numeric
/// representation instead of branching on strings vs numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Amount {
    /// Raw integer units.
    pub raw: U256,
    /// Decimal exponent of the mint.
    pub decimals: u8,
}

impl Amount {
    #[must_use]
    pub fn new(raw: U256, decimals: u8) -> Self {
        Self { raw, decimals }
    }

    /// Zero with the given decimal exponent.
    #[must_use]
    pub fn zero(decimals: u8) -> Self {
        Self {
            raw: U256::zero(),
            decimals,
        }
    }

    /// Wraps a raw `u64` amount as read from an SPL token account.
    #[must_use]
    pub fn from_raw_u64(raw: u64, decimals: u8) -> Self {
        Self {
            raw: U256::from(raw),
            decimals,
        }
    }

    /// Converts a display-scale decimal into raw units, truncating any
    /// fraction below the mint's resolution.
    ///
    /// # Errors
    /// [`DomainError::NegativeAmount`] for negative inputs,
    /// [`DomainError::AmountOutOfRange`] when the scaled value does not
    /// fit in 128 bits.
    pub fn from_decimal(d: Decimal, decimals: u8) -> Result<Self, DomainError> {
        if d.is_sign_negative() && !d.is_zero() {
            return Err(DomainError::NegativeAmount(d));
        }
        let scaled = d
            .checked_mul(Self::scale_factor(decimals))
            .ok_or(DomainError::AmountOutOfRange(d, decimals))?;
        let raw = scaled
            .trunc()
            .to_u128()
            .ok_or(DomainError::AmountOutOfRange(d, decimals))?;
        Ok(Self {
            raw: U256::from(raw),
            decimals,
        })
    }

    /// Converts raw units to the display scale.
    ///
    /// SPL token amounts and mint supplies are `u64`, so the narrowing to
    /// 128 bits is lossless for anything read from the chain.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        let raw = self.raw.low_u128();
        let d = Decimal::from_u128(raw).unwrap_or_default();
        d / Self::scale_factor(self.decimals)
    }

    /// Raw units as `u64` if they fit (SPL instruction arguments are u64).
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if self.raw > U256::from(u64::MAX) {
            None
        } else {
            Some(self.raw.low_u64())
        }
    }

    fn scale_factor(decimals: u8) -> Decimal {
        Decimal::from(10u64.pow(u32::from(decimals)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_raw_round_trip() {
        let amt = Amount::from_raw_u64(1_500_000, 6);
        assert_eq!(amt.to_decimal(), dec!(1.5));
        assert_eq!(amt.to_u64(), Some(1_500_000));
    }

    #[test]
    fn test_from_decimal_truncates_below_resolution() {
        let amt = Amount::from_decimal(dec!(0.1234567), 6).unwrap();
        assert_eq!(amt.raw, U256::from(123_456u64));
    }

    #[test]
    fn test_from_decimal_rejects_negative() {
        let err = Amount::from_decimal(dec!(-1), 6).unwrap_err();
        assert_eq!(err, DomainError::NegativeAmount(dec!(-1)));
    }

    #[test]
    fn test_zero() {
        let amt = Amount::zero(9);
        assert_eq!(amt.to_decimal(), Decimal::ZERO);
        assert_eq!(amt.to_u64(), Some(0));
    }

    #[test]
    fn test_to_u64_overflow() {
        let amt = Amount::new(U256::from(u128::MAX), 6);
        assert_eq!(amt.to_u64(), None);
    }
}
