//! Pro-rata withdrawal estimation.
//!
//! Redeeming a fraction `f` of the outstanding LP supply returns fraction
//! `f` of each reserve. This keeps the pool's curve invariant and the
//! per-LP-token backing ratio unchanged for remaining holders, and it is
//! the redemption rule shared by constant-product and stable-swap pools.
//!
//! Amounts here are display-scaled decimals; raw integer units are carried
//! separately for the transaction path and converted at the boundary.

use crate::entities::pool::PoolState;
use crate::errors::DomainError;
use crate::value_objects::withdrawal::{WithdrawalPreview, WithdrawalRequest};
use rust_decimal::Decimal;

/// Computes the pro-rata output for redeeming `lp_amount` LP tokens.
///
/// The redemption share is `lp_amount / lp_supply`; each returned amount
/// is the matching reserve scaled by that share. The result is not
/// rounded; display truncation is the caller's concern.
///
/// Redeeming zero yields exactly `(0, 0)` and redeeming the full supply
/// yields exactly `(reserve_x, reserve_y)`.
///
/// # Errors
/// - [`DomainError::EmptyPool`] when `lp_supply <= 0` — an empty pool
///   cannot be redeemed from.
/// - [`DomainError::NegativeAmount`] when `lp_amount < 0`.
pub fn estimate(
    lp_amount: Decimal,
    lp_supply: Decimal,
    reserve_x: Decimal,
    reserve_y: Decimal,
) -> Result<(Decimal, Decimal), DomainError> {
    if lp_supply <= Decimal::ZERO {
        return Err(DomainError::EmptyPool(lp_supply));
    }
    if lp_amount.is_sign_negative() && !lp_amount.is_zero() {
        return Err(DomainError::NegativeAmount(lp_amount));
    }
    if lp_amount.is_zero() {
        return Ok((Decimal::ZERO, Decimal::ZERO));
    }
    // Full redemption must drain the reserves exactly, independent of how
    // the division rounds at the 28-digit limit.
    if lp_amount == lp_supply {
        return Ok((reserve_x, reserve_y));
    }
    let share = lp_amount / lp_supply;
    Ok((reserve_x * share, reserve_y * share))
}

/// Applies [`estimate`] to a pool-state snapshot and a validated request.
///
/// The returned preview carries the snapshot slot so callers can tell how
/// stale it is; the chain may move between snapshot and submission, so
/// the preview is advisory.
///
/// # Errors
/// Same conditions as [`estimate`].
pub fn preview(
    state: &PoolState,
    request: &WithdrawalRequest,
) -> Result<WithdrawalPreview, DomainError> {
    let (receive_x, receive_y) = estimate(
        request.lp_amount(),
        state.lp_supply.to_decimal(),
        state.reserve_x.to_decimal(),
        state.reserve_y.to_decimal(),
    )?;
    Ok(WithdrawalPreview {
        receive_x,
        receive_y,
        snapshot_slot: state.slot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::amount::Amount;
    use primitive_types::U256;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quarter_share() {
        // share = 50/200 = 0.25 -> 250 X and 125 Y
        let (x, y) = estimate(dec!(50), dec!(200), dec!(1000), dec!(500)).unwrap();
        assert_eq!(x, dec!(250));
        assert_eq!(y, dec!(125));
    }

    #[test]
    fn test_zero_redemption() {
        let (x, y) = estimate(dec!(0), dec!(200), dec!(1000), dec!(500)).unwrap();
        assert_eq!(x, dec!(0));
        assert_eq!(y, dec!(0));
    }

    #[test]
    fn test_full_redemption_is_exact() {
        let (x, y) = estimate(dec!(200), dec!(200), dec!(1000), dec!(500)).unwrap();
        assert_eq!(x, dec!(1000));
        assert_eq!(y, dec!(500));

        // Awkward reserves that do not divide evenly still drain exactly.
        let (x, y) = estimate(dec!(3), dec!(3), dec!(0.0000001), dec!(7777777.77)).unwrap();
        assert_eq!(x, dec!(0.0000001));
        assert_eq!(y, dec!(7777777.77));
    }

    #[test]
    fn test_linearity() {
        let supply = dec!(200);
        let reserve_x = dec!(1000);
        for a in [dec!(1), dec!(13.5), dec!(99), dec!(150)] {
            let (x, _) = estimate(a, supply, reserve_x, dec!(500)).unwrap();
            assert_eq!(x, reserve_x * a / supply);
        }
    }

    #[test]
    fn test_monotonicity() {
        let mut prev = Decimal::MIN;
        for a in [dec!(0), dec!(10), dec!(50), dec!(120), dec!(200)] {
            let (x, _) = estimate(a, dec!(200), dec!(1000), dec!(500)).unwrap();
            assert!(x >= prev);
            prev = x;
        }
    }

    #[test]
    fn test_empty_pool_rejected() {
        for supply in [dec!(0), dec!(-1)] {
            let err = estimate(dec!(10), supply, dec!(1000), dec!(500)).unwrap_err();
            assert_eq!(err, DomainError::EmptyPool(supply));
        }
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = estimate(dec!(-5), dec!(200), dec!(1000), dec!(500)).unwrap_err();
        assert_eq!(err, DomainError::NegativeAmount(dec!(-5)));
    }

    fn snapshot() -> PoolState {
        PoolState {
            reserve_x: Amount::new(U256::from(1_000_000_000u64), 6),
            reserve_y: Amount::new(U256::from(500_000_000u64), 6),
            lp_supply: Amount::new(U256::from(200_000_000u64), 6),
            slot: 42,
        }
    }

    #[test]
    fn test_preview_from_snapshot() {
        let state = snapshot();
        let request = WithdrawalRequest::new(dec!(50), dec!(80)).unwrap();
        let preview = preview(&state, &request).unwrap();
        assert_eq!(preview.receive_x, dec!(250));
        assert_eq!(preview.receive_y, dec!(125));
        assert_eq!(preview.snapshot_slot, 42);
    }

    #[test]
    fn test_preview_empty_pool() {
        let mut state = snapshot();
        state.lp_supply = Amount::zero(6);
        let request = WithdrawalRequest::new(dec!(1), dec!(80)).unwrap();
        assert!(matches!(
            preview(&state, &request),
            Err(DomainError::EmptyPool(_))
        ));
    }
}
