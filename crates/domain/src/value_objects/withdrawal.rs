use crate::errors::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A validated request to redeem LP tokens.
///
/// Construction enforces `0 <= lp_amount <= owned_balance`; the estimator
/// itself performs no balance check, so out-of-range amounts must never
/// reach it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalRequest {
    lp_amount: Decimal,
}

impl WithdrawalRequest {
    /// Validates the requested amount against the user's owned LP balance.
    ///
    /// # Errors
    /// [`DomainError::NegativeAmount`] if `lp_amount < 0`,
    /// [`DomainError::InsufficientLpBalance`] if it exceeds `owned_balance`.
    pub fn new(lp_amount: Decimal, owned_balance: Decimal) -> Result<Self, DomainError> {
        if lp_amount.is_sign_negative() && !lp_amount.is_zero() {
            return Err(DomainError::NegativeAmount(lp_amount));
        }
        if lp_amount > owned_balance {
            return Err(DomainError::InsufficientLpBalance {
                requested: lp_amount,
                owned: owned_balance,
            });
        }
        Ok(Self { lp_amount })
    }

    /// The LP amount to redeem, display-scaled.
    #[must_use]
    pub fn lp_amount(&self) -> Decimal {
        self.lp_amount
    }
}

/// Predicted withdrawal output for a given request.
///
/// Derived from a [`crate::PoolState`] snapshot; the pool may move between
/// the snapshot and submission, so this is a best-effort preview rather
/// than a quote. Recomputed on every input change, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalPreview {
    /// Display-scale amount of token X the user would receive.
    pub receive_x: Decimal,
    /// Display-scale amount of token Y the user would receive.
    pub receive_y: Decimal,
    /// Slot of the pool-state snapshot the preview was derived from.
    pub snapshot_slot: u64,
}
