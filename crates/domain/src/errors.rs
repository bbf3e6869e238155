use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by domain-level validation and computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// The pool has no outstanding LP supply; nothing can be redeemed.
    #[error("pool has no liquidity (LP supply is {0})")]
    EmptyPool(Decimal),

    /// A negative amount reached a computation that requires `>= 0`.
    #[error("amount must not be negative, got {0}")]
    NegativeAmount(Decimal),

    /// The user asked to redeem more LP tokens than they own.
    #[error("requested {requested} LP tokens but only {owned} are owned")]
    InsufficientLpBalance {
        /// Amount the user asked to redeem.
        requested: Decimal,
        /// LP balance the user actually holds.
        owned: Decimal,
    },

    /// A decimal amount could not be represented in raw integer units.
    #[error("amount {0} is out of range for {1} decimals")]
    AmountOutOfRange(Decimal, u8),
}
