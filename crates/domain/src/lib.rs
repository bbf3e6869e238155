//! Core domain model for LP token redemption.
//!
//! This crate holds the pure, I/O-free part of the system: tokens, pools,
//! decimal-scaled amounts, withdrawal requests/previews and the pro-rata
//! withdrawal estimator. Everything that touches the chain lives in
//! `lp-redeem-protocols` and `lp-redeem-execution`.

/// Domain entities (tokens, pools, pool state).
pub mod entities;
/// Pool type discriminators.
pub mod enums;
/// Domain error types.
pub mod errors;
/// Pure math for redemption estimation.
pub mod math;
/// Value objects (amounts, requests, previews).
pub mod value_objects;

pub use entities::pool::{Pool, PoolAddresses, PoolState};
pub use entities::token::Token;
pub use enums::PoolType;
pub use errors::DomainError;
pub use value_objects::amount::Amount;
pub use value_objects::withdrawal::{WithdrawalPreview, WithdrawalRequest};
