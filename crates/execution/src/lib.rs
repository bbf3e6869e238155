//! Withdrawal submission and orchestration.
//!
//! This crate owns the write path: loading a local wallet, building the
//! remove-liquidity instruction, signing and confirming the transaction,
//! and the preview-then-submit service that ties the reader and the
//! estimator together.

/// Prelude module for convenient imports.
pub mod prelude;

/// Preview-then-submit orchestration.
pub mod service;
/// Local wallet loading.
pub mod wallet;
/// Withdraw instruction building and submission.
pub mod withdraw;
