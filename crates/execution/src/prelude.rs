//! Prelude module for convenient imports.
//!
//! ```rust
//! use lp_redeem_execution::prelude::*;
//! ```

pub use crate::service::{PreviewOutcome, WithdrawReport, WithdrawService};
pub use crate::wallet::Wallet;
pub use crate::withdraw::{ExecutionResult, WithdrawParams, WithdrawalSubmitter};
