//! Preview-then-submit orchestration.
//!
//! Ties the collaborators together: look up the pool, bound the request
//! by the user's LP balance, snapshot the pool state, estimate, and (on
//! confirmation) submit. The snapshot and the submission are not atomic;
//! the chain can move in between, which is why the preview carries its
//! slot and the transaction carries slippage floors.

use crate::withdraw::{ExecutionResult, WithdrawParams, WithdrawalSubmitter};
use anyhow::{Context, Result};
use lp_redeem_domain::{Amount, Pool, PoolType, WithdrawalPreview, WithdrawalRequest, math};
use lp_redeem_protocols::onchain::ChainPoolReader;
use lp_redeem_protocols::registry::PoolRegistry;
use lp_redeem_protocols::rpc::RpcProvider;
use lp_redeem_protocols::PoolStateReader;
use rust_decimal::Decimal;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signer::Signer;
use std::sync::Arc;
use tracing::info;

/// Outcome of a preview request.
#[derive(Debug, Clone)]
pub struct PreviewOutcome {
    /// The pool the preview is for.
    pub pool: Pool,
    /// Estimated withdrawal output.
    pub preview: WithdrawalPreview,
    /// The user's LP balance, display-scaled.
    pub owned_balance: Decimal,
}

/// Outcome of a withdrawal request.
#[derive(Debug, Clone)]
pub struct WithdrawReport {
    /// The preview the submission was based on.
    pub preview: WithdrawalPreview,
    /// Submission result; `None` for dry runs that only simulated.
    pub execution: Option<ExecutionResult>,
    /// Whether a dry-run simulation passed (always true for real runs
    /// that reached submission).
    pub simulated_ok: bool,
}

/// High-level withdraw workflow over a registry, reader and submitter.
pub struct WithdrawService {
    registry: PoolRegistry,
    reader: ChainPoolReader,
    submitter: WithdrawalSubmitter,
}

impl WithdrawService {
    /// Creates the service with reader and submitter sharing `provider`.
    #[must_use]
    pub fn new(registry: PoolRegistry, provider: Arc<RpcProvider>) -> Self {
        Self {
            registry,
            reader: ChainPoolReader::new(Arc::clone(&provider)),
            submitter: WithdrawalSubmitter::new(provider),
        }
    }

    /// Pools known to the service.
    #[must_use]
    pub fn pools(&self) -> &[Pool] {
        self.registry.all()
    }

    /// Previews a withdrawal: fresh pool snapshot, pro-rata estimate.
    ///
    /// The request is bounded by the owner's LP balance before the
    /// estimator runs. The returned preview is a best-effort snapshot,
    /// not a binding quote.
    ///
    /// # Errors
    /// Pool lookup, balance/estimator validation or RPC failures.
    pub async fn preview(
        &self,
        symbol_x: &str,
        symbol_y: &str,
        pool_type: PoolType,
        lp_amount: Decimal,
        owner: &Pubkey,
    ) -> Result<PreviewOutcome> {
        let pool = self.registry.lookup(symbol_x, symbol_y, pool_type)?;

        let owned_balance = self
            .reader
            .lp_balance(owner, pool)
            .await
            .context("Failed to read LP balance")?
            .to_decimal();
        let request = WithdrawalRequest::new(lp_amount, owned_balance)?;

        let state = self
            .reader
            .read_state(pool)
            .await
            .context("Failed to read pool state")?;
        let preview = math::withdrawal::preview(&state, &request)?;

        info!(
            pool = %pool.label(),
            lp_amount = %lp_amount,
            receive_x = %preview.receive_x,
            receive_y = %preview.receive_y,
            slot = preview.snapshot_slot,
            "withdrawal preview"
        );

        Ok(PreviewOutcome {
            pool: pool.clone(),
            preview,
            owned_balance,
        })
    }

    /// Previews and submits a withdrawal.
    ///
    /// `slippage_bps` floors the accepted outputs below the previewed
    /// amounts; `0` accepts whatever the pool pays out (the previewed
    /// amounts may differ from execution when the pool moves after the
    /// snapshot). With `dry_run` the transaction is only simulated.
    ///
    /// # Errors
    /// Validation, build or RPC transport failures. On-chain rejection is
    /// reported inside the returned [`WithdrawReport`], not as an error.
    #[allow(clippy::too_many_arguments)]
    pub async fn withdraw<S: Signer>(
        &self,
        symbol_x: &str,
        symbol_y: &str,
        pool_type: PoolType,
        lp_amount: Decimal,
        slippage_bps: u16,
        payer: &S,
        dry_run: bool,
    ) -> Result<WithdrawReport> {
        let outcome = self
            .preview(symbol_x, symbol_y, pool_type, lp_amount, &payer.pubkey())
            .await?;
        let pool = outcome.pool;

        // The registry entry is about to drive a signed transaction;
        // refuse to proceed if the chain disagrees with it.
        self.reader
            .verify_layout(&pool)
            .await
            .context("Pool account verification failed")?;

        let lp_raw = Amount::from_decimal(lp_amount, pool.lp_decimals)?
            .to_u64()
            .context("LP amount does not fit instruction encoding")?;
        let min_x = floor_with_slippage(outcome.preview.receive_x, slippage_bps);
        let min_y = floor_with_slippage(outcome.preview.receive_y, slippage_bps);
        let params = WithdrawParams {
            lp_amount: lp_raw,
            min_x: Amount::from_decimal(min_x, pool.token_x.decimals)?
                .to_u64()
                .context("min X amount does not fit instruction encoding")?,
            min_y: Amount::from_decimal(min_y, pool.token_y.decimals)?
                .to_u64()
                .context("min Y amount does not fit instruction encoding")?,
            pool,
        };

        if dry_run {
            let simulated_ok = self.submitter.simulate(&params, payer).await?;
            return Ok(WithdrawReport {
                preview: outcome.preview,
                execution: None,
                simulated_ok,
            });
        }

        let execution = self.submitter.submit(&params, payer).await?;
        Ok(WithdrawReport {
            preview: outcome.preview,
            execution: Some(execution),
            simulated_ok: true,
        })
    }
}

/// Applies a basis-point slippage floor to a previewed amount.
fn floor_with_slippage(amount: Decimal, slippage_bps: u16) -> Decimal {
    let factor = Decimal::from(10_000u16.saturating_sub(slippage_bps)) / Decimal::from(10_000u32);
    amount * factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_slippage_keeps_amount() {
        assert_eq!(floor_with_slippage(dec!(250), 0), dec!(250));
    }

    #[test]
    fn test_slippage_floor() {
        // 50 bps on 250 -> 248.75
        assert_eq!(floor_with_slippage(dec!(250), 50), dec!(248.75));
        // 100% slippage accepts anything
        assert_eq!(floor_with_slippage(dec!(250), 10_000), dec!(0));
    }

    #[test]
    fn test_slippage_saturates() {
        assert_eq!(floor_with_slippage(dec!(1), u16::MAX), dec!(0));
    }
}
