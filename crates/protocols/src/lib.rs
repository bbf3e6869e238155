//! Chain-facing collaborators: RPC access, pool registry, account layouts
//! and the live pool-state reader.

/// Error types for chain access.
pub mod errors;
/// On-chain account layout and state reader.
pub mod onchain;
/// Static pool registry keyed by symbol pair and pool type.
pub mod registry;
/// Thin async wrapper over the RPC client.
pub mod rpc;

use async_trait::async_trait;
use lp_redeem_domain::{Pool, PoolState};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

pub use errors::ProtocolError;

/// Parses a configured base58 address into a [`Pubkey`].
///
/// # Errors
/// [`ProtocolError::BadAddress`] when the string is not a valid key.
pub fn parse_pubkey(address: &str) -> Result<Pubkey, ProtocolError> {
    Pubkey::from_str(address).map_err(|e| ProtocolError::BadAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

/// Reads a pool's live reserves and LP supply.
///
/// Implementations must read fresh on every call; the returned snapshot
/// is advisory and may be stale by the time a transaction lands.
#[async_trait]
pub trait PoolStateReader {
    /// Fetches current reserves and LP-token supply for `pool`.
    async fn read_state(&self, pool: &Pool) -> Result<PoolState, ProtocolError>;
}
