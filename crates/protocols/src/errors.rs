use lp_redeem_domain::PoolType;
use thiserror::Error;

/// Errors raised while talking to the chain or decoding its accounts.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// No registry entry matches the requested pair and pool type.
    #[error("pool for {symbol_x} - {symbol_y} ({pool_type}) does not exist")]
    PoolNotFound {
        /// First symbol of the ordered pair.
        symbol_x: String,
        /// Second symbol of the ordered pair.
        symbol_y: String,
        /// Requested pool type.
        pool_type: PoolType,
    },

    /// A configured address is not a valid public key.
    #[error("invalid address {address}: {reason}")]
    BadAddress {
        /// The offending address string.
        address: String,
        /// Parse failure detail.
        reason: String,
    },

    /// An expected account is missing on chain.
    #[error("account {0} not found on chain")]
    AccountNotFound(String),

    /// Account data did not unpack as the expected SPL type.
    #[error("failed to decode {account}: {reason}")]
    AccountDecode {
        /// Address of the account being decoded.
        account: String,
        /// Decode failure detail.
        reason: String,
    },

    /// The on-chain pool account disagrees with the registry entry.
    #[error("pool account layout mismatch: {0}")]
    LayoutMismatch(String),

    /// RPC transport failure.
    #[error(transparent)]
    Rpc(#[from] solana_client::client_error::ClientError),
}
