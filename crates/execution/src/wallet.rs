//! Local wallet loading.
//!
//! Signing itself is owned by `solana-sdk`; this module only locates and
//! loads the keypair file.

use anyhow::{Result, anyhow};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signer::Signer;
use solana_sdk::signer::keypair::{Keypair, read_keypair_file};
use std::path::Path;

/// A connected wallet backed by a local keypair file.
#[derive(Debug)]
pub struct Wallet {
    keypair: Keypair,
}

impl Wallet {
    /// Loads the keypair from a JSON keypair file.
    ///
    /// # Errors
    /// Returns an error when the file is missing or malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let keypair = read_keypair_file(path)
            .map_err(|e| anyhow!("failed to read keypair {}: {e}", path.display()))?;
        Ok(Self { keypair })
    }

    /// The wallet's public key.
    #[must_use]
    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// The underlying signer for transaction signing.
    #[must_use]
    pub fn signer(&self) -> &Keypair {
        &self.keypair
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_errors() {
        let err = Wallet::from_file("/nonexistent/keypair.json").unwrap_err();
        assert!(err.to_string().contains("keypair"));
    }
}
