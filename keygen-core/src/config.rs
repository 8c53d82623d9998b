// keygen-core/src/config.rs

//! Engine configuration.
//!
//! Every field has a default, so `{}` is a complete JSON config.

use crate::chains::bitcoin::BitcoinNetwork;
use crate::crypto::paths::{PathTable, SolanaPathPolicy};
use crate::error::{WalletError, WalletResult};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Path template per chain
    pub paths: PathTable,

    /// P2PKH version byte for Bitcoin addresses (default: mainnet)
    pub bitcoin_network: BitcoinNetwork,

    /// Optional BIP-39 passphrase ("25th word"). None derives exactly as
    /// a passphrase-less wallet would.
    pub passphrase: Option<String>,
}

// Custom Debug - passphrase never printed
impl std::fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineConfig")
            .field("paths", &self.paths)
            .field("bitcoin_network", &self.bitcoin_network)
            .field(
                "passphrase",
                &self.passphrase.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl EngineConfig {
    /// Config with the given Solana path policy and defaults elsewhere
    pub fn with_solana_policy(policy: SolanaPathPolicy) -> Self {
        Self {
            paths: PathTable::with_solana_policy(policy),
            ..Default::default()
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> WalletResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| WalletError::Config(format!("invalid engine config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> WalletResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| WalletError::Config(format!("cannot serialize engine config: {}", e)))
    }

    pub fn validate(&self) -> WalletResult<()> {
        self.paths.validate()
    }

    #[inline]
    pub(crate) fn passphrase(&self) -> Option<&str> {
        self.passphrase.as_deref()
    }
}
