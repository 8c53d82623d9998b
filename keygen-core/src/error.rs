// keygen-core/src/error.rs

use crate::chains::Chain;
use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Config Error: {0}")]
    Config(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word '{0}' not found in the BIP39 wordlist.")]
    UnknownWord(String),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Invalid derivation path: {0}")]
    InvalidPath(String),

    #[error("Invalid key format: {0}")]
    InvalidKeyFormat(String),
}

/// Failure of a single (chain, index) derivation unit.
///
/// Batches collect these instead of aborting; no wallet is recorded for
/// the failed unit.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Failed to create {chain} wallet #{index}: {cause}")]
pub struct DerivationError {
    pub chain: Chain,
    pub index: u32,
    #[source]
    pub cause: WalletError,
}

impl DerivationError {
    pub fn new(chain: Chain, index: u32, cause: impl Into<WalletError>) -> Self {
        Self {
            chain,
            index,
            cause: cause.into(),
        }
    }
}
