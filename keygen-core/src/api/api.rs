use crate::chains::{Chain, ChainSelector};
use crate::config::EngineConfig;
use crate::crypto::mnemonic::{WalletMnemonic, WordCount};
use crate::crypto::paths::PathTable;
use crate::engine::{BatchOutcome, DerivationRequest, DerivedWallet, WalletEngine};
use crate::error::{DerivationError, WalletResult};

// --- Mnemonic ---

/// Fresh 12-word phrase
pub fn create_mnemonic() -> WalletResult<String> {
    create_mnemonic_with(WordCount::Twelve)
}

pub fn create_mnemonic_with(word_count: WordCount) -> WalletResult<String> {
    Ok(WalletMnemonic::with_word_count(word_count)?.phrase().to_string())
}

pub fn validate_mnemonic(phrase: &str) -> bool {
    WalletMnemonic::validate(phrase)
}

// --- Derivation (default config) ---

pub fn derive_wallet(
    mnemonic: &str,
    chain: Chain,
    index: u32,
) -> Result<DerivedWallet, DerivationError> {
    WalletEngine::default().derive_wallet(mnemonic, chain, index)
}

pub fn derive_batch(
    mnemonic: &str,
    chain: ChainSelector,
    count: u32,
) -> WalletResult<BatchOutcome> {
    let request = DerivationRequest::new(chain, count)?;
    Ok(WalletEngine::default().derive_batch(mnemonic, &request))
}

/// Same as [`derive_batch`] with the chain given as "solana", "ethereum",
/// "bitcoin" or "all"
pub fn derive_batch_str(mnemonic: &str, chain: &str, count: u32) -> WalletResult<BatchOutcome> {
    derive_batch(mnemonic, chain.parse()?, count)
}

// --- Derivation (custom config) ---

pub fn derive_batch_with_config(
    mnemonic: &str,
    request: &DerivationRequest,
    config_json: &str,
) -> WalletResult<BatchOutcome> {
    let engine = WalletEngine::new(EngineConfig::from_json(config_json)?)?;
    Ok(engine.derive_batch(mnemonic, request))
}

// --- Config helpers ---

pub fn default_paths() -> PathTable {
    PathTable::default()
}

pub fn default_config() -> EngineConfig {
    EngineConfig::default()
}
