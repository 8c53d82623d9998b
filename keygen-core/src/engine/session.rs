// keygen-core/src/engine/session.rs
//
// In-memory session: current mnemonic + append-only list of derived wallets.
// Nothing here is persisted; dropping the session drops (and zeroizes) the keys.

use crate::chains::Chain;
use crate::crypto::mnemonic::{WalletMnemonic, WordCount};
use crate::engine::batch::{self, DerivationRequest};
use crate::engine::wallet::DerivedWallet;
use crate::engine::WalletEngine;
use crate::error::{DerivationError, WalletResult};
use tracing::{debug, info};

/// Result of one `create_wallets` call, for the host to notify on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Wallets appended to the session by this call
    pub created: usize,
    pub errors: Vec<DerivationError>,
}

impl BatchReport {
    /// Distinct chains that failed, one notification each
    pub fn failed_chains(&self) -> Vec<Chain> {
        batch::failed_chains(&self.errors)
    }
}

#[derive(Debug)]
pub struct WalletSession {
    engine: WalletEngine,
    mnemonic: WalletMnemonic,
    wallets: Vec<DerivedWallet>,
}

impl WalletSession {
    /// Session with a fresh 12-word mnemonic and default engine
    pub fn new() -> WalletResult<Self> {
        Ok(Self::with_engine(
            WalletEngine::default(),
            WalletMnemonic::generate()?,
        ))
    }

    /// Session over a user-supplied phrase
    pub fn with_mnemonic(phrase: &str) -> WalletResult<Self> {
        Ok(Self::with_engine(
            WalletEngine::default(),
            WalletMnemonic::from_phrase(phrase)?,
        ))
    }

    pub fn with_engine(engine: WalletEngine, mnemonic: WalletMnemonic) -> Self {
        Self {
            engine,
            mnemonic,
            wallets: Vec::new(),
        }
    }

    pub fn mnemonic(&self) -> &WalletMnemonic {
        &self.mnemonic
    }

    /// Replace the mnemonic. Wallets already derived stay in the list.
    pub fn regenerate_mnemonic(&mut self, word_count: WordCount) -> WalletResult<()> {
        self.mnemonic = WalletMnemonic::with_word_count(word_count)?;
        debug!(words = word_count as usize, "Mnemonic regenerated");
        Ok(())
    }

    pub fn set_mnemonic(&mut self, phrase: &str) -> WalletResult<()> {
        self.mnemonic = WalletMnemonic::from_phrase(phrase)?;
        Ok(())
    }

    /// Derive `request` from the current mnemonic and append the successes
    pub fn create_wallets(&mut self, request: &DerivationRequest) -> BatchReport {
        let outcome = self.engine.derive_batch(self.mnemonic.phrase(), request);
        let created = outcome.wallets.len();
        self.wallets.extend(outcome.wallets);

        if created > 0 {
            info!(created, total = self.wallets.len(), "Wallets created");
        }

        BatchReport {
            created,
            errors: outcome.errors,
        }
    }

    pub fn wallets(&self) -> &[DerivedWallet] {
        &self.wallets
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }
}
