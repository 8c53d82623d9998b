// keygen-core/src/engine/batch.rs
//
// Batch requests: (chain selector × wallet count) expanded into isolated units

use crate::chains::{Chain, ChainSelector};
use crate::engine::wallet::DerivedWallet;
use crate::error::{DerivationError, WalletError, WalletResult};
use serde::{Deserialize, Serialize};

/// What to derive: which chain(s) and how many wallets per chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRequest")]
pub struct DerivationRequest {
    chain: ChainSelector,
    count: u32,
}

#[derive(Deserialize)]
struct RawRequest {
    chain: ChainSelector,
    count: u32,
}

impl TryFrom<RawRequest> for DerivationRequest {
    type Error = WalletError;

    fn try_from(raw: RawRequest) -> Result<Self, Self::Error> {
        Self::new(raw.chain, raw.count)
    }
}

impl DerivationRequest {
    /// Upper bound the wallet-creation form offers; the engine itself
    /// accepts any positive count.
    pub const UI_MAX_COUNT: u32 = 7;

    pub fn new(chain: impl Into<ChainSelector>, count: u32) -> WalletResult<Self> {
        if count == 0 {
            return Err(WalletError::Validation(
                "wallet count must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            chain: chain.into(),
            count,
        })
    }

    pub fn chain(&self) -> ChainSelector {
        self.chain
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Units in derivation order: wallet index outer, chain inner
    pub fn units(&self) -> impl Iterator<Item = (u32, Chain)> {
        let chains = self.chain.chains();
        (0..self.count).flat_map(move |index| chains.clone().into_iter().map(move |c| (index, c)))
    }

    pub fn unit_count(&self) -> usize {
        self.chain.chains().len() * self.count as usize
    }
}

/// Successes and per-unit failures of one batch, both in derivation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub wallets: Vec<DerivedWallet>,
    pub errors: Vec<DerivationError>,
}

impl BatchOutcome {
    pub fn record(&mut self, result: Result<DerivedWallet, DerivationError>) {
        match result {
            Ok(wallet) => self.wallets.push(wallet),
            Err(err) => self.errors.push(err),
        }
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn failed_chains(&self) -> Vec<Chain> {
        failed_chains(&self.errors)
    }

    pub fn wallets_for(&self, chain: Chain) -> impl Iterator<Item = &DerivedWallet> {
        self.wallets.iter().filter(move |w| w.chain() == chain)
    }
}

/// Distinct chains with at least one failure, in first-failure order
pub(crate) fn failed_chains(errors: &[DerivationError]) -> Vec<Chain> {
    let mut chains: Vec<Chain> = Vec::new();
    for err in errors {
        if !chains.contains(&err.chain) {
            chains.push(err.chain);
        }
    }
    chains
}
