// keygen-core/src/crypto/paths.rs
//
// Derivation Paths Module - per-chain path templates
// BIP-44 (Purpose), SLIP-44 (Coin Types), SLIP-0010 (ed25519, all hardened)

use crate::chains::Chain;
use crate::error::{CryptoError, WalletError, WalletResult};
use serde::{Deserialize, Serialize};

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    pub const BITCOIN: u32 = 0;
    pub const ETHEREUM: u32 = 60;
    pub const SOLANA: u32 = 501;
}

/// Placeholder replaced by the wallet index when a template is rendered
pub const INDEX_PLACEHOLDER: &str = "{index}";

// =============================================================================
// PATH TEMPLATE
// =============================================================================
/// Derivation path with an optional `{index}` slot.
///
/// `m/44'/60'/0'/0/{index}` rendered at 3 gives `m/44'/60'/0'/0/3`. A
/// template without the slot renders to the same path for every index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathTemplate(String);

impl PathTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_indexed(&self) -> bool {
        self.0.contains(INDEX_PLACEHOLDER)
    }

    pub fn render(&self, index: u32) -> String {
        self.0.replace(INDEX_PLACEHOLDER, &index.to_string())
    }

    /// Structural check only; curve-specific rules (hardening) are enforced
    /// by the deriver at derivation time.
    pub fn validate(&self) -> WalletResult<()> {
        let t = self.0.trim();
        if !t.starts_with("m/") || t.len() <= 2 {
            return Err(WalletError::Crypto(CryptoError::InvalidPath(format!(
                "path must start with 'm/' and name at least one level: '{}'",
                self.0
            ))));
        }
        Ok(())
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PathTemplate {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// =============================================================================
// DERIVATION PATHS
// =============================================================================
/// Pre-built paths
///
/// # Conventions
/// - BIP-44: `m/44'/coin'/account'/change/index` (secp256k1)
/// - SLIP-0010: `m/44'/501'/account'/0'` (Solana, all hardened)
pub struct DerivationPaths;

impl DerivationPaths {
    pub const EVM_0: &'static str = "m/44'/60'/0'/0/0";
    pub const BTC_LEGACY_0: &'static str = "m/44'/0'/0'/0/0";
    pub const SOLANA_0: &'static str = "m/44'/501'/0'/0'";

    pub const EVM_TEMPLATE: &'static str = "m/44'/60'/0'/0/{index}";
    pub const BTC_LEGACY_TEMPLATE: &'static str = "m/44'/0'/0'/0/{index}";
    /// Phantom / solana-keygen convention: one account per wallet
    pub const SOLANA_TEMPLATE: &'static str = "m/44'/501'/{index}'/0'";

    #[inline]
    pub fn evm(index: u32) -> String {
        Self::bip44(44, coin_type::ETHEREUM, 0, 0, index)
    }

    #[inline]
    pub fn btc_legacy(account: u32, index: u32) -> String {
        Self::bip44(44, coin_type::BITCOIN, account, 0, index)
    }

    /// Solana path with custom account index
    #[inline]
    pub fn solana(account: u32) -> String {
        Self::ed25519_path(coin_type::SOLANA, account, &[0])
    }

    /// BIP-44 path for secp256k1 chains
    ///
    /// # Arguments
    /// * `purpose` - 44 (BIP-44)
    /// * `coin_type` - SLIP-44 coin type (`coin_type::*`)
    /// * `account` - Account index (usually 0)
    /// * `change` - 0 = external, 1 = internal
    /// * `index` - Address index
    #[inline]
    pub fn bip44(purpose: u32, coin_type: u32, account: u32, change: u32, index: u32) -> String {
        format!(
            "m/{}'/{}'/{}'/{}/{}",
            purpose, coin_type, account, change, index
        )
    }

    /// SLIP-0010 path for Ed25519 (every level hardened)
    ///
    /// - Solana: `ed25519_path(501, 0, &[0])` -> m/44'/501'/0'/0'
    pub fn ed25519_path(coin_type: u32, account: u32, sub_paths: &[u32]) -> String {
        let mut path = format!("m/44'/{}'/{}'", coin_type, account);
        for &idx in sub_paths {
            path.push_str(&format!("/{}'", idx));
        }
        path
    }
}

// =============================================================================
// PER-CHAIN TABLE
// =============================================================================
/// How Solana wallets map a wallet index onto a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolanaPathPolicy {
    /// `m/44'/501'/{index}'/0'`, distinct key per wallet index
    #[default]
    AccountIndexed,
    /// `m/44'/501'/0'/0'` for every index; repeated wallets are identical
    Fixed,
}

impl SolanaPathPolicy {
    pub fn template(self) -> PathTemplate {
        match self {
            SolanaPathPolicy::AccountIndexed => PathTemplate::new(DerivationPaths::SOLANA_TEMPLATE),
            SolanaPathPolicy::Fixed => PathTemplate::new(DerivationPaths::SOLANA_0),
        }
    }
}

/// Derivation path template for each supported chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathTable {
    pub solana: PathTemplate,
    pub ethereum: PathTemplate,
    pub bitcoin: PathTemplate,
}

impl Default for PathTable {
    fn default() -> Self {
        Self::with_solana_policy(SolanaPathPolicy::default())
    }
}

impl PathTable {
    pub fn with_solana_policy(policy: SolanaPathPolicy) -> Self {
        Self {
            solana: policy.template(),
            ethereum: PathTemplate::new(DerivationPaths::EVM_TEMPLATE),
            bitcoin: PathTemplate::new(DerivationPaths::BTC_LEGACY_TEMPLATE),
        }
    }

    pub fn template(&self, chain: Chain) -> &PathTemplate {
        match chain {
            Chain::Solana => &self.solana,
            Chain::Ethereum => &self.ethereum,
            Chain::Bitcoin => &self.bitcoin,
        }
    }

    pub fn path_for(&self, chain: Chain, index: u32) -> String {
        self.template(chain).render(index)
    }

    pub fn validate(&self) -> WalletResult<()> {
        for chain in Chain::ALL {
            self.template(chain).validate().map_err(|e| {
                WalletError::Config(format!("{} path template: {}", chain, e))
            })?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evm_paths() {
        assert_eq!(DerivationPaths::evm(0), DerivationPaths::EVM_0);
        assert_eq!(DerivationPaths::evm(5), "m/44'/60'/0'/0/5");
    }

    #[test]
    fn test_bitcoin_paths() {
        assert_eq!(DerivationPaths::btc_legacy(0, 0), DerivationPaths::BTC_LEGACY_0);
        assert_eq!(DerivationPaths::btc_legacy(0, 1), "m/44'/0'/0'/0/1");
    }

    #[test]
    fn test_solana_paths() {
        assert_eq!(DerivationPaths::solana(0), DerivationPaths::SOLANA_0);
        assert_eq!(DerivationPaths::solana(2), "m/44'/501'/2'/0'");
    }

    #[test]
    fn test_template_render() {
        let t = PathTemplate::new(DerivationPaths::EVM_TEMPLATE);
        assert!(t.is_indexed());
        assert_eq!(t.render(0), DerivationPaths::EVM_0);
        assert_eq!(t.render(7), DerivationPaths::evm(7));
    }

    #[test]
    fn test_default_table_matches_builders() {
        let table = PathTable::default();
        for i in 0..4 {
            assert_eq!(table.path_for(Chain::Solana, i), DerivationPaths::solana(i));
            assert_eq!(table.path_for(Chain::Ethereum, i), DerivationPaths::evm(i));
            assert_eq!(table.path_for(Chain::Bitcoin, i), DerivationPaths::btc_legacy(0, i));
        }
    }

    #[test]
    fn test_fixed_solana_policy_ignores_index() {
        let table = PathTable::with_solana_policy(SolanaPathPolicy::Fixed);
        assert!(!table.solana.is_indexed());
        assert_eq!(table.path_for(Chain::Solana, 0), DerivationPaths::SOLANA_0);
        assert_eq!(table.path_for(Chain::Solana, 6), DerivationPaths::SOLANA_0);
    }

    #[test]
    fn test_validate_rejects_relative_path() {
        assert!(PathTemplate::new("44'/60'/0'/0/{index}").validate().is_err());
        assert!(PathTemplate::new("m/").validate().is_err());
        assert!(PathTemplate::new(DerivationPaths::EVM_TEMPLATE).validate().is_ok());

        let mut table = PathTable::default();
        table.bitcoin = PathTemplate::new("garbage");
        assert!(matches!(table.validate(), Err(WalletError::Config(_))));
    }
}
