// keygen-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine - Multi-Curve Support
//
// ┌─────────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)           │
// │                    │                            │
// │     ┌──────────────┴──────────────┐             │
// │     ▼                             ▼             │
// │  secp256k1 (BIP-32)        ed25519 (SLIP-0010)  │
// │  ├─ Ethereum              └─ Solana             │
// │  └─ Bitcoin                                     │
// └─────────────────────────────────────────────────┘

pub mod ed25519;
pub mod secp256k1;

pub use ed25519::Ed25519Deriver;
pub use secp256k1::Secp256k1Deriver;

use crate::error::{CryptoError, WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

// =============================================================================
// COMMON TYPES
// =============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveType {
    /// secp256k1 — Bitcoin, Ethereum
    Secp256k1,
    /// Ed25519 — Solana
    Ed25519,
}

/// Derived private key plus the path it came from
pub struct DerivedKey {
    /// 32 bytes, zeroized on drop
    pub private_key: Zeroizing<[u8; 32]>,
    pub curve: CurveType,
    pub path: String,
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("curve", &self.curve)
            .field("path", &self.path)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// UNIFIED DERIVER
// =============================================================================
/// Entry point that dispatches to [`Secp256k1Deriver`] or [`Ed25519Deriver`]
pub struct KeyDeriver;

impl KeyDeriver {
    pub const SEED_LEN: usize = 64;

    /// # Arguments
    /// * `seed` - BIP-39 seed (64 bytes)
    /// * `path` - Derivation path (e.g., "m/44'/60'/0'/0/0")
    /// * `curve` - Curve type
    pub fn derive(seed: &[u8], path: &str, curve: CurveType) -> WalletResult<DerivedKey> {
        Self::validate_seed(seed)?;

        let private_key = match curve {
            CurveType::Secp256k1 => Secp256k1Deriver::derive(seed, path)?,
            CurveType::Ed25519 => Ed25519Deriver::derive(seed, path)?,
        };

        Ok(DerivedKey {
            private_key,
            curve,
            path: path.to_string(),
        })
    }

    #[inline]
    fn validate_seed(seed: &[u8]) -> WalletResult<()> {
        if seed.len() != Self::SEED_LEN {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid seed length: expected {} bytes, got {}",
                Self::SEED_LEN,
                seed.len()
            ))));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
