// keygen-core/src/chains/solana/keypair.rs
//
// Solana Keypair Module
// Ed25519 seed (32B) → SigningKey → secret key (seed || public key, 64B)

use crate::error::{CryptoError, WalletError, WalletResult};
use ed25519_dalek::SigningKey;
use zeroize::Zeroizing;

/// Ed25519 keypair in the 64-byte layout Solana tooling expects
///
/// # Security
/// `SigningKey` zeroizes itself on drop; the secret bytes handed out are
/// wrapped in `Zeroizing`.
pub struct SolanaKeypair {
    signing_key: SigningKey,
}

impl std::fmt::Debug for SolanaKeypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolanaKeypair")
            .field("pubkey", &self.pubkey_base58())
            .finish_non_exhaustive()
    }
}

impl SolanaKeypair {
    /// Any 32 bytes are a valid Ed25519 seed
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    /// Rebuild from a 64-byte secret key, rejecting a mismatched public half
    pub fn from_secret_key(secret: &[u8]) -> WalletResult<Self> {
        let bytes: &[u8; 64] = secret.try_into().map_err(|_| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Solana secret key must be 64 bytes, got {}",
                secret.len()
            )))
        })?;
        let signing_key = SigningKey::from_keypair_bytes(bytes).map_err(|e| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Invalid Solana keypair bytes: {}",
                e
            )))
        })?;
        Ok(Self { signing_key })
    }

    pub fn pubkey_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Solana address (base58 public key)
    pub fn pubkey_base58(&self) -> String {
        bs58::encode(self.pubkey_bytes()).into_string()
    }

    /// Ed25519 seed, the first half of the secret key
    pub fn seed_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.signing_key.to_bytes())
    }

    /// `seed || public key`
    pub fn secret_key_bytes(&self) -> Zeroizing<[u8; 64]> {
        Zeroizing::new(self.signing_key.to_keypair_bytes())
    }
}
