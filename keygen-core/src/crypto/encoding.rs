// keygen-core/src/crypto/encoding.rs
//
// Key material encodings: raw bytes, base58 (Bitcoin alphabet), lowercase hex

use crate::error::{CryptoError, WalletError, WalletResult};
use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A 32-byte private key in every encoding a host surface shows.
///
/// Raw bytes are skipped by serde; the string forms are serialized.
#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKeyEncodings {
    #[serde(skip)]
    pub raw: [u8; 32],
    pub base58: String,
    pub hex: String,
}

impl PrivateKeyEncodings {
    pub fn from_bytes(raw: &[u8; 32]) -> Self {
        Self {
            raw: *raw,
            base58: bs58::encode(raw).into_string(),
            hex: hex::encode(raw),
        }
    }
}

/// Full 64-byte Ed25519 secret key (`seed ‖ public key`)
#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct SecretKeyEncodings {
    #[serde(skip)]
    pub raw: [u8; 64],
    pub base58: String,
    pub hex: String,
}

impl SecretKeyEncodings {
    pub fn from_bytes(raw: &[u8; 64]) -> Self {
        Self {
            raw: *raw,
            base58: bs58::encode(raw).into_string(),
            hex: hex::encode(raw),
        }
    }

    /// First half, the Ed25519 seed
    pub fn seed_half(&self) -> &[u8] {
        &self.raw[..32]
    }

    /// Second half, the Ed25519 public key
    pub fn public_half(&self) -> &[u8] {
        &self.raw[32..]
    }
}

macro_rules! redacted_debug {
    ($ty:ident) => {
        impl std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($ty))
                    .field("len", &self.raw.len())
                    .field("value", &"[REDACTED]")
                    .finish()
            }
        }
    };
}

redacted_debug!(PrivateKeyEncodings);
redacted_debug!(SecretKeyEncodings);

pub fn decode_base58(s: &str) -> WalletResult<Vec<u8>> {
    bs58::decode(s).into_vec().map_err(|e| {
        WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
            "invalid base58: {}",
            e
        )))
    })
}

/// Accepts an optional `0x` prefix
pub fn decode_hex(s: &str) -> WalletResult<Vec<u8>> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(s).map_err(|e| {
        WalletError::Crypto(CryptoError::InvalidKeyFormat(format!("invalid hex: {}", e)))
    })
}
