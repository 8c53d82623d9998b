// keygen-core/src/chains/evm/address.rs
//
// EVM Address Module
// EIP-55 (Checksum), Keccak-256, secp256k1

use crate::chains::secp256k1_public_key;
use crate::error::{CryptoError, WalletError, WalletResult};
use alloy_primitives::Address;
use tiny_keccak::{Hasher, Keccak};
use zeroize::{Zeroize, Zeroizing};

/// EVM Address Generator
///
/// # Flow:  Private Key (32B) → Public Key (64B) → Keccak256 → Address (20B)
pub struct EvmAddress;

impl EvmAddress {
    /// Derive the 20 address bytes from a private key.
    ///
    /// 1. `priv_key` (32B) → secp256k1 → `pub_key` (uncompressed, 65B)
    /// 2. Drop the 0x04 prefix byte → `pub_key_raw` (64B)
    /// 3. Keccak-256(`pub_key_raw`) → `hash` (32B)
    /// 4. `hash[12..32]` → `address` (20B)
    pub fn derive_bytes(priv_key: &[u8]) -> WalletResult<[u8; 20]> {
        let uncompressed = Zeroizing::new(secp256k1_public_key(priv_key, false)?);
        Self::from_uncompressed_public_key(&uncompressed)
    }

    /// Address bytes for a 65-byte SEC1 uncompressed public key (`0x04 || X || Y`)
    pub fn from_uncompressed_public_key(pub_key: &[u8]) -> WalletResult<[u8; 20]> {
        let pub_key_raw = match pub_key.split_first() {
            Some((&0x04, rest)) if rest.len() == 64 => rest,
            _ => {
                return Err(WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                    "expected 65-byte uncompressed public key, got {} bytes",
                    pub_key.len()
                ))))
            }
        };

        let mut hasher = Keccak::v256();
        let mut hash = [0u8; 32];
        hasher.update(pub_key_raw);
        hasher.finalize(&mut hash);

        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);
        hash.zeroize();

        Ok(address)
    }

    /// EIP-55 checksummed address, e.g. `"0x9858EfFD232B4033E47d90003D41EC34EcaEda94"`
    #[inline]
    pub fn derive(priv_key: &[u8]) -> WalletResult<String> {
        let bytes = Self::derive_bytes(priv_key)?;
        Ok(Address::from_slice(&bytes).to_checksum(None))
    }

    // =========================================================================
    // UTILITIES
    // =========================================================================

    /// `0x` prefix + 40 hex chars
    #[inline]
    pub fn is_valid(address: &str) -> bool {
        address.parse::<Address>().is_ok()
    }

    /// `"0xabcd..."` → `"0xAbCd..."`
    pub fn to_checksum(address: &str) -> WalletResult<String> {
        let addr: Address = address.parse().map_err(|_| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(
                "Invalid Ethereum address format".to_string(),
            ))
        })?;
        Ok(addr.to_checksum(None))
    }

    /// Case-insensitive comparison
    #[inline]
    pub fn equals(addr1: &str, addr2: &str) -> bool {
        match (addr1.parse::<Address>(), addr2.parse::<Address>()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
