// keygen-core/src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Key Derivation — SLIP-0010 Standard
//
// Used by: Solana
// Algorithm: HMAC-SHA512, hardened derivation only
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// SLIP-0010 for ed25519 supports ONLY hardened child derivation.
// e.g. m/44'/501'/0'/0' (OK)    m/44'/501'/0'/0 (INVALID)

use crate::error::{CryptoError, WalletError, WalletResult};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Ed25519 Key Deriver — SLIP-0010 Standard
///
/// # Differences from BIP-32
/// - Master key HMAC key is `"ed25519 seed"` instead of `"Bitcoin seed"`
/// - Every level is hardened
/// - Any 32 bytes form a valid ed25519 seed, so no range check is needed
pub struct Ed25519Deriver;

impl Ed25519Deriver {
    const MASTER_SECRET: &'static [u8] = b"ed25519 seed";

    /// Derive the 32-byte ed25519 seed at `path`.
    ///
    /// # Arguments
    /// * `seed` - 64 bytes BIP-39 seed
    /// * `path` - all levels hardened, e.g. "m/44'/501'/0'/0'"
    pub fn derive(seed: &[u8], path: &str) -> WalletResult<Zeroizing<[u8; 32]>> {
        let indices = Self::parse_path(path)?;

        // I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
        let (mut key, mut chain_code) = Self::hmac_split(Self::MASTER_SECRET, &[seed])?;

        // I = HMAC-SHA512(Key = chain_code, Data = 0x00 || key || ser32(index'))
        for index in indices {
            let hardened = (index | HARDENED_OFFSET).to_be_bytes();
            let (child_key, child_chain) =
                Self::hmac_split(&chain_code, &[&[0x00u8][..], &key[..], &hardened[..]])?;
            key.zeroize();
            chain_code.zeroize();
            key = child_key;
            chain_code = child_chain;
        }

        chain_code.zeroize();
        Ok(Zeroizing::new(key))
    }

    /// HMAC-SHA512 over the concatenation of `parts`, split into (IL, IR)
    fn hmac_split(hmac_key: &[u8], parts: &[&[u8]]) -> WalletResult<([u8; 32], [u8; 32])> {
        let mut mac = HmacSha512::new_from_slice(hmac_key).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "HMAC init failed: {}",
                e
            )))
        })?;
        for part in parts {
            mac.update(part);
        }

        let mut buf = [0u8; 64];
        buf.copy_from_slice(&mac.finalize().into_bytes());

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&buf[..32]);
        chain_code.copy_from_slice(&buf[32..]);

        // Scratch buffer holding raw key material
        buf.zeroize();

        Ok((key, chain_code))
    }

    /// "m/44'/501'/0'/0'" -> [44, 501, 0, 0]
    ///
    /// Accepts `'` or `h` as the hardened marker. Indices must be below 2^31.
    fn parse_path(path: &str) -> WalletResult<Vec<u32>> {
        let path = path.trim();

        let segments = path.strip_prefix("m/").ok_or_else(|| {
            WalletError::Crypto(CryptoError::InvalidPath(format!(
                "path must start with 'm/': {}",
                path
            )))
        })?;

        if segments.is_empty() {
            return Err(WalletError::Crypto(CryptoError::InvalidPath(
                "empty derivation path".to_string(),
            )));
        }

        let mut indices = Vec::new();
        for segment in segments.split('/') {
            let segment = segment.trim();

            let num_str = segment
                .strip_suffix('\'')
                .or_else(|| segment.strip_suffix('h'))
                .ok_or_else(|| {
                    WalletError::Crypto(CryptoError::InvalidPath(format!(
                        "ed25519 SLIP-0010 requires every level to be hardened, got '{}'",
                        segment
                    )))
                })?;

            let index: u32 = num_str.parse().map_err(|e| {
                WalletError::Crypto(CryptoError::InvalidPath(format!(
                    "invalid index '{}': {}",
                    num_str, e
                )))
            })?;

            if index >= HARDENED_OFFSET {
                return Err(WalletError::Crypto(CryptoError::InvalidPath(format!(
                    "index {} out of range",
                    index
                ))));
            }

            indices.push(index);
        }

        Ok(indices)
    }

    pub fn is_valid_path(path: &str) -> bool {
        Self::parse_path(path).is_ok()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::paths::DerivationPaths;

    // BIP-39 seed of "abandon ×11 about", no passphrase
    const TEST_SEED: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

    #[test]
    fn test_derive_solana_key() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let key = Ed25519Deriver::derive(&seed, DerivationPaths::SOLANA_0).unwrap();
        assert_eq!(key.len(), 32);
    }

    #[test]
    fn test_consistency() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let k1 = Ed25519Deriver::derive(&seed, DerivationPaths::SOLANA_0).unwrap();
        let k2 = Ed25519Deriver::derive(&seed, DerivationPaths::SOLANA_0).unwrap();
        assert_eq!(&*k1, &*k2);
    }

    #[test]
    fn test_different_accounts() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let k0 = Ed25519Deriver::derive(&seed, &DerivationPaths::solana(0)).unwrap();
        let k1 = Ed25519Deriver::derive(&seed, &DerivationPaths::solana(1)).unwrap();
        let k2 = Ed25519Deriver::derive(&seed, &DerivationPaths::solana(2)).unwrap();
        assert_ne!(&*k0, &*k1);
        assert_ne!(&*k1, &*k2);
    }

    #[test]
    fn test_h_marker_equivalent() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let a = Ed25519Deriver::derive(&seed, "m/44'/501'/0'/0'").unwrap();
        let b = Ed25519Deriver::derive(&seed, "m/44h/501h/0h/0h").unwrap();
        assert_eq!(&*a, &*b);
    }

    #[test]
    fn test_non_hardened_path_rejected() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let err = Ed25519Deriver::derive(&seed, "m/44'/501'/0'/0")
            .unwrap_err()
            .to_string();
        assert!(err.contains("hardened"));
    }

    #[test]
    fn test_invalid_path_format() {
        let seed = hex::decode(TEST_SEED).unwrap();
        assert!(Ed25519Deriver::derive(&seed, "invalid").is_err());
        assert!(Ed25519Deriver::derive(&seed, "44'/501'/0'").is_err());
        assert!(Ed25519Deriver::derive(&seed, "m/").is_err());
        assert!(Ed25519Deriver::derive(&seed, "m/44'//0'").is_err());
        assert!(Ed25519Deriver::derive(&seed, "m/2147483648'").is_err());
    }

    #[test]
    fn test_is_valid_path() {
        assert!(Ed25519Deriver::is_valid_path("m/44'/501'/0'/0'"));
        assert!(!Ed25519Deriver::is_valid_path("m/44'/501'/0'/0"));
        assert!(!Ed25519Deriver::is_valid_path("invalid"));
    }

    // =========================================================================
    // SLIP-0010 Test Vector 1 (ed25519)
    // Seed: 000102030405060708090a0b0c0d0e0f
    // =========================================================================

    #[test]
    fn test_slip0010_vector_master() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let (key, chain_code) = Ed25519Deriver::hmac_split(b"ed25519 seed", &[&seed[..]]).unwrap();
        assert_eq!(
            hex::encode(key),
            "2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7"
        );
        assert_eq!(
            hex::encode(chain_code),
            "90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb"
        );
    }

    #[test]
    fn test_slip0010_vector_first_child() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let key = Ed25519Deriver::derive(&seed, "m/0'").unwrap();
        assert_eq!(
            hex::encode(&*key),
            "68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3"
        );
    }
}
