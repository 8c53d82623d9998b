// keygen-core/src/chains/bitcoin/address.rs
//
// Bitcoin P2PKH Address Module
// Hash160 = RIPEMD-160(SHA-256(pubkey)), Base58Check(version || hash160)

use crate::chains::secp256k1_public_key;
use crate::error::{CryptoError, WalletError, WalletResult};
use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Network, selects the P2PKH version byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitcoinNetwork {
    /// version 0x00, addresses start with '1'
    #[default]
    Mainnet,
    /// version 0x6f, addresses start with 'm' or 'n'
    Testnet,
}

impl BitcoinNetwork {
    pub const fn p2pkh_version(self) -> u8 {
        match self {
            BitcoinNetwork::Mainnet => 0x00,
            BitcoinNetwork::Testnet => 0x6f,
        }
    }

    fn from_p2pkh_version(version: u8) -> Option<Self> {
        match version {
            0x00 => Some(BitcoinNetwork::Mainnet),
            0x6f => Some(BitcoinNetwork::Testnet),
            _ => None,
        }
    }
}

/// Legacy P2PKH address generator
///
/// # Flow:  Private Key (32B) → compressed Public Key (33B) → Hash160 (20B) → Base58Check
pub struct BitcoinAddress;

impl BitcoinAddress {
    /// RIPEMD-160(SHA-256(data))
    pub fn hash160(data: &[u8]) -> [u8; 20] {
        let sha = Sha256::digest(data);
        let rip = Ripemd160::digest(sha);
        let mut out = [0u8; 20];
        out.copy_from_slice(&rip);
        out
    }

    /// P2PKH address for a SEC1 public key (compressed or uncompressed)
    pub fn from_public_key(pub_key: &[u8], network: BitcoinNetwork) -> String {
        let mut payload = Vec::with_capacity(21);
        payload.push(network.p2pkh_version());
        payload.extend_from_slice(&Self::hash160(pub_key));
        bs58::encode(payload).with_check().into_string()
    }

    /// P2PKH address of the compressed public key for `priv_key`
    pub fn derive(priv_key: &[u8], network: BitcoinNetwork) -> WalletResult<String> {
        let pub_key = secp256k1_public_key(priv_key, true)?;
        Ok(Self::from_public_key(&pub_key, network))
    }

    /// Decode and checksum-verify an address, returning its network and hash160
    pub fn parse(address: &str) -> WalletResult<(BitcoinNetwork, [u8; 20])> {
        let decoded = bs58::decode(address)
            .with_check(None)
            .into_vec()
            .map_err(|e| {
                WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                    "Invalid Base58Check address '{}': {}",
                    address, e
                )))
            })?;

        if decoded.len() != 21 {
            return Err(WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Invalid P2PKH payload length {}",
                decoded.len()
            ))));
        }

        let network = BitcoinNetwork::from_p2pkh_version(decoded[0]).ok_or_else(|| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Unsupported address version 0x{:02x}",
                decoded[0]
            )))
        })?;

        let mut hash = [0u8; 20];
        hash.copy_from_slice(&decoded[1..]);
        Ok((network, hash))
    }

    #[inline]
    pub fn is_valid(address: &str) -> bool {
        Self::parse(address).is_ok()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // secret exponent 1
    const KEY_ONE: &str = "0000000000000000000000000000000000000000000000000000000000000001";

    #[test]
    fn test_key_one_compressed() {
        let priv_key = hex::decode(KEY_ONE).unwrap();
        let address = BitcoinAddress::derive(&priv_key, BitcoinNetwork::Mainnet).unwrap();
        assert_eq!(address, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
    }

    #[test]
    fn test_key_one_uncompressed() {
        let priv_key = hex::decode(KEY_ONE).unwrap();
        let pub_key = secp256k1_public_key(&priv_key, false).unwrap();
        let address = BitcoinAddress::from_public_key(&pub_key, BitcoinNetwork::Mainnet);
        assert_eq!(address, "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm");
    }

    #[test]
    fn test_testnet_prefix() {
        let priv_key = hex::decode(KEY_ONE).unwrap();
        let address = BitcoinAddress::derive(&priv_key, BitcoinNetwork::Testnet).unwrap();
        assert!(address.starts_with('m') || address.starts_with('n'));
        let (network, _) = BitcoinAddress::parse(&address).unwrap();
        assert_eq!(network, BitcoinNetwork::Testnet);
    }

    #[test]
    fn test_parse_roundtrip_hash() {
        let priv_key = hex::decode(KEY_ONE).unwrap();
        let pub_key = secp256k1_public_key(&priv_key, true).unwrap();
        let address = BitcoinAddress::from_public_key(&pub_key, BitcoinNetwork::Mainnet);
        let (network, hash) = BitcoinAddress::parse(&address).unwrap();
        assert_eq!(network, BitcoinNetwork::Mainnet);
        assert_eq!(hash, BitcoinAddress::hash160(&pub_key));
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(!BitcoinAddress::is_valid(""));
        assert!(!BitcoinAddress::is_valid("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMX"));
        assert!(!BitcoinAddress::is_valid("0xdead"));
    }

    #[test]
    fn test_invalid_private_key() {
        assert!(BitcoinAddress::derive(&[0u8; 32], BitcoinNetwork::Mainnet).is_err());
        assert!(BitcoinAddress::derive(&[1u8; 31], BitcoinNetwork::Mainnet).is_err());
        assert!(BitcoinAddress::derive(&[1u8; 24], BitcoinNetwork::Mainnet).is_err());
    }
}
