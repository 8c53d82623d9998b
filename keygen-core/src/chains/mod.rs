// keygen-core/src/chains/mod.rs

//! Chain selection and per-chain key/address encoders.

pub mod bitcoin;
pub mod evm;
pub mod solana;

use crate::crypto::key_deriver::CurveType;
use crate::crypto::paths::coin_type;
use crate::error::{CryptoError, WalletError, WalletResult};
use k256::{elliptic_curve::sec1::ToEncodedPoint, SecretKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A chain the engine can derive wallets for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Solana,
    Ethereum,
    Bitcoin,
}

impl Chain {
    /// Expansion order of [`ChainSelector::All`]
    pub const ALL: [Chain; 3] = [Chain::Solana, Chain::Ethereum, Chain::Bitcoin];

    pub const fn curve(self) -> CurveType {
        match self {
            Chain::Solana => CurveType::Ed25519,
            Chain::Ethereum | Chain::Bitcoin => CurveType::Secp256k1,
        }
    }

    pub const fn coin_type(self) -> u32 {
        match self {
            Chain::Solana => coin_type::SOLANA,
            Chain::Ethereum => coin_type::ETHEREUM,
            Chain::Bitcoin => coin_type::BITCOIN,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Chain::Solana => "solana",
            Chain::Ethereum => "ethereum",
            Chain::Bitcoin => "bitcoin",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chain {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solana" => Ok(Chain::Solana),
            "ethereum" => Ok(Chain::Ethereum),
            "bitcoin" => Ok(Chain::Bitcoin),
            other => Err(WalletError::Validation(format!("unknown chain '{}'", other))),
        }
    }
}

/// Chain field of a derivation request: one chain or all of them.
///
/// Serialized as the same plain string `FromStr` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChainSelector {
    One(Chain),
    All,
}

impl ChainSelector {
    pub fn chains(self) -> Vec<Chain> {
        match self {
            ChainSelector::One(chain) => vec![chain],
            ChainSelector::All => Chain::ALL.to_vec(),
        }
    }
}

impl From<Chain> for ChainSelector {
    fn from(chain: Chain) -> Self {
        ChainSelector::One(chain)
    }
}

impl fmt::Display for ChainSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainSelector::One(chain) => chain.fmt(f),
            ChainSelector::All => f.write_str("all"),
        }
    }
}

impl FromStr for ChainSelector {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(ChainSelector::All);
        }
        s.parse().map(ChainSelector::One)
    }
}

impl TryFrom<String> for ChainSelector {
    type Error = WalletError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ChainSelector> for String {
    fn from(selector: ChainSelector) -> Self {
        selector.to_string()
    }
}

/// SEC1 public key for a secp256k1 scalar, compressed (33B) or not (65B).
///
/// `priv_key` must be exactly 32 bytes.
pub(crate) fn secp256k1_public_key(priv_key: &[u8], compressed: bool) -> WalletResult<Vec<u8>> {
    let bytes: &[u8; 32] = priv_key.try_into().map_err(|_| {
        WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
            "secp256k1 private key must be 32 bytes, got {}",
            priv_key.len()
        )))
    })?;
    let secret_key = SecretKey::from_bytes(bytes.into()).map_err(|e| {
        WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
            "Invalid secp256k1 private key: {}",
            e
        )))
    })?;
    let encoded = secret_key.public_key().to_encoded_point(compressed);
    Ok(encoded.as_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_parse_and_display() {
        for chain in Chain::ALL {
            assert_eq!(chain.to_string().parse::<Chain>().unwrap(), chain);
        }
        assert_eq!(" Ethereum ".parse::<Chain>().unwrap(), Chain::Ethereum);
        assert!("dogecoin".parse::<Chain>().is_err());
    }

    #[test]
    fn test_selector_parse() {
        assert_eq!("all".parse::<ChainSelector>().unwrap(), ChainSelector::All);
        assert_eq!(
            "solana".parse::<ChainSelector>().unwrap(),
            ChainSelector::One(Chain::Solana)
        );
        assert!("".parse::<ChainSelector>().is_err());
    }

    #[test]
    fn test_selector_expansion_order() {
        assert_eq!(
            ChainSelector::All.chains(),
            vec![Chain::Solana, Chain::Ethereum, Chain::Bitcoin]
        );
        assert_eq!(ChainSelector::One(Chain::Bitcoin).chains(), vec![Chain::Bitcoin]);
    }

    #[test]
    fn test_chain_metadata() {
        assert_eq!(Chain::Solana.curve(), CurveType::Ed25519);
        assert_eq!(Chain::Ethereum.curve(), CurveType::Secp256k1);
        assert_eq!(Chain::Ethereum.coin_type(), 60);
        assert_eq!(Chain::Bitcoin.coin_type(), 0);
        assert_eq!(Chain::Solana.coin_type(), 501);
    }

    #[test]
    fn test_selector_serde() {
        let all: ChainSelector = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(all, ChainSelector::All);
        let one: ChainSelector = serde_json::from_str("\"bitcoin\"").unwrap();
        assert_eq!(one, ChainSelector::One(Chain::Bitcoin));
        assert_eq!(serde_json::to_string(&one).unwrap(), "\"bitcoin\"");
        assert!(serde_json::from_str::<ChainSelector>("\"tron\"").is_err());
    }

    #[test]
    fn test_public_key_lengths() {
        let key = hex::decode("ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80")
            .unwrap();
        assert_eq!(secp256k1_public_key(&key, true).unwrap().len(), 33);
        assert_eq!(secp256k1_public_key(&key, false).unwrap()[0], 0x04);
        assert!(secp256k1_public_key(&[0u8; 32], true).is_err());
    }

    #[test]
    fn test_public_key_rejects_short_keys() {
        for len in [0usize, 24, 31, 33] {
            let key = vec![1u8; len];
            assert!(matches!(
                secp256k1_public_key(&key, true),
                Err(WalletError::Crypto(CryptoError::InvalidKeyFormat(_)))
            ));
        }
    }
}
