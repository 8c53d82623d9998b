// keygen-core/src/engine/wallet.rs
//
// Derived wallet records, one variant per curve family

use crate::chains::Chain;
use crate::crypto::encoding::{PrivateKeyEncodings, SecretKeyEncodings};
use serde::Serialize;

/// Ed25519 wallet (Solana)
///
/// `secret_key` is always `private_key.raw ‖ public_key_bytes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolanaWallet {
    pub index: u32,
    pub path: String,
    /// base58, doubles as the Solana address
    pub public_key: String,
    #[serde(skip)]
    pub public_key_bytes: [u8; 32],
    pub private_key: PrivateKeyEncodings,
    pub secret_key: SecretKeyEncodings,
}

/// secp256k1 wallet (Ethereum, Bitcoin)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Secp256k1Wallet {
    pub chain: Chain,
    pub index: u32,
    pub path: String,
    /// SEC1 compressed, `0x`-prefixed hex
    pub public_key: String,
    /// Ethereum: EIP-55 checksummed. Bitcoin: P2PKH Base58Check.
    pub address: String,
    pub private_key: PrivateKeyEncodings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "curve", rename_all = "lowercase")]
pub enum DerivedWallet {
    #[serde(rename = "ed25519")]
    Solana(SolanaWallet),
    Secp256k1(Secp256k1Wallet),
}

impl DerivedWallet {
    pub fn chain(&self) -> Chain {
        match self {
            DerivedWallet::Solana(_) => Chain::Solana,
            DerivedWallet::Secp256k1(w) => w.chain,
        }
    }

    pub fn index(&self) -> u32 {
        match self {
            DerivedWallet::Solana(w) => w.index,
            DerivedWallet::Secp256k1(w) => w.index,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            DerivedWallet::Solana(w) => &w.path,
            DerivedWallet::Secp256k1(w) => &w.path,
        }
    }

    pub fn public_key(&self) -> &str {
        match self {
            DerivedWallet::Solana(w) => &w.public_key,
            DerivedWallet::Secp256k1(w) => &w.public_key,
        }
    }

    /// Receive address: the base58 public key on Solana
    pub fn address(&self) -> &str {
        match self {
            DerivedWallet::Solana(w) => &w.public_key,
            DerivedWallet::Secp256k1(w) => &w.address,
        }
    }

    pub fn private_key(&self) -> &PrivateKeyEncodings {
        match self {
            DerivedWallet::Solana(w) => &w.private_key,
            DerivedWallet::Secp256k1(w) => &w.private_key,
        }
    }

    pub fn as_solana(&self) -> Option<&SolanaWallet> {
        match self {
            DerivedWallet::Solana(w) => Some(w),
            DerivedWallet::Secp256k1(_) => None,
        }
    }

    pub fn as_secp256k1(&self) -> Option<&Secp256k1Wallet> {
        match self {
            DerivedWallet::Secp256k1(w) => Some(w),
            DerivedWallet::Solana(_) => None,
        }
    }
}
