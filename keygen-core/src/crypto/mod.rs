// keygen-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Mnemonic**: BIP-39 phrases and seeds via [`WalletMnemonic`].
//! - **Key Derivation**: secp256k1 (Bitcoin/Ethereum) and Ed25519 (Solana) via [`KeyDeriver`].
//! - **Derivation Paths**: SLIP-44 coin types and per-chain templates via [`DerivationPaths`] and [`PathTable`].
//! - **Encodings**: raw / base58 / hex key material via [`PrivateKeyEncodings`].

pub mod encoding;
pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

pub use encoding::{PrivateKeyEncodings, SecretKeyEncodings};
pub use key_deriver::{CurveType, DerivedKey, KeyDeriver};
pub use mnemonic::{WalletMnemonic, WordCount};
pub use paths::{DerivationPaths, PathTable, PathTemplate, SolanaPathPolicy};
