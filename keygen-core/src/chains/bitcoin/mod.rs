// keygen-core/src/chains/bitcoin/mod.rs

//! Bitcoin Support
//!
//! - **Address Derivation**: legacy P2PKH (Base58Check) addresses via [`BitcoinAddress`].

pub mod address;

pub use address::{BitcoinAddress, BitcoinNetwork};
