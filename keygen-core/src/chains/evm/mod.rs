// keygen-core/src/chains/evm/mod.rs

//! Ethereum Support
//!
//! - **Address Derivation**: EIP-55 checksummed address generation via [`EvmAddress`].

pub mod address;

pub use address::EvmAddress;
