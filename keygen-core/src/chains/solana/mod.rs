// keygen-core/src/chains/solana/mod.rs

//! Solana Support
//!
//! - **Keypair**: Ed25519 keypair from a SLIP-0010 derived seed via [`SolanaKeypair`].

pub mod keypair;

pub use keypair::SolanaKeypair;
