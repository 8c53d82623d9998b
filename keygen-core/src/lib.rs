// keygen-core/src/lib.rs

//! Multi-chain HD key derivation.
//!
//! One BIP-39 mnemonic in, per-chain wallets out:
//!
//! - **Solana**: SLIP-0010 ed25519 at `m/44'/501'/{index}'/0'`
//! - **Ethereum**: BIP-32 secp256k1 at `m/44'/60'/0'/0/{index}`, EIP-55 address
//! - **Bitcoin**: BIP-32 secp256k1 at `m/44'/0'/0'/0/{index}`, P2PKH address
//!
//! ```no_run
//! use keygen_core::{ChainSelector, DerivationRequest, WalletEngine};
//!
//! let phrase = keygen_core::api::create_mnemonic()?;
//! let request = DerivationRequest::new(ChainSelector::All, 2)?;
//! let outcome = WalletEngine::default().derive_batch(&phrase, &request);
//! for wallet in &outcome.wallets {
//!     println!("{} #{}: {}", wallet.chain(), wallet.index(), wallet.address());
//! }
//! # Ok::<(), keygen_core::WalletError>(())
//! ```
//!
//! Nothing is persisted, signed or sent anywhere.

pub mod api;
pub mod chains;
pub mod config;
pub mod crypto;
pub mod engine;
pub mod error;

pub use chains::{Chain, ChainSelector};
pub use config::EngineConfig;
pub use crypto::{PathTable, PathTemplate, SolanaPathPolicy, WalletMnemonic, WordCount};
pub use engine::{
    BatchOutcome, BatchReport, DerivationRequest, DerivedWallet, Secp256k1Wallet, SolanaWallet,
    WalletEngine, WalletSession,
};
pub use error::{CryptoError, DerivationError, MnemonicError, WalletError, WalletResult};
