// keygen-core/src/engine/mod.rs

//! Derivation Engine
//!
//! Pure function of `(mnemonic, chain, index)` → [`DerivedWallet`]. Each
//! (chain, index) unit either yields a complete wallet or a
//! [`DerivationError`]; batches collect both and never abort early.
//!
//! ```text
//! mnemonic ──BIP-39──▶ seed (64B) ──path table──▶ path
//!                                   │
//!             ┌─────────────────────┴─────────────────────┐
//!             ▼                                           ▼
//!   SLIP-0010 ed25519 ─▶ SolanaKeypair        BIP-32 secp256k1 ─▶ EIP-55 / P2PKH
//! ```

pub mod batch;
pub mod session;
pub mod wallet;

pub use batch::{BatchOutcome, DerivationRequest};
pub use session::{BatchReport, WalletSession};
pub use wallet::{DerivedWallet, Secp256k1Wallet, SolanaWallet};

use crate::chains::bitcoin::BitcoinAddress;
use crate::chains::evm::EvmAddress;
use crate::chains::solana::SolanaKeypair;
use crate::chains::{secp256k1_public_key, Chain};
use crate::config::EngineConfig;
use crate::crypto::encoding::{PrivateKeyEncodings, SecretKeyEncodings};
use crate::crypto::key_deriver::KeyDeriver;
use crate::crypto::mnemonic::WalletMnemonic;
use crate::error::{DerivationError, WalletError, WalletResult};
use tracing::{debug, warn};
use zeroize::Zeroizing;

/// Stateless deriver bound to one [`EngineConfig`]
#[derive(Debug, Clone, Default)]
pub struct WalletEngine {
    config: EngineConfig,
}

impl WalletEngine {
    pub fn new(config: EngineConfig) -> WalletResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Derive one wallet.
    ///
    /// Any failing step (seed conversion, path parsing, key construction)
    /// becomes a `DerivationError` for this `(chain, index)`.
    pub fn derive_wallet(
        &self,
        mnemonic: &str,
        chain: Chain,
        index: u32,
    ) -> Result<DerivedWallet, DerivationError> {
        let seed = self
            .seed(mnemonic)
            .map_err(|cause| Self::failed(chain, index, cause))?;
        self.derive_unit(&seed[..], chain, index)
    }

    /// Derive every unit of `request`.
    ///
    /// The seed is computed once; if that fails, every unit reports the
    /// failure under its own chain and index.
    pub fn derive_batch(&self, mnemonic: &str, request: &DerivationRequest) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        match self.seed(mnemonic) {
            Ok(seed) => {
                for (index, chain) in request.units() {
                    outcome.record(self.derive_unit(&seed[..], chain, index));
                }
            }
            Err(cause) => {
                for (index, chain) in request.units() {
                    outcome.record(Err(Self::failed(chain, index, cause.clone())));
                }
            }
        }

        debug!(
            selector = %request.chain(),
            count = request.count(),
            derived = outcome.wallets.len(),
            failed = outcome.errors.len(),
            "Batch derivation finished"
        );
        outcome
    }

    /// Derive from an already-computed BIP-39 seed
    pub fn derive_from_seed(
        &self,
        seed: &[u8],
        chain: Chain,
        index: u32,
    ) -> WalletResult<DerivedWallet> {
        let path = self.config.paths.path_for(chain, index);
        let key = KeyDeriver::derive(seed, &path, chain.curve())?;

        let wallet = match chain {
            Chain::Solana => {
                let keypair = SolanaKeypair::from_seed(&key.private_key);
                let public_key_bytes = keypair.pubkey_bytes();
                DerivedWallet::Solana(SolanaWallet {
                    index,
                    path,
                    public_key: keypair.pubkey_base58(),
                    public_key_bytes,
                    private_key: PrivateKeyEncodings::from_bytes(&keypair.seed_bytes()),
                    secret_key: SecretKeyEncodings::from_bytes(&keypair.secret_key_bytes()),
                })
            }
            Chain::Ethereum | Chain::Bitcoin => {
                let public_key = secp256k1_public_key(&key.private_key[..], true)?;
                let address = match chain {
                    Chain::Bitcoin => {
                        BitcoinAddress::from_public_key(&public_key, self.config.bitcoin_network)
                    }
                    _ => EvmAddress::derive(&key.private_key[..])?,
                };
                DerivedWallet::Secp256k1(Secp256k1Wallet {
                    chain,
                    index,
                    path,
                    public_key: format!("0x{}", hex::encode(&public_key)),
                    address,
                    private_key: PrivateKeyEncodings::from_bytes(&key.private_key),
                })
            }
        };

        Ok(wallet)
    }

    fn seed(&self, mnemonic: &str) -> WalletResult<Zeroizing<[u8; 64]>> {
        WalletMnemonic::from_phrase(mnemonic)?.to_seed(self.config.passphrase())
    }

    fn derive_unit(
        &self,
        seed: &[u8],
        chain: Chain,
        index: u32,
    ) -> Result<DerivedWallet, DerivationError> {
        match self.derive_from_seed(seed, chain, index) {
            Ok(wallet) => {
                debug!(%chain, index, path = wallet.path(), "Derived wallet");
                Ok(wallet)
            }
            Err(cause) => Err(Self::failed(chain, index, cause)),
        }
    }

    fn failed(chain: Chain, index: u32, cause: WalletError) -> DerivationError {
        warn!(%chain, index, error = %cause, "Wallet derivation failed");
        DerivationError::new(chain, index, cause)
    }
}
