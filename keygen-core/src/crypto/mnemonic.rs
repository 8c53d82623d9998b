// keygen-core/src/crypto/mnemonic.rs
//
// Mnemonic Module - BIP-39 phrase generation, validation and seed conversion
// Standards: BIP-39 (Mnemonic), PBKDF2-HMAC-SHA512 (Seed Derivation)

use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::Mnemonic;
use rand::{rngs::OsRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Supported phrase lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    #[default]
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }

    pub fn from_words(count: usize) -> Option<Self> {
        match count {
            12 => Some(WordCount::Twelve),
            15 => Some(WordCount::Fifteen),
            18 => Some(WordCount::Eighteen),
            21 => Some(WordCount::TwentyOne),
            24 => Some(WordCount::TwentyFour),
            _ => None,
        }
    }
}

/// BIP-39 mnemonic, the single root secret every derived key traces back to.
///
/// # Security
/// - **ZeroizeOnDrop**: phrase bytes are overwritten when the value is dropped
/// - **CSPRNG**: fresh phrases draw entropy from `OsRng`
/// - **No Debug Leak**: `Debug` prints the word count only
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
    word_count: usize,
}

// Custom Debug - never prints the mnemonic phrase
impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Fresh 12-word phrase (128-bit entropy)
    pub fn generate() -> WalletResult<Self> {
        Self::with_word_count(WordCount::Twelve)
    }

    pub fn with_word_count(word_count: WordCount) -> WalletResult<Self> {
        let entropy_size = word_count.entropy_bytes();

        // Stack-allocated entropy buffer (max 32 bytes)
        let mut entropy = [0u8; 32];
        OsRng.fill_bytes(&mut entropy[..entropy_size]);

        let mnemonic = Mnemonic::from_entropy(&entropy[..entropy_size])
            .map_err(|e| MnemonicError::Bip39Error(e.to_string()));

        // Zeroize entropy right after use
        entropy.zeroize();

        Ok(Self {
            phrase: mnemonic?.to_string(),
            word_count: word_count as usize,
        })
    }

    /// Parse a user-supplied phrase.
    ///
    /// Whitespace is normalized to single spaces before the word count,
    /// wordlist and checksum are checked.
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        let normalized = phrase.split_whitespace().collect::<Vec<_>>();
        let count = normalized.len();

        if WordCount::from_words(count).is_none() {
            return Err(WalletError::Mnemonic(MnemonicError::InvalidWordCount(
                count,
            )));
        }

        let normalized_phrase = normalized.join(" ");
        Mnemonic::parse(&normalized_phrase).map_err(classify_bip39_error)?;

        Ok(Self {
            phrase: normalized_phrase,
            word_count: count,
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// The normalized phrase. Never log this.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }

    pub fn strength_bits(&self) -> usize {
        WordCount::from_words(self.word_count)
            .map(|wc| wc.entropy_bytes() * 8)
            .unwrap_or(0)
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// 64-byte BIP-39 seed (PBKDF2-HMAC-SHA512, 2048 rounds).
    ///
    /// `None` and `Some("")` produce the same seed.
    pub fn to_seed(&self, passphrase: Option<&str>) -> WalletResult<Zeroizing<[u8; 64]>> {
        let mnemonic = Mnemonic::parse(&self.phrase).map_err(classify_bip39_error)?;
        Ok(Zeroizing::new(mnemonic.to_seed(passphrase.unwrap_or(""))))
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    #[inline]
    pub fn validate(phrase: &str) -> bool {
        Self::from_phrase(phrase).is_ok()
    }

    /// Check a single word against the English wordlist
    pub fn is_valid_word(word: &str) -> bool {
        let word = word.trim();
        !word.is_empty() && bip39::Language::English.find_word(word).is_some()
    }
}

fn classify_bip39_error(e: bip39::Error) -> WalletError {
    let err = match e {
        bip39::Error::UnknownWord(idx) => MnemonicError::UnknownWord(format!("#{}", idx)),
        bip39::Error::BadWordCount(n) => MnemonicError::InvalidWordCount(n),
        bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
        other => MnemonicError::Bip39Error(other.to_string()),
    };
    WalletError::Mnemonic(err)
}

// =============================================================================
// UNIT TESTS
// =============================================================================
