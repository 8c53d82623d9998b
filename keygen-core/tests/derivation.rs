// keygen-core/tests/derivation.rs
//
// End-to-end derivation through the public API

use keygen_core::api;
use keygen_core::{
    Chain, ChainSelector, DerivationRequest, EngineConfig, SolanaPathPolicy, WalletEngine,
    WalletError, WalletSession,
};

const TEST_MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

#[test]
fn test_golden_vectors_all_chains() {
    let outcome = api::derive_batch(TEST_MNEMONIC, ChainSelector::All, 1).unwrap();
    assert!(outcome.is_complete());

    let addresses: Vec<_> = outcome.wallets.iter().map(|w| w.address().to_string()).collect();
    assert_eq!(
        addresses,
        vec![
            "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk",
            "0x9858EfFD232B4033E47d90003D41EC34EcaEda94",
            "1LqBGSKuX5yYUonjxT5qGfpUsXKYYWeabA",
        ]
    );
}

#[test]
fn test_fresh_mnemonic_derives_everywhere() {
    let phrase = api::create_mnemonic().unwrap();
    assert!(api::validate_mnemonic(&phrase));

    let outcome = api::derive_batch(&phrase, ChainSelector::All, 3).unwrap();
    assert_eq!(outcome.wallets.len(), 9);
    for chain in Chain::ALL {
        assert_eq!(outcome.wallets_for(chain).count(), 3);
    }
}

#[test]
fn test_whitespace_is_normalized() {
    let messy = format!("  {}\n", TEST_MNEMONIC.replace(' ', "   "));
    let a = api::derive_wallet(&messy, Chain::Ethereum, 0).unwrap();
    let b = api::derive_wallet(TEST_MNEMONIC, Chain::Ethereum, 0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_invalid_inputs() {
    assert!(!api::validate_mnemonic("abandon abandon abandon"));
    assert!(matches!(
        api::derive_batch(TEST_MNEMONIC, ChainSelector::All, 0),
        Err(WalletError::Validation(_))
    ));

    let outcome = api::derive_batch("one two three", Chain::Bitcoin.into(), 2).unwrap();
    assert!(outcome.wallets.is_empty());
    assert_eq!(outcome.errors.len(), 2);
    assert!(matches!(outcome.errors[0].cause, WalletError::Mnemonic(_)));
}

#[test]
fn test_config_from_json_drives_engine() {
    let config = EngineConfig::from_json(
        r#"{ "bitcoin_network": "testnet", "passphrase": "TREZOR" }"#,
    )
    .unwrap();
    let engine = WalletEngine::new(config).unwrap();
    let btc = engine.derive_wallet(TEST_MNEMONIC, Chain::Bitcoin, 0).unwrap();
    assert_ne!(btc.address(), "1LqBGSKuX5yYUonjxT5qGfpUsXKYYWeabA");
    assert!(btc.address().starts_with('m') || btc.address().starts_with('n'));
}

#[test]
fn test_fixed_solana_policy() {
    let engine = WalletEngine::new(EngineConfig::with_solana_policy(SolanaPathPolicy::Fixed)).unwrap();
    let request = DerivationRequest::new(Chain::Solana, 3).unwrap();
    let outcome = engine.derive_batch(TEST_MNEMONIC, &request);
    assert!(outcome
        .wallets
        .iter()
        .all(|w| w.address() == "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk"));
}

#[test]
fn test_session_flow() {
    let mut session = WalletSession::with_mnemonic(TEST_MNEMONIC).unwrap();
    let report = session.create_wallets(&DerivationRequest::new(ChainSelector::All, 2).unwrap());
    assert_eq!(report.created, 6);
    assert!(report.failed_chains().is_empty());

    let json = serde_json::to_string(session.wallets()).unwrap();
    assert!(json.contains("0x9858EfFD232B4033E47d90003D41EC34EcaEda94"));
}
