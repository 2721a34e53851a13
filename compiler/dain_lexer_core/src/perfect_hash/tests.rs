use super::*;
use pretty_assertions::assert_eq;

#[test]
fn fnv1a64_known_vectors() {
    assert_eq!(fnv1a64(b""), 0xcbf2_9ce4_8422_2325);
    assert_eq!(fnv1a64(b"a"), 0xaf63_dc4c_8601_ec8c);
    assert_eq!(fnv1a64(b"foobar"), 0x8594_4171_f739_67e8);
}

#[test]
fn every_reserved_key_classifies_to_its_kind() {
    let table = classifier();
    for &(key, kind) in RESERVED {
        assert_eq!(table.classify(key.as_bytes()), kind, "key {key:?}");
    }
    assert_eq!(table.len(), RESERVED.len());
}

#[test]
fn global_classifier_is_built_once() {
    assert!(std::ptr::eq(classifier(), classifier()));
}

#[test]
fn table_size_is_power_of_two_above_key_count() {
    let table = classifier();
    assert!(table.table_size().is_power_of_two());
    assert!(table.table_size() >= 2 * table.len());
    assert!(table.seed() >= 1);
}

#[test]
fn near_misses_are_identifiers() {
    let table = classifier();
    for candidate in [
        "iff", "If", "els", "returns", "i128", "u", "publics", "&", "|", "=>", "..", "::", "",
    ] {
        assert_eq!(
            table.classify(candidate.as_bytes()),
            TokenKind::Identifier,
            "{candidate:?}"
        );
    }
}

#[test]
fn lookup_distinguishes_missing_from_identifier_sentinel() {
    let table = classifier();
    assert_eq!(table.lookup(b"while"), Some(TokenKind::While));
    assert_eq!(table.lookup(b"whilst"), None);
}

#[test]
fn multi_byte_operators() {
    let table = classifier();
    assert_eq!(table.classify(b">="), TokenKind::GreaterThanOrEqual);
    assert_eq!(table.classify(b":="), TokenKind::Declaration);
    assert_eq!(table.classify(b"..."), TokenKind::Dots);
    assert_eq!(table.classify(b"->"), TokenKind::Arrow);
}

// === Build errors ===

#[test]
fn empty_key_set_is_rejected() {
    assert_eq!(
        PerfectHashTable::build(&[]).map(|t| t.len()),
        Err(ClassifierBuildError::EmptyKeySet)
    );
}

#[test]
fn duplicate_key_is_rejected() {
    let keys = [("a", TokenKind::Plus), ("b", TokenKind::Minus), ("a", TokenKind::Not)];
    assert_eq!(
        PerfectHashTable::build(&keys).map(|t| t.len()),
        Err(ClassifierBuildError::DuplicateKey { key: "a" })
    );
}

#[test]
fn non_power_of_two_table_is_rejected() {
    let keys = [("a", TokenKind::Plus), ("b", TokenKind::Minus)];
    let config = ClassifierConfig {
        table_size: Some(6),
        ..ClassifierConfig::default()
    };
    assert_eq!(
        PerfectHashTable::build_with(&keys, config).map(|t| t.len()),
        Err(ClassifierBuildError::InvalidTableSize {
            table_size: 6,
            keys: 2
        })
    );
}

#[test]
fn table_smaller_than_key_count_is_rejected() {
    let keys = [("a", TokenKind::Plus), ("b", TokenKind::Minus), ("c", TokenKind::Not)];
    let config = ClassifierConfig {
        table_size: Some(2),
        ..ClassifierConfig::default()
    };
    assert!(matches!(
        PerfectHashTable::build_with(&keys, config),
        Err(ClassifierBuildError::InvalidTableSize { .. })
    ));
}

#[test]
fn exhausted_seed_budget_reports_failure() {
    // Zero attempts can never succeed.
    let config = ClassifierConfig {
        table_size: None,
        max_seed_attempts: 0,
    };
    let err = PerfectHashTable::build_with(RESERVED, config).map(|t| t.len());
    assert_eq!(
        err,
        Err(ClassifierBuildError::NoSeedFound {
            keys: RESERVED.len(),
            table_size: 4096,
            attempts: 0
        })
    );
}

#[test]
fn explicit_table_size_is_honoured() {
    let keys = [("x", TokenKind::Plus), ("y", TokenKind::Minus), ("z", TokenKind::Not)];
    let config = ClassifierConfig {
        table_size: Some(64),
        ..ClassifierConfig::default()
    };
    let table = PerfectHashTable::build_with(&keys, config).unwrap();
    assert_eq!(table.table_size(), 64);
    assert_eq!(table.classify(b"y"), TokenKind::Minus);
    assert_eq!(table.classify(b"w"), TokenKind::Identifier);
}

#[test]
fn error_messages_name_the_problem() {
    let err = ClassifierBuildError::NoSeedFound {
        keys: 3,
        table_size: 4,
        attempts: 10,
    };
    assert_eq!(
        err.to_string(),
        "no perfect seed for 3 keys in 4 slots after 10 attempts"
    );
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn non_keys_never_match(candidate in "[a-z_!&|<>=:+*/%.-]{0,12}") {
            let table = classifier();
            let expected = RESERVED
                .iter()
                .find(|(key, _)| *key == candidate)
                .map_or(TokenKind::Identifier, |(_, kind)| *kind);
            prop_assert_eq!(table.classify(candidate.as_bytes()), expected);
        }

        #[test]
        fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..16)) {
            let kind = classifier().classify(&bytes);
            if kind != TokenKind::Identifier {
                prop_assert!(RESERVED.iter().any(|(key, k)| key.as_bytes() == bytes && *k == kind));
            }
        }
    }
}
