use super::*;
use pretty_assertions::assert_eq;
use rustc_hash::FxHashSet;

#[test]
fn all_is_indexed_by_discriminant() {
    for (index, kind) in TokenKind::ALL.iter().enumerate() {
        assert_eq!(*kind as usize, index, "{kind:?} out of place");
    }
}

#[test]
fn from_u8_round_trips_every_kind() {
    for kind in TokenKind::ALL {
        assert_eq!(TokenKind::from_u8(kind as u8), Some(kind));
    }
    assert_eq!(TokenKind::from_u8(TokenKind::COUNT as u8), None);
    assert_eq!(TokenKind::from_u8(u8::MAX), None);
}

#[test]
fn names_are_unique() {
    let mut seen = FxHashSet::default();
    for kind in TokenKind::ALL {
        assert!(seen.insert(kind.name()), "duplicate name {}", kind.name());
    }
}

#[test]
fn display_uses_name() {
    assert_eq!(
        TokenKind::GreaterThanOrEqual.to_string(),
        "GREATER_THAN_OR_EQUAL"
    );
    assert_eq!(TokenKind::Mutable.to_string(), "MUTABLE");
}

#[test]
fn categories_are_disjoint_except_sentinels() {
    for kind in TokenKind::ALL {
        let count = [
            kind.is_literal(),
            kind.is_operator(),
            kind.is_delimiter(),
            kind.is_keyword(),
        ]
        .iter()
        .filter(|b| **b)
        .count();
        let expected = usize::from(!matches!(kind, TokenKind::End | TokenKind::Unknown));
        assert_eq!(count, expected, "{kind:?}");
    }
}

#[test]
fn category_spot_checks() {
    assert!(TokenKind::Binary.is_literal());
    assert!(TokenKind::Arrow.is_operator());
    assert!(TokenKind::Dots.is_delimiter());
    assert!(TokenKind::Implement.is_keyword());
    assert!(TokenKind::Modifier.is_keyword());
    assert!(!TokenKind::Identifier.is_keyword());
}

#[test]
fn reserved_keys_are_unique() {
    let mut seen = FxHashSet::default();
    for (key, _) in RESERVED {
        assert!(seen.insert(*key), "duplicate reserved key {key:?}");
    }
}

#[test]
fn reserved_keys_never_map_to_sentinels_or_literals() {
    for (key, kind) in RESERVED {
        assert!(
            !kind.is_literal() && *kind != TokenKind::End && *kind != TokenKind::Unknown,
            "{key:?} maps to {kind:?}"
        );
    }
}

#[test]
fn operator_keys_fit_max_operator_len() {
    let longest = RESERVED
        .iter()
        .filter(|(key, _)| !key.as_bytes()[0].is_ascii_alphabetic())
        .map(|(key, _)| key.len())
        .max();
    assert_eq!(longest, Some(MAX_OPERATOR_LEN));
}

#[test]
fn every_operator_and_delimiter_kind_has_a_key() {
    for kind in TokenKind::ALL {
        if kind.is_operator() || kind.is_delimiter() {
            assert!(
                RESERVED.iter().any(|(_, k)| *k == kind),
                "{kind:?} has no reserved key"
            );
        }
    }
}

#[test]
fn ends_value_covers_operands() {
    assert!(TokenKind::Integer.ends_value());
    assert!(TokenKind::Identifier.ends_value());
    assert!(TokenKind::RBracket.ends_value());
    assert!(!TokenKind::String.ends_value());
    assert!(!TokenKind::Dot.ends_value());
    assert!(!TokenKind::Return.ends_value());
}
