//! Property tests over the public validation API.

use keyward::key::alphabet::{symbol_for, symbol_value};
use keyward::{normalize, KeyValidationEngine, ValidationVerdict, CODE_INVALID_KEY};
use proptest::prelude::*;

const GENERIC_INVALID: ValidationVerdict = ValidationVerdict::Invalid {
    reason: "Invalid key",
    code: CODE_INVALID_KEY,
};

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == ' '
}

proptest! {
    #[test]
    fn foreign_character_is_generic_invalid(
        prefix in "[0-9a-zA-Z -]{0,12}",
        foreign in any::<char>().prop_filter("foreign", |c| !is_key_char(*c)),
        suffix in "[0-9a-zA-Z -]{0,12}",
    ) {
        let raw = format!("{}{}{}", prefix, foreign, suffix);
        let engine = KeyValidationEngine::standard();
        prop_assert_eq!(engine.validate(Some(&raw)), GENERIC_INVALID);
    }

    #[test]
    fn wrong_symbol_count_is_generic_invalid(
        symbols in "[0-9a-zA-Z]{0,40}".prop_filter("not 16", |s| s.len() != 16),
        dashes in 0usize..4,
    ) {
        let raw = format!("{}{}", "-".repeat(dashes), symbols);
        let engine = KeyValidationEngine::standard();
        prop_assert_eq!(engine.validate(Some(&raw)), GENERIC_INVALID);
    }

    #[test]
    fn any_sixteen_symbols_normalize(symbols in "[0-9a-zA-Z]{16}") {
        let key = normalize(&symbols).unwrap();
        let canonical: String = key.to_string().chars().filter(|c| *c != '-').collect();
        prop_assert_eq!(canonical, symbols);
    }

    #[test]
    fn verdict_ignores_separator_placement(
        symbols in "[0-9a-zA-Z]{16}",
        cut in 1usize..16,
    ) {
        let engine = KeyValidationEngine::standard();
        let split = format!("{} - {}", &symbols[..cut], &symbols[cut..]);
        prop_assert_eq!(engine.validate(Some(&symbols)), engine.validate(Some(&split)));
    }

    #[test]
    fn alphabet_round_trips(value in 0u8..62) {
        let ch = symbol_for(value).unwrap();
        prop_assert_eq!(symbol_value(ch), Some(value));
    }
}
