//! Property-based tests for classification and the Luhn checksum
//!
//! Uses proptest to verify properties that should hold for all inputs.

use ccvalidator::core::services::{IssuerRegistry, NumberValidator, luhn, process_batch};
use proptest::prelude::*;

use crate::common::{change_digit, valid_number, with_check_digit};

/// A default issuer as (name, prefix, length)
fn default_issuer() -> impl Strategy<Value = (&'static str, &'static str, usize)> {
    prop_oneof![
        Just(("AMEX", "34", 15)),
        Just(("AMEX", "37", 15)),
        Just(("Discover", "6011", 16)),
        Just(("MasterCard", "51", 16)),
        Just(("MasterCard", "52", 16)),
        Just(("MasterCard", "53", 16)),
        Just(("MasterCard", "54", 16)),
        Just(("MasterCard", "55", 16)),
        Just(("VISA", "4", 13)),
        Just(("VISA", "4", 16)),
    ]
}

proptest! {
    /// Appending the computed check digit always yields a valid number
    #[test]
    fn check_digit_completes_any_payload(payload in "[1-9][0-9]{0,30}") {
        prop_assert!(luhn::is_valid(&with_check_digit(&payload)));
    }

    /// Prefix + filler + check digit is classified with the issuer and valid
    #[test]
    fn constructed_numbers_are_valid(
        (name, prefix, length) in default_issuer(),
        filler in "[0-9]{1,8}"
    ) {
        let number = valid_number(prefix, length, &filler);
        let registry = IssuerRegistry::with_defaults();
        let result = NumberValidator::new(&registry).evaluate(&number);
        prop_assert_eq!(result.issuer, name);
        prop_assert!(result.valid);
    }

    /// Changing one digit after the prefix breaks the checksum
    #[test]
    fn single_digit_change_is_detected(
        (name, prefix, length) in default_issuer(),
        filler in "[0-9]{1,8}",
        offset in 0usize..16,
        bump in 1u32..10
    ) {
        let number = valid_number(prefix, length, &filler);
        let index = prefix.len() + offset % (length - prefix.len());
        let current = number.as_bytes()[index] - b'0';
        let replacement = char::from_digit((u32::from(current) + bump) % 10, 10).unwrap();
        let mutated = change_digit(&number, index, replacement);

        let registry = IssuerRegistry::with_defaults();
        let result = NumberValidator::new(&registry).evaluate(&mutated);
        prop_assert_eq!(result.issuer, name);
        prop_assert!(!result.valid, "mutated={}", mutated);
    }

    /// Whitespace inserted anywhere does not change the result
    #[test]
    fn whitespace_is_irrelevant(
        (_name, prefix, length) in default_issuer(),
        filler in "[0-9]{1,8}",
        cuts in prop::collection::vec((0usize..16, prop_oneof![Just(" "), Just("\t"), Just("  ")]), 0..6)
    ) {
        let number = valid_number(prefix, length, &filler);
        let mut spaced = number.clone();
        for (position, gap) in cuts {
            let position = position.min(spaced.len());
            if spaced.is_char_boundary(position) {
                spaced.insert_str(position, gap);
            }
        }

        let registry = IssuerRegistry::with_defaults();
        let validator = NumberValidator::new(&registry);
        prop_assert_eq!(validator.evaluate(&spaced), validator.evaluate(&number));
    }

    /// Lengths no default issuer accepts are always Unknown
    #[test]
    fn unaccepted_length_is_unknown(number in "[1-9][0-9]{0,11}|[1-9][0-9]{13}|[1-9][0-9]{16,24}") {
        let registry = IssuerRegistry::with_defaults();
        let result = NumberValidator::new(&registry).evaluate(&number);
        prop_assert_eq!(result.issuer, "Unknown");
        prop_assert!(!result.valid);
    }

    /// One result per line, in order
    #[test]
    fn batch_keeps_one_result_per_line(lines in prop::collection::vec("[0-9 ]{0,20}", 1..12)) {
        let text = lines.join("\n");
        let registry = IssuerRegistry::with_defaults();
        let results = process_batch(&registry, &text);

        let expected_len = text.lines().count();
        prop_assert_eq!(results.len(), expected_len);
        for (result, line) in results.iter().zip(text.lines()) {
            prop_assert_eq!(&result.number, &line.split_whitespace().collect::<String>());
        }
    }
}
