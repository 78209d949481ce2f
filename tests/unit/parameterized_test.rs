//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use ccvalidator::core::services::{IssuerRegistry, NumberValidator, luhn, normalize};
use ccvalidator::output::format_line;
use test_case::test_case;

fn evaluate(line: &str) -> (String, bool) {
    let registry = IssuerRegistry::with_defaults();
    let result = NumberValidator::new(&registry).evaluate(line);
    (result.issuer, result.valid)
}

// =============================================================================
// Classification Tests
// =============================================================================

#[test_case("4111111111111111", "VISA", true ; "visa sixteen digits")]
#[test_case("4222222222222", "VISA", true ; "visa thirteen digits")]
#[test_case("4111111111111", "VISA", false ; "visa bad checksum")]
#[test_case("378282246310005", "AMEX", true ; "amex 37")]
#[test_case("341111111111111", "AMEX", true ; "amex 34")]
#[test_case("6011111111111117", "Discover", true ; "discover")]
#[test_case("5555555555554444", "MasterCard", true ; "mastercard 55")]
#[test_case("5105 1051 0510 5106", "MasterCard", false ; "mastercard spaced bad checksum")]
#[test_case("9111111111111110", "Unknown", false ; "luhn valid but unknown prefix")]
#[test_case("5611111111111111", "Unknown", false ; "prefix 56 is not mastercard")]
#[test_case("60111111111111", "Unknown", false ; "discover prefix wrong length")]
#[test_case("4111-1111-1111-1111", "Unknown", false ; "dashes are not stripped")]
#[test_case("", "Unknown", false ; "empty line")]
#[test_case("abc", "Unknown", false ; "letters")]
fn test_classification(line: &str, issuer: &str, valid: bool) {
    assert_eq!(evaluate(line), (issuer.to_string(), valid));
}

// =============================================================================
// Normalization Tests
// =============================================================================

#[test_case("4111111111111111", "4111111111111111" ; "already normalized")]
#[test_case("  4111111111111111  ", "4111111111111111" ; "surrounding spaces")]
#[test_case("4111 1111 1111 1111", "4111111111111111" ; "grouped")]
#[test_case("4111\t1111\u{a0}1111 1111\r", "4111111111111111" ; "tabs and other whitespace")]
#[test_case("   ", "" ; "only whitespace")]
fn test_normalize(raw: &str, expected: &str) {
    assert_eq!(normalize(raw), expected);
}

// =============================================================================
// Luhn Tests
// =============================================================================

#[test_case("0", true ; "single zero")]
#[test_case("18", true ; "two digits")]
#[test_case("125", true ; "three digits")]
#[test_case("79927398713", true ; "textbook example")]
#[test_case("79927398710", false ; "textbook example wrong check digit")]
#[test_case("1234567812345670", true ; "sixteen digits")]
#[test_case("1234567812345678", false ; "sixteen digits wrong")]
fn test_luhn(number: &str, expected: bool) {
    assert_eq!(luhn::is_valid(number), expected);
}

// =============================================================================
// Display Line Tests
// =============================================================================

#[test_case("4111111111111111", "VISA: 4111111111111111       (valid)" ; "padded valid")]
#[test_case("4111111111111", "VISA: 4111111111111          (invalid)" ; "padded invalid")]
#[test_case("5105105105105100", "MasterCard: 5105105105105100 (valid)" ; "exactly label width")]
#[test_case("9111111111111111", "Unknown: 9111111111111111    (invalid)" ; "unknown")]
#[test_case("41111111111111111111111", "Unknown: 41111111111111111111111 (invalid)" ; "longer than label width")]
fn test_format_line(line: &str, expected: &str) {
    let registry = IssuerRegistry::with_defaults();
    let result = NumberValidator::new(&registry).evaluate(line);
    assert_eq!(format_line(&result), expected);
}
