//! Luhn checksum
//!
//! Counting from the rightmost digit as position 1, every second digit is
//! doubled (subtracting 9 when the result exceeds 9) and all digits are
//! summed; the number is valid when the sum is a multiple of 10.
//!
//! Expressed left to right: with an even digit count the digits at even
//! 0-based indices are doubled, with an odd count those at odd indices.

/// Double a digit, folding two-digit results back into one
const fn double(digit: u32) -> u32 {
    let doubled = digit * 2;
    if doubled >= 10 { doubled - 9 } else { doubled }
}

/// Luhn sum over a sequence of decimal digits, left to right
#[must_use]
pub fn luhn_sum(digits: &[u32]) -> u32 {
    let double_even_indices = digits.len() % 2 == 0;

    digits
        .iter()
        .enumerate()
        .map(|(index, &digit)| {
            if (index % 2 == 0) == double_even_indices {
                double(digit)
            } else {
                digit
            }
        })
        .sum()
}

/// Split a string into decimal digits, or `None` if any character is not one
fn to_digits(number: &str) -> Option<Vec<u32>> {
    number.chars().map(|c| c.to_digit(10)).collect()
}

/// Check a digit string against the Luhn checksum
///
/// Returns `false` for an empty string or one containing anything but ASCII
/// digits.
///
/// # Examples
///
/// ```
/// use ccvalidator::core::services::luhn;
///
/// assert!(luhn::is_valid("4111111111111111"));
/// assert!(!luhn::is_valid("4111111111111112"));
/// ```
#[must_use]
pub fn is_valid(number: &str) -> bool {
    match to_digits(number) {
        Some(digits) if !digits.is_empty() => luhn_sum(&digits) % 10 == 0,
        _ => false,
    }
}

/// Compute the digit that makes `payload` followed by it pass the checksum
///
/// Returns `None` if `payload` contains anything but ASCII digits.
///
/// ```
/// use ccvalidator::core::services::luhn;
///
/// assert_eq!(luhn::check_digit("411111111111111"), Some(1));
/// ```
#[must_use]
pub fn check_digit(payload: &str) -> Option<u32> {
    let mut digits = to_digits(payload)?;
    // The appended position is rightmost, so it is never doubled
    digits.push(0);
    Some((10 - luhn_sum(&digits) % 10) % 10)
}
