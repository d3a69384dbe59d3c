//! Modulo 10 and Modulo 11 check digit algorithms.
//!
//! Both operate on decimal digit values (0–9), not ASCII bytes.

/// Modulo 11 weights for private company RUCs (9 digits).
pub const PRIVATE_COEFFICIENTS: [u8; 9] = [4, 3, 2, 7, 6, 5, 4, 3, 2];

/// Modulo 11 weights for public institution RUCs (8 digits).
pub const PUBLIC_COEFFICIENTS: [u8; 8] = [3, 2, 7, 6, 5, 4, 3, 2];

/// Modulo 10 check digit over the first 9 digits.
///
/// Digits at even positions are doubled (minus 9 when above 9); the result
/// is the distance from the digit sum to the next multiple of ten.
pub fn modulo10(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .take(9)
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    match sum % 10 {
        0 => 0,
        r => (10 - r) as u8,
    }
}

/// Modulo 11 check digit with the given weights.
///
/// Digits and weights pair by position; the weight slice decides how many
/// digits are consumed. The result lies in 0..=10.
pub fn modulo11(digits: &[u8], coefficients: &[u8]) -> u8 {
    let sum: u32 = coefficients
        .iter()
        .zip(digits)
        .map(|(&c, &d)| u32::from(c) * u32::from(d))
        .sum();

    match sum % 11 {
        0 => 0,
        r => (11 - r) as u8,
    }
}

/// Convert an all-digit string into digit values. Non-digits map to 0.
pub(crate) fn decimal_digits(value: &str) -> Vec<u8> {
    value
        .bytes()
        .map(|b| if b.is_ascii_digit() { b - b'0' } else { 0 })
        .collect()
}
