//! Single-field checks shared by the validation pipelines.
//!
//! Each check inspects one slice of an identifier and returns the
//! category-specific [`IdError`] on failure.

use super::checksum::{PRIVATE_COEFFICIENTS, PUBLIC_COEFFICIENTS, decimal_digits, modulo10, modulo11};
use super::error::IdError;
use super::types::{ContributorType, DocumentKind};

/// Lowest and highest valid province codes.
pub const PROVINCE_RANGE: std::ops::RangeInclusive<u32> = 1..=24;

/// Parse an all-digit slice. Signs, spaces and empty input are rejected.
fn parse_digits(code: &str) -> Option<u32> {
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    code.parse().ok()
}

/// The value must be exactly `kind.len()` ASCII digits.
pub fn check_format(kind: DocumentKind, value: &str) -> Result<(), IdError> {
    if value.len() == kind.len() && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(IdError::Format {
            kind,
            value: value.into(),
        })
    }
}

/// The two-digit province code must lie in 01..=24.
pub fn check_province(code: &str) -> Result<(), IdError> {
    match parse_digits(code) {
        Some(n) if PROVINCE_RANGE.contains(&n) => Ok(()),
        _ => Err(IdError::ProvinceOutOfRange(code.into())),
    }
}

/// The third digit must satisfy the rule of the required contributor category.
pub fn check_contributor(expected: ContributorType, digit: &str) -> Result<(), IdError> {
    match parse_digits(digit) {
        Some(d) if d <= 9 && expected.accepts(d as u8) => Ok(()),
        _ => Err(IdError::contributor(expected, digit)),
    }
}

/// Detect the contributor category from the third digit.
pub fn classify_contributor(digit: &str) -> Result<ContributorType, IdError> {
    parse_digits(digit)
        .filter(|&d| d <= 9)
        .and_then(|d| ContributorType::from_digit(d as u8))
        .ok_or_else(|| IdError::UnknownContributor(digit.into()))
}

/// The establishment code (last three RUC digits) must be at least 1.
pub fn check_establishment(code: &str) -> Result<(), IdError> {
    match parse_digits(code) {
        Some(n) if n >= 1 => Ok(()),
        _ => Err(IdError::EstablishmentOutOfRange(code.into())),
    }
}

/// Modulo 10 over the first 9 digits of a cédula, compared to the 10th.
pub fn check_cedula_checksum(value: &str) -> Result<(), IdError> {
    check_format(DocumentKind::Cedula, value)?;
    let digits = decimal_digits(value);
    compare(modulo10(&digits[..9]), digits[9])
}

/// Check digit of a RUC, using the algorithm and offset of its contributor category.
///
/// Natural persons use Modulo 10 on digits 0..9 against digit 9, private
/// companies Modulo 11 on digits 0..9 against digit 9, public institutions
/// Modulo 11 on digits 0..8 against digit 8.
pub fn check_ruc_checksum(contributor: ContributorType, value: &str) -> Result<(), IdError> {
    check_format(DocumentKind::Ruc, value)?;
    let digits = decimal_digits(value);
    let offset = contributor.check_digit_offset();
    let expected = match contributor {
        ContributorType::Natural => modulo10(&digits[..offset]),
        ContributorType::Private => modulo11(&digits[..offset], &PRIVATE_COEFFICIENTS),
        ContributorType::Public => modulo11(&digits[..offset], &PUBLIC_COEFFICIENTS),
    };
    compare(expected, digits[offset])
}

fn compare(expected: u8, found: u8) -> Result<(), IdError> {
    if expected == found {
        Ok(())
    } else {
        Err(IdError::Checksum { expected, found })
    }
}
