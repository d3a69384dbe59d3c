use serde::{Deserialize, Serialize};
use std::fmt;

/// Ecuadorian identification document, determined by its fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Cédula de identidad: 10 digits.
    Cedula,
    /// Registro Único de Contribuyentes: 13 digits.
    Ruc,
}

impl DocumentKind {
    /// Exact number of digits for this document.
    pub const fn len(&self) -> usize {
        match self {
            Self::Cedula => 10,
            Self::Ruc => 13,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cedula => f.write_str("cédula"),
            Self::Ruc => f.write_str("RUC"),
        }
    }
}

/// Holder category encoded in the third digit of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContributorType {
    /// 0 to 5: natural person.
    Natural,
    /// 6: public institution.
    Public,
    /// 9: private company.
    Private,
}

impl ContributorType {
    /// Classify a third digit. `None` for 7 and 8.
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0..=5 => Some(Self::Natural),
            6 => Some(Self::Public),
            9 => Some(Self::Private),
            _ => None,
        }
    }

    /// Whether `digit` satisfies this category's rule.
    pub fn accepts(&self, digit: u8) -> bool {
        match self {
            Self::Natural => digit <= 5,
            Self::Public => digit == 6,
            Self::Private => digit == 9,
        }
    }

    /// Zero-based position of the check digit inside a RUC.
    pub const fn check_digit_offset(&self) -> usize {
        match self {
            Self::Natural | Self::Private => 9,
            Self::Public => 8,
        }
    }
}

impl fmt::Display for ContributorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Natural => f.write_str("natural person"),
            Self::Public => f.write_str("public institution"),
            Self::Private => f.write_str("private company"),
        }
    }
}
