//! SRI code catalogues embedded in access keys.

use serde::{Deserialize, Serialize};

use super::error::SriError;

/// Tipo de comprobante: the two-digit voucher type code.
///
/// Codes outside the catalogue are carried as [`VoucherType::Other`] so a
/// decoded key writes back the digits it was read from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoucherType {
    /// 01: Factura.
    #[default]
    Invoice,
    /// 03: Liquidación de compra.
    Purchase,
    /// 04: Nota de crédito.
    CreditNote,
    /// 05: Nota de débito.
    DebitNote,
    /// 06: Guía de remisión.
    Delivery,
    /// 07: Comprobante de retención.
    Retention,
    /// Any other code, as read from a key.
    Other(String),
}

impl VoucherType {
    /// Two-digit SRI code.
    pub fn code(&self) -> &str {
        match self {
            Self::Invoice => "01",
            Self::Purchase => "03",
            Self::CreditNote => "04",
            Self::DebitNote => "05",
            Self::Delivery => "06",
            Self::Retention => "07",
            Self::Other(code) => code,
        }
    }

    /// Catalogued variant for `code`, or [`VoucherType::Other`] holding it.
    pub fn from_raw(code: &str) -> Self {
        Self::from_code(code).unwrap_or_else(|| Self::Other(code.into()))
    }

    /// Parse from the two-digit SRI code. Only catalogued codes match.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "01" => Some(Self::Invoice),
            "03" => Some(Self::Purchase),
            "04" => Some(Self::CreditNote),
            "05" => Some(Self::DebitNote),
            "06" => Some(Self::Delivery),
            "07" => Some(Self::Retention),
            _ => None,
        }
    }
}

impl std::str::FromStr for VoucherType {
    type Err = SriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| SriError::UnknownVoucherType(s.into()))
    }
}

/// Ambiente: which SRI web services a voucher targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    /// 1: Pruebas.
    #[default]
    Test,
    /// 2: Producción.
    Production,
    /// Any other code, as read from a key.
    Other(String),
}

impl Environment {
    /// One-digit SRI code.
    pub fn code(&self) -> &str {
        match self {
            Self::Test => "1",
            Self::Production => "2",
            Self::Other(code) => code,
        }
    }

    /// Catalogued variant for `code`, or [`Environment::Other`] holding it.
    pub fn from_raw(code: &str) -> Self {
        Self::from_code(code).unwrap_or_else(|| Self::Other(code.into()))
    }

    /// Parse from the one-digit SRI code. Only catalogued codes match.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Self::Test),
            "2" => Some(Self::Production),
            _ => None,
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = SriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| SriError::UnknownEnvironment(s.into()))
    }
}

/// Tipo de emisión. Only normal issuance exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueType {
    /// 1: Emisión normal.
    #[default]
    Normal,
}

impl IssueType {
    /// One-digit SRI code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Normal => "1",
        }
    }
}
