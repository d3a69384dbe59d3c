//! Tax codes and the IVA rate table.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::SriError;

/// Tax (impuesto) code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxType {
    /// 2: Impuesto al Valor Agregado.
    Iva,
    /// 3: Impuesto a los Consumos Especiales.
    Ice,
    /// 5: Impuesto Redimible a las Botellas Plásticas no Retornables.
    Irbpnr,
}

impl TaxType {
    /// One-digit SRI code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Iva => "2",
            Self::Ice => "3",
            Self::Irbpnr => "5",
        }
    }

    /// Parse from the SRI code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "2" => Some(Self::Iva),
            "3" => Some(Self::Ice),
            "5" => Some(Self::Irbpnr),
            _ => None,
        }
    }
}

/// IVA rate code (código porcentaje).
///
/// The codes are not ordered by rate: 13% was added later as code 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IvaRate {
    /// 0: 0%.
    Zero,
    /// 5: 5%.
    Five,
    /// 2: 12%.
    Twelve,
    /// 10: 13%.
    Thirteen,
    /// 3: 14%.
    Fourteen,
    /// 4: 15%.
    Fifteen,
    /// 6: No objeto de impuesto.
    NotSubject,
    /// 7: Exento de IVA.
    Exempt,
    /// 8: IVA diferenciado.
    Differentiated,
}

impl IvaRate {
    /// SRI code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::Five => "5",
            Self::Twelve => "2",
            Self::Thirteen => "10",
            Self::Fourteen => "3",
            Self::Fifteen => "4",
            Self::NotSubject => "6",
            Self::Exempt => "7",
            Self::Differentiated => "8",
        }
    }

    /// Parse from the SRI code (exact match).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(Self::Zero),
            "5" => Some(Self::Five),
            "2" => Some(Self::Twelve),
            "10" => Some(Self::Thirteen),
            "3" => Some(Self::Fourteen),
            "4" => Some(Self::Fifteen),
            "6" => Some(Self::NotSubject),
            "7" => Some(Self::Exempt),
            "8" => Some(Self::Differentiated),
            _ => None,
        }
    }

    /// Rate in percent, or `None` for codes without a numeric rate.
    pub fn percent(&self) -> Option<Decimal> {
        match self {
            Self::Zero => Some(dec!(0)),
            Self::Five => Some(dec!(5)),
            Self::Twelve => Some(dec!(12)),
            Self::Thirteen => Some(dec!(13)),
            Self::Fourteen => Some(dec!(14)),
            Self::Fifteen => Some(dec!(15)),
            Self::NotSubject | Self::Exempt | Self::Differentiated => None,
        }
    }
}

/// Look up the IVA percentage for a rate code.
///
/// Returns `Ok(None)` for known codes without a numeric rate (not subject,
/// exempt, differentiated) and [`SriError::UnknownIvaCode`] otherwise.
pub fn iva_percent(code: &str) -> Result<Option<Decimal>, SriError> {
    IvaRate::from_code(code)
        .map(|rate| rate.percent())
        .ok_or_else(|| SriError::UnknownIvaCode(code.into()))
}
