//! 49-digit access key (clave de acceso) of an electronic voucher.
//!
//! Layout of the key, by zero-based offset:
//!
//! | Offset | Len | Field |
//! |--------|-----|-------|
//! | 0  | 8  | issue date, ddmmyyyy |
//! | 8  | 2  | voucher type |
//! | 10 | 13 | RUC of the issuer |
//! | 23 | 1  | environment |
//! | 24 | 3  | establishment |
//! | 27 | 3  | emission point |
//! | 30 | 9  | sequential |
//! | 39 | 8  | numeric code |
//! | 47 | 1  | issue type (always 1) |
//! | 48 | 1  | validator digit |

use chrono::NaiveDate;
use rand::Rng;

use super::codec::{ScalarCodec, impl_codec_serde};
use super::codes::{Environment, IssueType, VoucherType};
use super::error::SriError;

/// Length of the key without the validator digit.
pub const ACCESS_KEY_BASE_LEN: usize = 48;

/// Length of the full key.
pub const ACCESS_KEY_LEN: usize = 49;

/// Date layout inside the key.
const KEY_DATE_FORMAT: &str = "%d%m%Y";

/// Fields of an access key.
///
/// The issue type and validator digit are not stored: the first is fixed
/// and the second is derived by [`AccessKey::generate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AccessKey {
    /// Issue date of the voucher.
    pub date: NaiveDate,
    /// Voucher type.
    pub voucher_type: VoucherType,
    /// RUC of the issuer, 13 digits.
    pub ruc: String,
    /// Target environment.
    pub environment: Environment,
    /// Establishment code, 3 digits (e.g. "001").
    pub establishment: String,
    /// Emission point code, 3 digits (e.g. "001").
    pub emission_point: String,
    /// Voucher counter, 9 zero-padded digits (e.g. "000000001").
    pub sequential: String,
    /// Numeric code, 8 digits.
    pub code: String,
}

impl AccessKey {
    /// The 48-digit base: every field in key order plus the issue type.
    ///
    /// Fails with [`SriError::AccessKeyFormat`] when any field is
    /// mis-padded, too long or non-numeric.
    pub fn base(&self) -> Result<String, SriError> {
        let value = format!(
            "{}{}{}{}{}{}{}{}{}",
            self.date.format(KEY_DATE_FORMAT),
            self.voucher_type.code(),
            self.ruc,
            self.environment.code(),
            self.establishment,
            self.emission_point,
            self.sequential,
            self.code,
            IssueType::Normal.code(),
        );

        if !is_digits(&value, ACCESS_KEY_BASE_LEN) {
            return Err(SriError::AccessKeyFormat(value));
        }
        Ok(value)
    }

    /// The full 49-digit key: base plus validator digit.
    pub fn generate(&self) -> Result<String, SriError> {
        let mut key = self.base()?;
        key.push(char::from(b'0' + validator_digit(&key)));
        Ok(key)
    }

    /// Split a 49-digit key into its fields.
    ///
    /// The issue type and validator digit are not checked; a key with a
    /// wrong final digit still decodes. Voucher type and environment codes
    /// outside the catalogue decode to their `Other` variants.
    pub fn from_key(key: &str) -> Result<Self, SriError> {
        if !is_digits(key, ACCESS_KEY_LEN) {
            return Err(SriError::AccessKeyFormat(key.into()));
        }

        Ok(Self {
            date: parse_key_date(&key[..8])?,
            voucher_type: VoucherType::from_raw(&key[8..10]),
            ruc: key[10..23].into(),
            environment: Environment::from_raw(&key[23..24]),
            establishment: key[24..27].into(),
            emission_point: key[27..30].into(),
            sequential: key[30..39].into(),
            code: key[39..47].into(),
        })
    }

    /// Voucher number as printed on documents: `EEE-PPP-SSSSSSSSS`.
    pub fn number(&self) -> String {
        format!(
            "{}-{}-{}",
            self.establishment, self.emission_point, self.sequential
        )
    }

    /// Series: establishment followed by emission point.
    pub fn series(&self) -> String {
        format!("{}{}", self.establishment, self.emission_point)
    }

    /// A random 8-digit numeric code, zero-padded.
    pub fn random_code() -> String {
        format!("{:08}", rand::thread_rng().gen_range(0..100_000_000u32))
    }
}

/// Check digit of an access key base (Modulo 11, weights 7 down to 2, repeating).
///
/// A result of 11 becomes 0 and a result of 10 becomes 1. Bytes that are
/// not ASCII digits count as 0.
pub fn validator_digit(base: &str) -> u8 {
    let mut weight = 7u32;
    let mut sum = 0u32;
    for b in base.bytes() {
        let digit = if b.is_ascii_digit() { u32::from(b - b'0') } else { 0 };
        sum = (sum + digit * weight) % 11;
        weight -= 1;
        if weight < 2 {
            weight = 7;
        }
    }

    match 11 - sum {
        11 => 0,
        10 => 1,
        d => d as u8,
    }
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

fn parse_key_date(text: &str) -> Result<NaiveDate, SriError> {
    let field = |range: std::ops::Range<usize>| -> Option<u32> {
        text.get(range).and_then(|s| s.parse().ok())
    };
    let date = match (field(0..2), field(2..4), field(4..8)) {
        (Some(day), Some(month), Some(year)) => NaiveDate::from_ymd_opt(year as i32, month, day),
        _ => None,
    };
    date.ok_or_else(|| SriError::AccessKeyDate(text.into()))
}

impl std::str::FromStr for AccessKey {
    type Err = SriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

impl ScalarCodec for AccessKey {
    fn encode(&self) -> Result<String, SriError> {
        self.generate()
    }

    fn decode(&mut self, text: &str) -> Result<(), SriError> {
        *self = Self::from_key(text)?;
        Ok(())
    }
}

impl_codec_serde!(AccessKey);

/// Builder for access keys from numeric counters.
///
/// ```
/// use chrono::NaiveDate;
/// use sricore::sri::*;
///
/// let key = AccessKeyBuilder::new(
///     NaiveDate::from_ymd_opt(2020, 2, 20).unwrap(),
///     VoucherType::Invoice,
///     "1791251237001",
/// )
/// .environment(Environment::Production)
/// .series(1, 1)
/// .sequential(5_814_917)
/// .code("12345678")
/// .build()
/// .unwrap();
///
/// assert_eq!(key.number(), "001-001-005814917");
/// assert_eq!(
///     key.generate().unwrap(),
///     "2002202001179125123700120010010058149171234567817"
/// );
/// ```
pub struct AccessKeyBuilder {
    date: NaiveDate,
    voucher_type: VoucherType,
    ruc: String,
    environment: Environment,
    establishment: u32,
    emission_point: u32,
    sequential: u64,
    code: Option<String>,
}

impl AccessKeyBuilder {
    /// Start a key for the test environment, series 001-001, sequential 1.
    pub fn new(date: NaiveDate, voucher_type: VoucherType, ruc: impl Into<String>) -> Self {
        Self {
            date,
            voucher_type,
            ruc: ruc.into(),
            environment: Environment::Test,
            establishment: 1,
            emission_point: 1,
            sequential: 1,
            code: None,
        }
    }

    /// Target environment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Establishment and emission point numbers, padded to 3 digits.
    pub fn series(mut self, establishment: u32, emission_point: u32) -> Self {
        self.establishment = establishment;
        self.emission_point = emission_point;
        self
    }

    /// Voucher counter, padded to 9 digits.
    pub fn sequential(mut self, sequential: u64) -> Self {
        self.sequential = sequential;
        self
    }

    /// Fixed numeric code. Without it, [`AccessKey::random_code`] is used.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Assemble the key, failing if any field does not fit its width.
    pub fn build(self) -> Result<AccessKey, SriError> {
        let key = AccessKey {
            date: self.date,
            voucher_type: self.voucher_type,
            ruc: self.ruc,
            environment: self.environment,
            establishment: format!("{:03}", self.establishment),
            emission_point: format!("{:03}", self.emission_point),
            sequential: format!("{:09}", self.sequential),
            code: self.code.unwrap_or_else(AccessKey::random_code),
        };
        key.base()?;
        Ok(key)
    }
}
