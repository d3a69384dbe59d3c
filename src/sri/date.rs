use chrono::{Local, NaiveDate};

use super::codec::{ScalarCodec, impl_codec_serde};
use super::error::SriError;

/// Date format used in SRI voucher documents (e.g. "20/02/2020").
pub const VOUCHER_DATE_FORMAT: &str = "%d/%m/%Y";

/// Calendar date written as dd/mm/yyyy in SRI documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VoucherDate(pub NaiveDate);

impl VoucherDate {
    /// Today's date on the local clock.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }
}

impl From<NaiveDate> for VoucherDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl ScalarCodec for VoucherDate {
    fn encode(&self) -> Result<String, SriError> {
        Ok(self.0.format(VOUCHER_DATE_FORMAT).to_string())
    }

    fn decode(&mut self, text: &str) -> Result<(), SriError> {
        let invalid = || SriError::InvalidVoucherDate(text.into());
        if !is_padded_date(text) {
            return Err(invalid());
        }
        self.0 = NaiveDate::parse_from_str(text, VOUCHER_DATE_FORMAT).map_err(|_| invalid())?;
        Ok(())
    }
}

impl_codec_serde!(VoucherDate);

/// Exactly `dd/mm/yyyy`: chrono alone also accepts unpadded days and months.
fn is_padded_date(text: &str) -> bool {
    let b = text.as_bytes();
    b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            2 | 5 => *c == b'/',
            _ => c.is_ascii_digit(),
        })
}
