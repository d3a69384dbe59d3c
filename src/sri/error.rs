use thiserror::Error;

/// Errors from the access-key codec and the SRI scalar types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SriError {
    /// The 48-digit base or the 49-digit key is not all digits of the right length.
    #[error("invalid access key format: '{0}'")]
    AccessKeyFormat(String),

    /// The ddmmyyyy slice of an access key is not a calendar date.
    #[error("invalid date in access key: '{0}'")]
    AccessKeyDate(String),

    /// Voucher type code not in the SRI catalogue.
    #[error("unknown voucher type code '{0}'")]
    UnknownVoucherType(String),

    /// Environment code other than 1 (test) or 2 (production).
    #[error("unknown environment code '{0}'")]
    UnknownEnvironment(String),

    /// Boolean text other than SI or NO.
    #[error("invalid boolean value '{0}', expected SI or NO")]
    InvalidBool(String),

    /// Voucher date not in dd/mm/yyyy form.
    #[error("invalid voucher date '{0}', expected dd/mm/yyyy")]
    InvalidVoucherDate(String),

    /// IVA code not in the rate table.
    #[error("unknown IVA code '{0}'")]
    UnknownIvaCode(String),

    /// XML reading or writing failed.
    #[error("XML error: {0}")]
    Xml(String),
}
