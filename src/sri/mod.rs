//! SRI electronic voucher primitives.
//!
//! The 49-digit access key codec, the code catalogues it embeds, the
//! `SI`/`NO` boolean and dd/mm/yyyy date used across SRI documents, and
//! the IVA rate table.
//!
//! Scalar values implement [`ScalarCodec`]; serde and the optional XML
//! adapter go through it, so the text form is defined in one place.
//!
//! # Example
//!
//! ```
//! use sricore::sri::*;
//!
//! let key = AccessKey::from_key("2002202001179125123700120010010058149171234567817").unwrap();
//! assert_eq!(key.voucher_type, VoucherType::Invoice);
//! assert_eq!(key.series(), "001001");
//! assert_eq!(key.generate().unwrap(), "2002202001179125123700120010010058149171234567817");
//! ```

mod access_key;
mod boolean;
mod codec;
mod codes;
mod date;
mod error;
mod tax;

#[cfg(feature = "xml")]
pub mod xml;

pub use access_key::{
    ACCESS_KEY_BASE_LEN, ACCESS_KEY_LEN, AccessKey, AccessKeyBuilder, validator_digit,
};
pub use boolean::SriBool;
pub use codec::ScalarCodec;
pub use codes::{Environment, IssueType, VoucherType};
pub use date::{VOUCHER_DATE_FORMAT, VoucherDate};
pub use error::SriError;
pub use tax::{IvaRate, TaxType, iva_percent};
