//! # sricore
//!
//! Core rules of the Ecuadorian tax authority (SRI) for electronic invoicing:
//! cédula and RUC validation, and the 49-digit access key that identifies
//! every electronic voucher.
//!
//! Everything here is a pure function of its input: no network, no files,
//! no shared state. All operations are safe to call from any thread.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sricore::*;
//!
//! assert!(validate_ruc("1791251237001").is_ok());
//! assert_eq!(
//!     validate_cedula("0001234560"),
//!     Err(IdError::ProvinceOutOfRange("00".into()))
//! );
//!
//! let key = AccessKey {
//!     date: NaiveDate::from_ymd_opt(2020, 2, 20).unwrap(),
//!     voucher_type: VoucherType::Invoice,
//!     ruc: "1791251237001".into(),
//!     environment: Environment::Production,
//!     establishment: "001".into(),
//!     emission_point: "001".into(),
//!     sequential: "005814917".into(),
//!     code: "12345678".into(),
//! };
//! assert_eq!(
//!     key.generate().unwrap(),
//!     "2002202001179125123700120010010058149171234567817"
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `id` (default) | Cédula/RUC checksums and validation pipelines |
//! | `sri` (default) | Access key codec, voucher codes, SI/NO boolean, voucher date, IVA rates |
//! | `xml` | quick-xml element adapter for scalar values |
//! | `tracing` | Debug events when input is rejected |
//! | `all` | Everything |

#[cfg(feature = "id")]
pub mod id;

#[cfg(feature = "sri")]
pub mod sri;

// Re-export module items at crate root for convenience
#[cfg(feature = "id")]
pub use crate::id::*;

#[cfg(feature = "sri")]
pub use crate::sri::*;
