//! Cédula and RUC validation.
//!
//! Implements the SRI numbering rules: fixed length, province code,
//! contributor category (third digit), establishment code and the
//! Modulo 10 / Modulo 11 check digits.
//!
//! # Example
//!
//! ```
//! use sricore::id::*;
//!
//! assert!(validate_cedula("0601234560").is_ok());
//! assert_eq!(
//!     validate_cedula("0601234561"),
//!     Err(IdError::Checksum { expected: 0, found: 1 })
//! );
//! assert_eq!(detect_contributor("0691234568001"), Ok(ContributorType::Private));
//! ```

pub mod checksum;
mod error;
mod rules;
mod types;
mod validator;

pub use checksum::{PRIVATE_COEFFICIENTS, PUBLIC_COEFFICIENTS, modulo10, modulo11};
pub use error::{ContributorErrorKind, IdError};
pub use rules::*;
pub use types::{ContributorType, DocumentKind};
pub use validator::*;
