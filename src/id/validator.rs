//! Ordered validation pipelines for cédulas and RUCs.
//!
//! Every pipeline stops at the first failing check. The fixed-kind RUC
//! pipelines check the establishment before the check digit; the
//! auto-detecting [`validate_ruc`] checks them the other way round, so a
//! value failing both reports a different error depending on the entry point.

use super::error::IdError;
use super::rules::*;
use super::types::{ContributorType, DocumentKind};

/// Validate a 10-digit cédula.
///
/// Format → province → natural contributor → Modulo 10.
pub fn validate_cedula(value: &str) -> Result<(), IdError> {
    traced(DocumentKind::Cedula, value, cedula_checks(value))
}

fn cedula_checks(value: &str) -> Result<(), IdError> {
    check_format(DocumentKind::Cedula, value)?;
    check_province(&value[..2])?;
    check_contributor(ContributorType::Natural, &value[2..3])?;
    check_cedula_checksum(value)
}

/// Validate the RUC of a natural person.
///
/// Format → province → natural contributor → establishment → Modulo 10.
pub fn validate_natural_ruc(value: &str) -> Result<(), IdError> {
    validate_fixed_ruc(ContributorType::Natural, value)
}

/// Validate the RUC of a private company.
///
/// Format → province → private contributor → establishment → Modulo 11.
pub fn validate_private_ruc(value: &str) -> Result<(), IdError> {
    validate_fixed_ruc(ContributorType::Private, value)
}

/// Validate the RUC of a public institution.
///
/// Format → province → public contributor → establishment → Modulo 11
/// on the first 8 digits.
pub fn validate_public_ruc(value: &str) -> Result<(), IdError> {
    validate_fixed_ruc(ContributorType::Public, value)
}

fn validate_fixed_ruc(contributor: ContributorType, value: &str) -> Result<(), IdError> {
    traced(DocumentKind::Ruc, value, fixed_ruc_checks(contributor, value))
}

fn fixed_ruc_checks(contributor: ContributorType, value: &str) -> Result<(), IdError> {
    check_format(DocumentKind::Ruc, value)?;
    check_province(&value[..2])?;
    check_contributor(contributor, &value[2..3])?;
    check_establishment(&value[10..])?;
    check_ruc_checksum(contributor, value)
}

/// Validate any RUC, detecting the contributor category from its third digit.
///
/// Format → province → classify → contributor → check digit → establishment.
pub fn validate_ruc(value: &str) -> Result<(), IdError> {
    traced(DocumentKind::Ruc, value, auto_ruc_checks(value))
}

fn auto_ruc_checks(value: &str) -> Result<(), IdError> {
    let contributor = detect_contributor(value)?;
    check_contributor(contributor, &value[2..3])?;
    check_ruc_checksum(contributor, value)?;
    check_establishment(&value[10..])
}

/// Contributor category of a RUC, after its format and province checks pass.
///
/// The check digit and establishment are not inspected; use [`validate_ruc`]
/// for a full validation.
pub fn detect_contributor(value: &str) -> Result<ContributorType, IdError> {
    check_format(DocumentKind::Ruc, value)?;
    check_province(&value[..2])?;
    classify_contributor(&value[2..3])
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn traced(kind: DocumentKind, value: &str, result: Result<(), IdError>) -> Result<(), IdError> {
    #[cfg(feature = "tracing")]
    if let Err(ref e) = result {
        tracing::debug!(document = %kind, value, error = %e, "identifier rejected");
    }
    result
}
