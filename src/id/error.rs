use thiserror::Error;

use super::types::{ContributorType, DocumentKind};

/// Reason an identifier was rejected.
///
/// Pipelines stop at the first failing check, so a value carries exactly
/// one of these. Each variant keeps the offending slice of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IdError {
    /// Wrong length or a non-digit character.
    #[error("{kind} must be exactly {len} digits, got '{value}'", len = .kind.len())]
    Format {
        /// Document kind whose shape was expected.
        kind: DocumentKind,
        /// The rejected input.
        value: String,
    },

    /// Province code outside 01..=24.
    #[error("province code must be between 01 and 24, got '{0}'")]
    ProvinceOutOfRange(String),

    /// Third digit outside 0..=5 for a natural person.
    #[error("natural person code must be between 0 and 5, got '{0}'")]
    NaturalContributor(String),

    /// Third digit is not 9 for a private company.
    #[error("private company code must be 9, got '{0}'")]
    PrivateContributor(String),

    /// Third digit is not 6 for a public institution.
    #[error("public institution code must be 6, got '{0}'")]
    PublicContributor(String),

    /// Third digit matches no contributor category.
    #[error("unknown contributor code '{0}'")]
    UnknownContributor(String),

    /// Establishment code below 001.
    #[error("establishment code must be at least 001, got '{0}'")]
    EstablishmentOutOfRange(String),

    /// Computed check digit differs from the embedded one.
    #[error("invalid check digit: expected {expected}, found {found}")]
    Checksum {
        /// Digit computed from the preceding digits (10 when Modulo 11 yields no single digit).
        expected: u8,
        /// Digit embedded in the identifier.
        found: u8,
    },
}

/// Category tag of a contributor error, for callers that branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributorErrorKind {
    /// A specific category rule failed.
    Known(ContributorType),
    /// No category matched.
    Unknown,
}

impl IdError {
    /// Build the contributor error matching the category that was required.
    pub fn contributor(expected: ContributorType, digit: impl Into<String>) -> Self {
        let digit = digit.into();
        match expected {
            ContributorType::Natural => Self::NaturalContributor(digit),
            ContributorType::Private => Self::PrivateContributor(digit),
            ContributorType::Public => Self::PublicContributor(digit),
        }
    }

    /// The contributor category this error refers to, if it is a contributor error.
    pub fn contributor_kind(&self) -> Option<ContributorErrorKind> {
        match self {
            Self::NaturalContributor(_) => {
                Some(ContributorErrorKind::Known(ContributorType::Natural))
            }
            Self::PrivateContributor(_) => {
                Some(ContributorErrorKind::Known(ContributorType::Private))
            }
            Self::PublicContributor(_) => Some(ContributorErrorKind::Known(ContributorType::Public)),
            Self::UnknownContributor(_) => Some(ContributorErrorKind::Unknown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_message_names_kind_and_length() {
        let err = IdError::Format {
            kind: DocumentKind::Ruc,
            value: "123".into(),
        };
        assert_eq!(err.to_string(), "RUC must be exactly 13 digits, got '123'");
    }

    #[test]
    fn contributor_builder_picks_variant() {
        assert_eq!(
            IdError::contributor(ContributorType::Public, "7"),
            IdError::PublicContributor("7".into())
        );
        assert_eq!(
            IdError::contributor(ContributorType::Natural, "6").contributor_kind(),
            Some(ContributorErrorKind::Known(ContributorType::Natural))
        );
    }

    #[test]
    fn non_contributor_errors_have_no_kind() {
        assert!(
            IdError::ProvinceOutOfRange("00".into())
                .contributor_kind()
                .is_none()
        );
        assert_eq!(
            IdError::UnknownContributor("7".into()).contributor_kind(),
            Some(ContributorErrorKind::Unknown)
        );
    }
}
