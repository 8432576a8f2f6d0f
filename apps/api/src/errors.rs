use thiserror::Error;

use crate::models::records::SkillCategory;

/// Which half of the failure taxonomy an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A gap in the static mapping tables (code/data drift).
    Configuration,
    /// A malformed static record.
    Validation,
}

/// Errors raised while building records, classifiers and pages.
///
/// Every variant is fatal at startup. Nothing in the crate catches these and
/// substitutes a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("Configuration error: no icon mapping declared for category '{0}'")]
    MissingCategoryMapping(SkillCategory),

    #[error("Configuration error: category '{0}' is mapped more than once")]
    DuplicateCategoryMapping(SkillCategory),

    #[error("Configuration error: unknown skill category '{0}'")]
    UnknownCategory(String),

    #[error("Configuration error: {page} page cannot be assembled from {bundle} records")]
    PageMismatch {
        page: &'static str,
        bundle: &'static str,
    },

    #[error("Validation error: {record} is missing required field '{field}'")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },
}

impl ContentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContentError::MissingCategoryMapping(_)
            | ContentError::DuplicateCategoryMapping(_)
            | ContentError::UnknownCategory(_)
            | ContentError::PageMismatch { .. } => ErrorKind::Configuration,
            ContentError::MissingField { .. } => ErrorKind::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_errors_are_configuration_kind() {
        assert_eq!(
            ContentError::MissingCategoryMapping(SkillCategory::Data).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            ContentError::UnknownCategory("DevOps".to_string()).kind(),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn test_missing_field_is_validation_kind() {
        let err = ContentError::MissingField {
            record: "Project",
            field: "title",
        };
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("'title'"));
    }
}
