//! Error types for record validation.
//!
//! Two families live here: [`SchemaError`] for problems building a schema,
//! and [`RuleViolation`] for a record failing a rule. Violations are data,
//! not failures: validation always completes and returns them as a list.

use crate::FieldType;
use thiserror::Error;

/// Result type for schema construction.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors raised while building a schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Pattern failed to compile
    #[error("Invalid pattern for field '{field}': {message}")]
    InvalidPattern {
        /// Field name
        field: String,
        /// Compiler message
        message: String,
    },

    /// Type name is not one of string, number, boolean, object, array
    #[error("Unknown field type: {0}")]
    UnknownType(String),
}

/// A single rule a record failed.
///
/// The `Display` output is the user-facing message. Nested violations render
/// as a dotted path, e.g. `address.city should be of type string.`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    /// Value missing or null on a non-optional field
    #[error("{field} is required.")]
    Required { field: String },

    /// String value does not match the pattern
    #[error("{field} does not match the required pattern.")]
    PatternMismatch { field: String },

    /// Value differs from the referenced sibling field
    #[error("{field} should be equal to {other}.")]
    NotEqual { field: String, other: String },

    /// Runtime type differs from the declared one
    #[error("{field} should be of type {expected}.")]
    TypeMismatch { field: String, expected: FieldType },

    /// Length below `minLength`
    #[error("{field} should have a minimum length of {min}.")]
    TooShort { field: String, min: usize },

    /// Length above `maxLength`
    #[error("{field} should have a maximum length of {max}.")]
    TooLong { field: String, max: usize },

    /// Violation inside a nested object
    #[error("{field}.{inner}")]
    Nested {
        field: String,
        inner: Box<RuleViolation>,
    },
}

impl RuleViolation {
    /// Creates a required-field violation.
    pub fn required(field: impl Into<String>) -> Self {
        Self::Required {
            field: field.into(),
        }
    }

    /// Creates a pattern mismatch violation.
    pub fn pattern_mismatch(field: impl Into<String>) -> Self {
        Self::PatternMismatch {
            field: field.into(),
        }
    }

    /// Creates an equality violation.
    pub fn not_equal(field: impl Into<String>, other: impl Into<String>) -> Self {
        Self::NotEqual {
            field: field.into(),
            other: other.into(),
        }
    }

    /// Creates a type mismatch violation.
    pub fn type_mismatch(field: impl Into<String>, expected: FieldType) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
        }
    }

    /// Creates a minimum length violation.
    pub fn too_short(field: impl Into<String>, min: usize) -> Self {
        Self::TooShort {
            field: field.into(),
            min,
        }
    }

    /// Creates a maximum length violation.
    pub fn too_long(field: impl Into<String>, max: usize) -> Self {
        Self::TooLong {
            field: field.into(),
            max,
        }
    }

    /// Wraps a violation found inside the nested object `field`.
    pub fn nested(field: impl Into<String>, inner: RuleViolation) -> Self {
        Self::Nested {
            field: field.into(),
            inner: Box::new(inner),
        }
    }

    /// Full dotted path of the offending field.
    pub fn path(&self) -> String {
        match self {
            Self::Nested { field, inner } => format!("{}.{}", field, inner.path()),
            Self::Required { field }
            | Self::PatternMismatch { field }
            | Self::NotEqual { field, .. }
            | Self::TypeMismatch { field, .. }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. } => field.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_messages() {
        assert_eq!(RuleViolation::required("name").to_string(), "name is required.");
        assert_eq!(
            RuleViolation::pattern_mismatch("email").to_string(),
            "email does not match the required pattern."
        );
        assert_eq!(
            RuleViolation::not_equal("passwordConfirmation", "password").to_string(),
            "passwordConfirmation should be equal to password."
        );
        assert_eq!(
            RuleViolation::type_mismatch("age", FieldType::Number).to_string(),
            "age should be of type number."
        );
        assert_eq!(
            RuleViolation::too_short("name", 1).to_string(),
            "name should have a minimum length of 1."
        );
        assert_eq!(
            RuleViolation::too_long("email", 50).to_string(),
            "email should have a maximum length of 50."
        );
    }

    #[test]
    fn test_nested_path() {
        let violation = RuleViolation::nested(
            "address",
            RuleViolation::nested("street", RuleViolation::required("house")),
        );

        assert_eq!(violation.to_string(), "address.street.house is required.");
        assert_eq!(violation.path(), "address.street.house");
    }
}
