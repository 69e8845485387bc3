//! Warning types for schema linting.

use records_core::FieldType;
use thiserror::Error;

/// Problems found in a schema definition.
///
/// None of these stop validation; they point at rules that can never fire,
/// always fire, or are not enforced at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LintWarning {
    /// Key accepted for compatibility but never enforced
    #[error("Field '{path}' uses '{key}', which is not enforced")]
    UnenforcedKey { path: String, key: &'static str },

    /// Length bounds on a type without a length
    #[error("Field '{path}' has length bounds but values of type {field_type} have no length")]
    LengthNotApplicable { path: String, field_type: FieldType },

    /// minLength greater than maxLength
    #[error("Field '{path}' has minLength {min} greater than maxLength {max}")]
    InvertedLengthBounds { path: String, min: usize, max: usize },

    /// `equal` names a field the schema does not declare
    #[error("Field '{path}' must equal '{target}', which is not declared alongside it")]
    UnknownEqualTarget { path: String, target: String },

    /// Nested schema on a field whose type is not object
    #[error("Field '{path}' has a nested schema but type {field_type}")]
    NestedTypeConflict { path: String, field_type: FieldType },

    /// Pattern on a field whose type is not string
    #[error("Field '{path}' has a pattern but type {field_type}")]
    PatternOnNonString { path: String, field_type: FieldType },
}

impl LintWarning {
    /// Dotted path of the field the warning is about.
    pub fn path(&self) -> &str {
        match self {
            Self::UnenforcedKey { path, .. }
            | Self::LengthNotApplicable { path, .. }
            | Self::InvertedLengthBounds { path, .. }
            | Self::UnknownEqualTarget { path, .. }
            | Self::NestedTypeConflict { path, .. }
            | Self::PatternOnNonString { path, .. } => path,
        }
    }
}
