//! Builder pattern for creating schemas.
//!
//! This module provides ergonomic builders for constructing schemas
//! and their field rules with a fluent API.

use crate::{FieldRules, FieldType, Pattern, Result, Schema, SchemaError};

/// Builder for creating a `Schema`.
///
/// # Example
///
/// ```rust
/// use records_core::{FieldRulesBuilder, FieldType, SchemaBuilder};
///
/// let schema = SchemaBuilder::new()
///     .field("name", FieldRulesBuilder::new().field_type(FieldType::String).min_length(1).build())
///     .field("age", FieldRulesBuilder::new().field_type(FieldType::Number).build())
///     .field(
///         "address",
///         FieldRulesBuilder::new()
///             .schema(
///                 SchemaBuilder::new()
///                     .field("city", FieldRulesBuilder::new().field_type(FieldType::String).build())
///                     .build(),
///             )
///             .build(),
///     )
///     .build();
///
/// assert_eq!(schema.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    /// Creates a new, empty schema builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field. Declaration order is kept.
    pub fn field(mut self, name: impl Into<String>, rules: FieldRules) -> Self {
        self.schema.insert(name, rules);
        self
    }

    /// Builds the schema.
    pub fn build(self) -> Schema {
        self.schema
    }
}

/// Builder for creating `FieldRules`.
///
/// # Example
///
/// ```rust
/// use records_core::{FieldRulesBuilder, FieldType};
///
/// let rules = FieldRulesBuilder::new()
///     .field_type(FieldType::String)
///     .max_length(50)
///     .pattern_str("email", r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
///     .unwrap()
///     .build();
///
/// assert_eq!(rules.max_length, Some(50));
/// ```
#[derive(Debug, Default)]
pub struct FieldRulesBuilder {
    rules: FieldRules,
}

impl FieldRulesBuilder {
    /// Creates a new field rules builder with no rules set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the field optional.
    pub fn optional(mut self, optional: bool) -> Self {
        self.rules.optional = optional;
        self
    }

    /// Sets the expected type.
    pub fn field_type(mut self, field_type: FieldType) -> Self {
        self.rules.field_type = Some(field_type);
        self
    }

    /// Sets an already compiled pattern.
    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.rules.pattern = Some(pattern);
        self
    }

    /// Compiles and sets a pattern. `field` is only used in the error.
    pub fn pattern_str(self, field: &str, pattern: &str) -> Result<Self> {
        let compiled = Pattern::new(pattern).map_err(|e| SchemaError::InvalidPattern {
            field: field.to_string(),
            message: e.to_string(),
        })?;
        Ok(self.pattern(compiled))
    }

    /// Sets the minimum length.
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.rules.min_length = Some(min_length);
        self
    }

    /// Sets the maximum length.
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.rules.max_length = Some(max_length);
        self
    }

    /// Requires the value to equal the sibling field `other`.
    pub fn equal(mut self, other: impl Into<String>) -> Self {
        self.rules.equal = Some(other.into());
        self
    }

    /// Sets a nested schema.
    pub fn schema(mut self, schema: Schema) -> Self {
        self.rules.schema = Some(schema);
        self
    }

    /// Builds the field rules.
    pub fn build(self) -> FieldRules {
        self.rules
    }
}
