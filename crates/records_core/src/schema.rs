//! Schema types.
//!
//! A [`Schema`] maps field names to [`FieldRules`]. Fields keep their
//! declaration order, which is the order in which they are validated and
//! therefore the order of reported errors.

use crate::{DataValue, Pattern, SchemaError, ValueKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declarative description of the expected shape of a record.
///
/// # Example
///
/// ```rust
/// use records_core::{FieldRules, FieldType, Schema};
///
/// let mut schema = Schema::new();
/// schema.insert("name", FieldRules::of_type(FieldType::String));
/// assert_eq!(schema.len(), 1);
/// assert!(schema.contains("name"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: IndexMap<String, FieldRules>,
}

impl Schema {
    /// Creates an empty schema. An empty schema accepts any record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the rules for a field.
    pub fn insert(&mut self, name: impl Into<String>, rules: FieldRules) {
        self.fields.insert(name.into(), rules);
    }

    /// Returns the rules declared for a field.
    pub fn get(&self, name: &str) -> Option<&FieldRules> {
        self.fields.get(name)
    }

    /// Returns true if the schema declares the field.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterates over the declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldRules)> {
        self.fields.iter().map(|(name, rules)| (name.as_str(), rules))
    }

    /// Number of fields declared at this level.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields declared at this level and in all nested schemas.
    pub fn total_fields(&self) -> usize {
        self.fields
            .values()
            .map(|rules| 1 + rules.schema.as_ref().map_or(0, Schema::total_fields))
            .sum()
    }

    /// Number of enforced rules, including nested schemas.
    pub fn total_rules(&self) -> usize {
        self.fields
            .values()
            .map(|rules| {
                rules.rule_count() + rules.schema.as_ref().map_or(0, Schema::total_rules)
            })
            .sum()
    }

    /// Deepest level of nesting (a flat schema has depth 1, an empty one 0).
    pub fn depth(&self) -> usize {
        self.fields
            .values()
            .map(|rules| 1 + rules.schema.as_ref().map_or(0, Schema::depth))
            .max()
            .unwrap_or(0)
    }
}

impl FromIterator<(String, FieldRules)> for Schema {
    fn from_iter<T: IntoIterator<Item = (String, FieldRules)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Expected runtime type of a field.
///
/// Type names are case-insensitive in schema documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl FieldType {
    /// Returns the name used in schema documents and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Object => "object",
            FieldType::Array => "array",
        }
    }

    /// Returns true if the value's runtime kind is this type.
    pub fn matches(&self, value: &DataValue) -> bool {
        matches!(
            (self, value.kind()),
            (FieldType::String, ValueKind::String)
                | (FieldType::Number, ValueKind::Number)
                | (FieldType::Boolean, ValueKind::Boolean)
                | (FieldType::Object, ValueKind::Object)
                | (FieldType::Array, ValueKind::Array)
        )
    }

    /// Returns true if values of this type expose a length.
    pub fn has_length(&self) -> bool {
        matches!(self, FieldType::String | FieldType::Array)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "string" => Ok(FieldType::String),
            "number" => Ok(FieldType::Number),
            "boolean" => Ok(FieldType::Boolean),
            "object" => Ok(FieldType::Object),
            "array" => Ok(FieldType::Array),
            other => Err(SchemaError::UnknownType(other.to_string())),
        }
    }
}

impl TryFrom<String> for FieldType {
    type Error = SchemaError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// Validation rules for a single field.
///
/// Every member is optional; a rule set with nothing set accepts any
/// present value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRules {
    /// Missing or null values are accepted
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub optional: bool,

    /// Expected runtime type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,

    /// Pattern string values must match (unanchored search)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,

    /// Minimum length for strings and arrays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Maximum length for strings and arrays
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Sibling field whose value must be equal to this one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equal: Option<String>,

    /// Nested schema; the field must be an object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,

    /// Numeric lower bound found in older schema files. Not enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Required marker found in older schema files. Not enforced: fields are
    /// required unless `optional` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl FieldRules {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a rule set that only checks the type.
    pub fn of_type(field_type: FieldType) -> Self {
        Self {
            field_type: Some(field_type),
            ..Self::default()
        }
    }

    /// Number of enforced checks this rule set carries, presence included.
    pub fn rule_count(&self) -> usize {
        1 + [
            self.pattern.is_some(),
            self.equal.is_some(),
            self.field_type.is_some(),
            self.min_length.is_some(),
            self.max_length.is_some(),
            self.schema.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}
