//! Record validation.
//!
//! Each schema field runs through a fixed pipeline:
//!
//! 1. presence (missing or null; the only check that stops the pipeline)
//! 2. pattern (strings only)
//! 3. equality with a sibling field
//! 4. type
//! 5. minimum length
//! 6. maximum length
//! 7. nested schema (recursive, with dotted paths)
//!
//! Checks 2 to 7 are independent, so one field can report several
//! violations in a single pass.

use records_core::{DataValue, FieldRules, FieldType, Record, RuleViolation, Schema};
use tracing::trace;

/// Validates records against a schema.
///
/// The validator holds no state: every call, including every nested
/// recursion, collects into its own list.
///
/// # Example
///
/// ```rust
/// use records_core::{DataValue, FieldRulesBuilder, FieldType, SchemaBuilder};
/// use records_validator::RecordValidator;
/// use serde_json::json;
///
/// let schema = SchemaBuilder::new()
///     .field("age", FieldRulesBuilder::new().field_type(FieldType::Number).build())
///     .build();
/// let data = DataValue::from(json!({ "age": "25" })).into_record().unwrap();
///
/// let violations = RecordValidator::new().validate(&data, &schema);
/// assert_eq!(violations[0].to_string(), "age should be of type number.");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordValidator;

impl RecordValidator {
    /// Creates a new record validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates a record against the schema.
    ///
    /// Fields are visited in schema order; an empty result means the record
    /// is valid.
    pub fn validate(&self, data: &Record, schema: &Schema) -> Vec<RuleViolation> {
        let mut violations = Vec::new();

        for (name, rules) in schema.fields() {
            violations.extend(self.validate_field(name, data.get(name), rules, data));
        }

        violations
    }

    /// Runs the pipeline for a single field.
    ///
    /// `value` is `None` when the field is absent from `data`; `data` is the
    /// record the field belongs to, used to resolve `equal`.
    pub fn validate_field(
        &self,
        name: &str,
        value: Option<&DataValue>,
        rules: &FieldRules,
        data: &Record,
    ) -> Vec<RuleViolation> {
        let value = match value {
            Some(value) if !value.is_null() => value,
            _ if rules.optional => return Vec::new(),
            _ => return vec![RuleViolation::required(name)],
        };

        [
            check_pattern(name, value, rules),
            check_equality(name, value, rules, data),
            check_type(name, value, rules),
            check_min_length(name, value, rules),
            check_max_length(name, value, rules),
        ]
        .into_iter()
        .flatten()
        .chain(check_nested(name, value, rules))
        .collect()
    }
}

/// Validates `data` against `schema` and renders every violation.
///
/// # Example
///
/// ```rust
/// use records_core::{DataValue, FieldRulesBuilder, FieldType, SchemaBuilder};
/// use records_validator::validate;
/// use serde_json::json;
///
/// let schema = SchemaBuilder::new()
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
/// let data = DataValue::from(json!({ "address": { "city": 5 } }))
///     .into_record()
///     .unwrap();
///
/// assert_eq!(validate(&data, &schema), vec!["address.city should be of type string."]);
/// ```
pub fn validate(data: &Record, schema: &Schema) -> Vec<String> {
    RecordValidator::new()
        .validate(data, schema)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Pattern check. Applies only to string values.
pub fn check_pattern(name: &str, value: &DataValue, rules: &FieldRules) -> Option<RuleViolation> {
    let pattern = rules.pattern.as_ref()?;
    let text = value.as_str()?;

    (!pattern.is_match(text)).then(|| RuleViolation::pattern_mismatch(name))
}

/// Equality check against the sibling field named by `equal`.
///
/// A sibling that is absent never equals a present value.
pub fn check_equality(
    name: &str,
    value: &DataValue,
    rules: &FieldRules,
    data: &Record,
) -> Option<RuleViolation> {
    let other = rules.equal.as_deref()?;

    (data.get(other) != Some(value)).then(|| RuleViolation::not_equal(name, other))
}

/// Type check.
pub fn check_type(name: &str, value: &DataValue, rules: &FieldRules) -> Option<RuleViolation> {
    let expected = rules.field_type?;

    (!expected.matches(value)).then(|| RuleViolation::type_mismatch(name, expected))
}

/// Minimum length check. Skipped for values without a length.
pub fn check_min_length(
    name: &str,
    value: &DataValue,
    rules: &FieldRules,
) -> Option<RuleViolation> {
    let min = rules.min_length?;
    let length = value.length()?;

    (length < min).then(|| RuleViolation::too_short(name, min))
}

/// Maximum length check. Skipped for values without a length.
pub fn check_max_length(
    name: &str,
    value: &DataValue,
    rules: &FieldRules,
) -> Option<RuleViolation> {
    let max = rules.max_length?;
    let length = value.length()?;

    (length > max).then(|| RuleViolation::too_long(name, max))
}

/// Nested schema check.
///
/// Objects are validated recursively with a fresh validator and every
/// nested violation is wrapped with `name`. Any other value is a type
/// violation.
pub fn check_nested(name: &str, value: &DataValue, rules: &FieldRules) -> Vec<RuleViolation> {
    let Some(schema) = rules.schema.as_ref() else {
        return Vec::new();
    };

    match value.as_object() {
        Some(nested) => {
            trace!("descending into nested object '{}'", name);
            RecordValidator::new()
                .validate(nested, schema)
                .into_iter()
                .map(|violation| RuleViolation::nested(name, violation))
                .collect()
        }
        None => vec![RuleViolation::type_mismatch(name, FieldType::Object)],
    }
}
