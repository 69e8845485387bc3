//! Schema definition checks.
//!
//! Validation never rejects a schema, but some rule combinations are almost
//! certainly mistakes. The linter reports them with the dotted path of the
//! field so they can be fixed at the source.

use crate::LintWarning;
use records_core::{FieldRules, FieldType, Schema};

/// Inspects schema definitions for dead or contradictory rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaLinter;

impl SchemaLinter {
    /// Creates a new schema linter.
    pub fn new() -> Self {
        Self
    }

    /// Lints the schema and every nested schema.
    ///
    /// Warnings are returned in schema order, parents before children.
    pub fn lint(&self, schema: &Schema) -> Vec<LintWarning> {
        let mut warnings = Vec::new();
        self.lint_level(schema, None, &mut warnings);
        warnings
    }

    fn lint_level(&self, schema: &Schema, parent: Option<&str>, out: &mut Vec<LintWarning>) {
        for (name, rules) in schema.fields() {
            let path = match parent {
                Some(parent) => format!("{parent}.{name}"),
                None => name.to_string(),
            };

            self.lint_field(&path, rules, schema, out);

            if let Some(nested) = &rules.schema {
                self.lint_level(nested, Some(&path), out);
            }
        }
    }

    fn lint_field(
        &self,
        path: &str,
        rules: &FieldRules,
        siblings: &Schema,
        out: &mut Vec<LintWarning>,
    ) {
        if rules.min.is_some() {
            out.push(LintWarning::UnenforcedKey {
                path: path.to_string(),
                key: "min",
            });
        }
        if rules.required.is_some() {
            out.push(LintWarning::UnenforcedKey {
                path: path.to_string(),
                key: "required",
            });
        }

        if let Some(field_type) = rules.field_type {
            let has_bounds = rules.min_length.is_some() || rules.max_length.is_some();
            if has_bounds && !field_type.has_length() {
                out.push(LintWarning::LengthNotApplicable {
                    path: path.to_string(),
                    field_type,
                });
            }
            if rules.schema.is_some() && field_type != FieldType::Object {
                out.push(LintWarning::NestedTypeConflict {
                    path: path.to_string(),
                    field_type,
                });
            }
            if rules.pattern.is_some() && field_type != FieldType::String {
                out.push(LintWarning::PatternOnNonString {
                    path: path.to_string(),
                    field_type,
                });
            }
        }

        if let (Some(min), Some(max)) = (rules.min_length, rules.max_length) {
            if min > max {
                out.push(LintWarning::InvertedLengthBounds {
                    path: path.to_string(),
                    min,
                    max,
                });
            }
        }

        if let Some(target) = &rules.equal {
            if !siblings.contains(target) {
                out.push(LintWarning::UnknownEqualTarget {
                    path: path.to_string(),
                    target: target.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use records_parser::parse_schema_yaml;

    #[test]
    fn test_clean_schema_has_no_warnings() {
        let schema = parse_schema_yaml(
            r#"
name: { type: string, minLength: 1, maxLength: 20 }
tags: { type: array, maxLength: 5 }
password: { type: string, pattern: '\d' }
passwordConfirmation: { equal: password }
address:
  type: object
  schema:
    city: { type: string }
"#,
        )
        .unwrap();

        assert!(SchemaLinter::new().lint(&schema).is_empty());
    }

    #[test]
    fn test_unenforced_keys() {
        let schema = parse_schema_yaml(
            r#"
title: { required: true, type: string, minLength: 2 }
amount: { type: number, min: 10 }
"#,
        )
        .unwrap();

        assert_eq!(
            SchemaLinter::new().lint(&schema),
            vec![
                LintWarning::UnenforcedKey {
                    path: "title".to_string(),
                    key: "required"
                },
                LintWarning::UnenforcedKey {
                    path: "amount".to_string(),
                    key: "min"
                },
            ]
        );
    }

    #[test]
    fn test_length_on_number_in_nested_schema() {
        let schema = parse_schema_yaml(
            r#"
address:
  schema:
    street:
      schema:
        floor: { type: number, minLength: 1 }
"#,
        )
        .unwrap();

        let warnings = SchemaLinter::new().lint(&schema);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path(), "address.street.floor");
        assert_eq!(
            warnings[0].to_string(),
            "Field 'address.street.floor' has length bounds but values of type number have no length"
        );
    }

    #[test]
    fn test_contradictory_rules() {
        let schema = parse_schema_yaml(
            r#"
code: { minLength: 5, maxLength: 2 }
profile: { type: string, schema: {} }
age: { type: number, pattern: '^\d+$' }
confirm: { equal: secret }
"#,
        )
        .unwrap();

        let warnings = SchemaLinter::new().lint(&schema);
        assert_eq!(
            warnings,
            vec![
                LintWarning::InvertedLengthBounds {
                    path: "code".to_string(),
                    min: 5,
                    max: 2
                },
                LintWarning::NestedTypeConflict {
                    path: "profile".to_string(),
                    field_type: FieldType::String
                },
                LintWarning::PatternOnNonString {
                    path: "age".to_string(),
                    field_type: FieldType::Number
                },
                LintWarning::UnknownEqualTarget {
                    path: "confirm".to_string(),
                    target: "secret".to_string()
                },
            ]
        );
    }
}
