//! Main validation engine.
//!
//! This module provides the `DataValidator` that runs the schema linter and
//! the record pipeline over a dataset and produces a `ValidationReport`.

use crate::{RecordValidator, SchemaLinter};
use records_core::{DataSet, Schema, ValidationContext, ValidationReport, ValidationStats};
use std::time::Instant;
use tracing::{debug, info, trace};

/// Main validation engine for datasets.
///
/// # Example
///
/// ```rust
/// use records_core::ValidationContext;
/// use records_parser::{parse_data_json, parse_schema_yaml};
/// use records_validator::DataValidator;
///
/// let schema = parse_schema_yaml("name: { type: string }").unwrap();
/// let dataset = parse_data_json(r#"[{"name": "Ada"}, {"name": 7}]"#).unwrap();
///
/// let report = DataValidator::new().validate_with_data(&schema, &dataset, &ValidationContext::new());
///
/// assert!(!report.passed);
/// assert_eq!(report.errors, vec!["[1] name should be of type string."]);
/// ```
#[derive(Debug, Default)]
pub struct DataValidator {
    record_validator: RecordValidator,
    linter: SchemaLinter,
}

impl DataValidator {
    /// Creates a new data validator.
    pub fn new() -> Self {
        Self {
            record_validator: RecordValidator::new(),
            linter: SchemaLinter::new(),
        }
    }

    /// Validates every record of a dataset against a schema.
    ///
    /// Schema lint findings are warnings, or errors in strict mode. When the
    /// dataset holds more than one record, each error is prefixed with the
    /// record index, e.g. `[2] age should be of type number.`
    ///
    /// # Arguments
    ///
    /// * `schema` - The schema to validate against
    /// * `dataset` - The records to validate
    /// * `context` - Validation context with options
    pub fn validate_with_data(
        &self,
        schema: &Schema,
        dataset: &DataSet,
        context: &ValidationContext,
    ) -> ValidationReport {
        let start = Instant::now();
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        // 1. Schema lint
        let findings = self.linter.lint(schema);
        for finding in &findings {
            debug!(path = finding.path(), "Schema lint: {}", finding);
        }
        let findings = findings.iter().map(|w| w.to_string());
        if context.strict {
            errors.extend(findings);
        } else {
            warnings.extend(findings);
        }

        // 2. Records
        let limit = context.sample_size.unwrap_or(usize::MAX);
        let indexed = dataset.len() > 1;
        let mut records_validated = 0;

        for (index, record) in dataset.records().take(limit).enumerate() {
            let violations = self.record_validator.validate(record, schema);
            debug!("Record {} produced {} violation(s)", index, violations.len());
            for violation in &violations {
                trace!(record = index, path = %violation.path(), "{}", violation);
            }

            errors.extend(violations.iter().map(|violation| {
                if indexed {
                    format!("[{}] {}", index, violation)
                } else {
                    violation.to_string()
                }
            }));
            records_validated += 1;
        }

        info!(
            "Validated {} record(s): {} error(s), {} warning(s)",
            records_validated,
            errors.len(),
            warnings.len()
        );

        self.build_report(errors, warnings, schema, records_validated, start)
    }

    /// Validates only the schema definition itself (no data).
    ///
    /// Lint findings are warnings, or errors in strict mode.
    pub fn validate_definition(
        &self,
        schema: &Schema,
        context: &ValidationContext,
    ) -> ValidationReport {
        let start = Instant::now();
        let mut report = ValidationReport::success();

        for warning in self.linter.lint(schema) {
            if context.strict {
                report.add_error(warning.to_string());
            } else {
                report.add_warning(warning.to_string());
            }
        }

        report.stats = ValidationStats {
            records_validated: 0,
            fields_checked: schema.total_fields(),
            rules_evaluated: 0,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        report
    }

    /// Builds a validation report from collected errors and warnings.
    fn build_report(
        &self,
        errors: Vec<String>,
        warnings: Vec<String>,
        schema: &Schema,
        records_validated: usize,
        start: Instant,
    ) -> ValidationReport {
        ValidationReport {
            passed: errors.is_empty(),
            errors,
            warnings,
            stats: ValidationStats {
                records_validated,
                fields_checked: schema.total_fields() * records_validated,
                rules_evaluated: schema.total_rules() * records_validated,
                duration_ms: start.elapsed().as_millis() as u64,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use records_parser::{parse_data_json, parse_schema_yaml};

    fn schema() -> Schema {
        parse_schema_yaml(
            r#"
name: { type: string, minLength: 1 }
age: { type: number }
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_single_record_messages_are_not_indexed() {
        let dataset = parse_data_json(r#"{"name": "", "age": "25"}"#).unwrap();
        let report =
            DataValidator::new().validate_with_data(&schema(), &dataset, &ValidationContext::new());

        assert!(!report.passed);
        assert_eq!(
            report.errors,
            vec![
                "name should have a minimum length of 1.",
                "age should be of type number."
            ]
        );
        assert_eq!(report.stats.records_validated, 1);
        assert_eq!(report.stats.fields_checked, 2);
        assert_eq!(report.stats.rules_evaluated, 5);
    }

    #[test]
    fn test_multiple_records_are_indexed() {
        let dataset = parse_data_json(
            r#"[{"name": "Ada", "age": 36}, {"age": 1}, {"name": "Bob", "age": null}]"#,
        )
        .unwrap();
        let report =
            DataValidator::new().validate_with_data(&schema(), &dataset, &ValidationContext::new());

        assert_eq!(
            report.errors,
            vec!["[1] name is required.", "[2] age is required."]
        );
        assert_eq!(report.stats.records_validated, 3);
    }

    #[test]
    fn test_sample_size_limits_records() {
        let dataset =
            parse_data_json(r#"[{"name": "Ada", "age": 36}, {}, {}]"#).unwrap();
        let context = ValidationContext::new().with_sample_size(1);

        let report = DataValidator::new().validate_with_data(&schema(), &dataset, &context);

        assert!(report.passed);
        assert_eq!(report.stats.records_validated, 1);
    }

    #[test]
    fn test_empty_dataset_passes() {
        let report = DataValidator::new().validate_with_data(
            &schema(),
            &DataSet::empty(),
            &ValidationContext::new(),
        );

        assert!(report.passed);
        assert_eq!(report.stats.records_validated, 0);
    }

    #[test]
    fn test_lint_findings_are_warnings_unless_strict() {
        let schema = parse_schema_yaml("age: { type: number, min: 18 }").unwrap();
        let dataset = parse_data_json(r#"{"age": 25}"#).unwrap();
        let validator = DataValidator::new();

        let lenient = validator.validate_with_data(&schema, &dataset, &ValidationContext::new());
        assert!(lenient.passed);
        assert_eq!(
            lenient.warnings,
            vec!["Field 'age' uses 'min', which is not enforced"]
        );

        let strict = validator.validate_with_data(
            &schema,
            &dataset,
            &ValidationContext::new().with_strict(true),
        );
        assert!(!strict.passed);
        assert_eq!(strict.errors.len(), 1);
        assert!(strict.warnings.is_empty());
    }

    #[test]
    fn test_validate_definition() {
        let schema = parse_schema_yaml(
            r#"
title: { required: true, type: string }
address:
  schema:
    city: { type: string }
"#,
        )
        .unwrap();
        let validator = DataValidator::new();

        let report = validator.validate_definition(&schema, &ValidationContext::new());
        assert!(report.passed);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.stats.fields_checked, 3);

        let strict =
            validator.validate_definition(&schema, &ValidationContext::new().with_strict(true));
        assert!(!strict.passed);
    }
}
