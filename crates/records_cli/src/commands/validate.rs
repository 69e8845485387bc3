use anyhow::{Context, Result};
use records_core::ValidationContext;
use records_parser::{parse_data_file, parse_schema_file};
use records_validator::DataValidator;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(
    schema_path: &str,
    data_path: &str,
    strict: bool,
    sample_size: Option<usize>,
    format: &str,
) -> Result<()> {
    info!("Validating {} against schema {}", data_path, schema_path);
    info!("Strict mode: {}", strict);
    if let Some(size) = sample_size {
        info!("Sample size: {}", size);
    }

    let schema = parse_schema_file(Path::new(schema_path))
        .with_context(|| format!("Failed to parse schema file: {}", schema_path))?;

    let dataset = parse_data_file(Path::new(data_path))
        .with_context(|| format!("Failed to parse data file: {}", data_path))?;

    if format != "json" {
        output::print_info(&format!(
            "Loaded schema with {} field(s) and {} record(s)",
            schema.len(),
            dataset.len()
        ));
    }

    let context = ValidationContext {
        strict,
        sample_size,
    };

    let report = DataValidator::new().validate_with_data(&schema, &dataset, &context);

    output::print_validation_report(&report, format)?;

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}
