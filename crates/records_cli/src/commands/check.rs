use anyhow::{Context, Result};
use records_core::{Schema, ValidationContext, ValidationReport};
use records_parser::parse_schema_file;
use records_validator::DataValidator;
use serde_json::json;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(schema_path: &str, strict: bool, format: &str) -> Result<()> {
    info!("Checking schema: {}", schema_path);

    let path = Path::new(schema_path);
    let schema = parse_schema_file(path)
        .with_context(|| format!("Failed to parse schema file: {}", schema_path))?;

    let context = ValidationContext::new().with_strict(strict);
    let report = DataValidator::new().validate_definition(&schema, &context);

    match format {
        "json" => print_json(&schema, &report)?,
        _ => print_text(&schema, &report),
    }

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}

fn print_text(schema: &Schema, report: &ValidationReport) {
    if report.passed {
        output::print_success("Schema is valid");
    } else {
        output::print_error("Schema check failed");
    }

    println!("\nSchema Summary:");
    println!("  Fields:       {}", schema.len());
    println!("  Total fields: {}", schema.total_fields());
    println!("  Rules:        {}", schema.total_rules());
    println!("  Depth:        {}", schema.depth());

    let optional: Vec<&str> = schema
        .fields()
        .filter(|(_, rules)| rules.optional)
        .map(|(name, _)| name)
        .collect();
    if !optional.is_empty() {
        println!("  Optional:     {}", optional.join(", "));
    }

    output::print_findings(report);
}

fn print_json(schema: &Schema, report: &ValidationReport) -> Result<()> {
    let output = json!({
        "passed": report.passed,
        "schema": schema,
        "errors": report.errors,
        "warnings": report.warnings,
        "summary": {
            "fields": schema.len(),
            "total_fields": schema.total_fields(),
            "rules": schema.total_rules(),
            "depth": schema.depth(),
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
