use anyhow::Result;
use colored::*;
use records_core::ValidationReport;
use serde_json::json;

pub fn print_validation_report(report: &ValidationReport, format: &str) -> Result<()> {
    match format {
        "json" => print_json_report(report)?,
        _ => print_text_report(report),
    }
    Ok(())
}

fn print_text_report(report: &ValidationReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    print_findings(report);

    println!("\n{}", "Summary:".bold());
    println!("  Records validated: {}", report.stats.records_validated);
    println!("  Total errors:      {}", report.errors.len());
    println!("  Total warnings:    {}", report.warnings.len());
    println!("{}", "═".repeat(60));
}

/// Prints the numbered error and warning lists, if any.
pub fn print_findings(report: &ValidationReport) {
    if !report.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for (i, error) in report.errors.iter().enumerate() {
            println!("  {}. {}", i + 1, error.red());
        }
    }

    if !report.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for (i, warning) in report.warnings.iter().enumerate() {
            println!("  {}. {}", i + 1, warning.yellow());
        }
    }
}

fn print_json_report(report: &ValidationReport) -> Result<()> {
    let output = json!({
        "passed": report.passed,
        "errors": report.errors,
        "warnings": report.warnings,
        "summary": {
            "records_validated": report.stats.records_validated,
            "fields_checked": report.stats.fields_checked,
            "rules_evaluated": report.stats.rules_evaluated,
            "error_count": report.errors.len(),
            "warning_count": report.warnings.len(),
            "duration_ms": report.stats.duration_ms,
        }
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
