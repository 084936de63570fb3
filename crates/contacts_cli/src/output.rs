use anyhow::{Context, Result};
use colored::*;
use contacts_core::ValidationReport;
use serde_json::json;

pub fn print_validation_report(report: &ValidationReport, file: &str, format: &str) -> Result<()> {
    match format {
        "json" => print_json_report(report, file),
        _ => {
            print_text_report(report, file);
            Ok(())
        }
    }
}

fn print_text_report(report: &ValidationReport, file: &str) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  CONTACTS VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));
    println!("  File: {}", file);

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

    if !report.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for (i, error) in report.errors.iter().enumerate() {
            println!("  {}. {}", i + 1, error.red());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Rows validated:   {}", report.stats.rows_validated);
    println!("  Rows with errors: {}", report.stats.rows_with_errors);
    println!("  Total errors:     {}", report.errors.len());
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &ValidationReport, file: &str) -> Result<()> {
    let output = json!({
        "file": file,
        "passed": report.passed,
        "errors": report.errors,
        "error_count": report.errors.len(),
        "stats": report.stats,
    });

    let rendered =
        serde_json::to_string_pretty(&output).context("Failed to serialize validation report")?;
    println!("{}", rendered);
    Ok(())
}
