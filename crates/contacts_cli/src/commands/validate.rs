use anyhow::Result;
use contacts_validator::ContactValidator;
use tracing::info;

use crate::output;

pub fn execute(file_path: &str, format: &str) -> Result<()> {
    info!("Output format: {}", format);

    let report = ContactValidator::new().validate_file(file_path);

    output::print_validation_report(&report, file_path, format)?;

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}
