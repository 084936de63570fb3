//! Main validation engine.
//!
//! This module provides the `ContactValidator` that drives a full run over a
//! contacts file: file checks, header check, then mapping and validating
//! every row while collecting messages.

use crate::{check_headers, map_contact, validate_contact};
use contacts_core::{ContactError, RowError, ValidationReport};
use contacts_parser::{ContactReader, ParserError, check_exists, check_extension};
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Validates a contacts file and returns its messages.
///
/// This is the single entry point hosts need. It never fails: every problem,
/// including unreadable files, is returned as a message. An empty list means
/// the file is valid.
///
/// # Example
///
/// ```no_run
/// let errors = contacts_validator::validate_csv("contacts.csv");
///
/// for error in &errors {
///     println!("{}", error);
/// }
/// ```
pub fn validate_csv(path: impl AsRef<Path>) -> Vec<String> {
    ContactValidator::new().validate_file(path).into_errors()
}

/// Validation engine for contacts files.
///
/// Runs, in order:
///
/// 1. Extension check: anything but `.csv` stops the run with a single error.
/// 2. Existence check: a missing file stops the run with a single error.
/// 3. Header check: missing columns are reported, rows are still validated.
/// 4. Row validation: one aggregated message per row with failed fields.
///
/// A read or tokenizer failure at any point adds one processing error and
/// ends the run; messages collected before it are kept.
///
/// # Example
///
/// ```rust
/// use contacts_validator::ContactValidator;
///
/// let data = "firstname;lastname;email;cpf;phone;gender;birthDay\n\
///             Maria;Silva;bad-email;12345678901;11987654321;FEMININO;17/05/1990\n";
///
/// let report = ContactValidator::new().validate_reader(data.as_bytes());
///
/// assert!(!report.passed);
/// assert_eq!(report.errors, vec!["Linha 2: Email deve estar em um formato válido."]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ContactValidator;

impl ContactValidator {
    /// Creates a new contact validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates a contacts file on disk.
    pub fn validate_file(&self, path: impl AsRef<Path>) -> ValidationReport {
        let start = Instant::now();
        let path = path.as_ref();
        info!("Validating contacts file: {}", path.display());

        let report = match self.open(path) {
            Ok(reader) => self.validate_rows(reader),
            Err(error) => {
                warn!("Validation stopped: {}", error);
                ValidationReport::failure(&error)
            }
        };

        self.finish(report, start)
    }

    /// Validates contacts data from any reader.
    ///
    /// Skips the extension and existence checks; everything from the header
    /// onward behaves as in [`validate_file`](Self::validate_file).
    pub fn validate_reader<R: Read>(&self, source: R) -> ValidationReport {
        let start = Instant::now();

        let report = match ContactReader::from_reader(source) {
            Ok(reader) => self.validate_rows(reader),
            Err(error) => {
                warn!("Validation stopped: {}", error);
                ValidationReport::failure(&ContactError::processing(error))
            }
        };

        self.finish(report, start)
    }

    fn open(&self, path: &Path) -> Result<ContactReader<std::fs::File>, ContactError> {
        check_extension(path).map_err(|error| {
            debug!("{}", error);
            ContactError::InvalidExtension
        })?;
        check_exists(path).map_err(|error| {
            debug!("{}", error);
            ContactError::FileNotFound
        })?;
        ContactReader::open(path).map_err(ContactError::processing)
    }

    /// Checks the header, then validates every row.
    fn validate_rows<R: Read>(&self, reader: ContactReader<R>) -> ValidationReport {
        let mut report = ValidationReport::success();

        for error in check_headers(reader.headers()) {
            debug!("{}", error);
            report.add_error(&error);
        }

        for result in reader {
            let row = match result {
                Ok(row) => row,
                Err(error) => {
                    self.abort(&mut report, error);
                    break;
                }
            };

            report.stats.rows_validated += 1;
            let contact = map_contact(&row);

            if let Some(row_error) = RowError::new(row.row(), validate_contact(&contact)) {
                debug!("Row {} rejected: {} field(s)", row_error.row, row_error.errors.len());
                report.add_row_error(&row_error);
            }
        }

        report
    }

    fn abort(&self, report: &mut ValidationReport, error: ParserError) {
        warn!(
            "Validation stopped after {} row(s): {}",
            report.stats.rows_validated, error
        );
        report.add_error(&ContactError::processing(error));
    }

    fn finish(&self, mut report: ValidationReport, start: Instant) -> ValidationReport {
        report.stats.duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        info!(
            "Validated {} row(s): {} with errors, {} message(s)",
            report.stats.rows_validated,
            report.stats.rows_with_errors,
            report.errors.len()
        );

        report
    }
}
