//! Validation report types.
//!
//! A report carries the ordered list of user-facing messages produced for one
//! file, along with a few counters about the run.

use crate::{ContactError, FieldError};
use serde::Serialize;
use std::fmt;

/// All field failures of a single row.
///
/// Renders as `Linha {row}: msg1; msg2; ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based row number, counting the header as row 1
    pub row: u64,

    /// Failed fields in evaluation order
    pub errors: Vec<FieldError>,
}

impl RowError {
    /// Creates a row error, or `None` if the row had no failures.
    pub fn new(row: u64, errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { row, errors })
        }
    }
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Linha {}: ", self.row)?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

/// Report of validation results for one file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Whether the file is fully valid
    pub passed: bool,

    /// Messages in the order they were produced
    pub errors: Vec<String>,

    /// Run statistics
    pub stats: ValidationStats,
}

/// Statistics about a validation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationStats {
    /// Number of data rows read (header excluded)
    pub rows_validated: usize,

    /// Number of data rows with at least one failed field
    pub rows_with_errors: usize,

    /// Number of required columns missing from the header
    pub missing_headers: usize,

    /// Validation duration in milliseconds
    pub duration_ms: u64,
}

impl ValidationReport {
    /// Creates a new successful validation report.
    pub fn success() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Creates a report holding a single file-level error.
    pub fn failure(error: &ContactError) -> Self {
        Self {
            passed: false,
            errors: vec![error.to_string()],
            stats: ValidationStats::default(),
        }
    }

    /// Adds a file-level error to the report.
    pub fn add_error(&mut self, error: &ContactError) {
        if matches!(error, ContactError::MissingHeader(_)) {
            self.stats.missing_headers += 1;
        }
        self.errors.push(error.to_string());
        self.passed = false;
    }

    /// Adds a row error to the report.
    pub fn add_row_error(&mut self, error: &RowError) {
        self.stats.rows_with_errors += 1;
        self.errors.push(error.to_string());
        self.passed = false;
    }

    /// Consumes the report, returning only the messages.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}
