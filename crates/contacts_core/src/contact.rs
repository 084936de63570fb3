//! Contact record types.
//!
//! This module contains the structured form of one input row after its raw
//! fields have been normalized. Records are built once per row, handed to the
//! field validators and then dropped.

use chrono::NaiveDate;
use std::fmt;

/// A recognized gender code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// `FEMININO`
    Feminine,
    /// `MASCULINO`
    Masculine,
}

impl Gender {
    /// Every recognized gender, in the order codes are matched.
    pub const ALL: [Gender; 2] = [Gender::Feminine, Gender::Masculine];

    /// Returns the canonical (uppercase) code used in input files.
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Feminine => "FEMININO",
            Gender::Masculine => "MASCULINO",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The gender column after mapping.
///
/// Keeps "nothing was given" apart from "something unrecognized was given",
/// so callers can tell a blank cell from a typo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenderField {
    /// Blank or whitespace-only cell
    Absent,
    /// Non-blank text that is not a recognized code (raw text kept)
    Invalid(String),
    /// A recognized code
    Valid(Gender),
}

/// One contact row after normalization.
///
/// Name, email and document number are carried verbatim. The phone is in
/// "country code + digits" form, gender is mapped and the birth date parsed.
///
/// # Example
///
/// ```rust
/// use contacts_core::{ContactRecordBuilder, Gender, GenderField};
///
/// let record = ContactRecordBuilder::new("Maria", "Silva")
///     .email("maria@example.com")
///     .document_number("12345678901")
///     .phone("5511987654321")
///     .gender(GenderField::Valid(Gender::Feminine))
///     .build();
///
/// assert_eq!(record.first_name, "Maria");
/// assert!(record.birth_date.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Email address
    pub email: String,

    /// CPF document number
    pub document_number: String,

    /// Phone number, normalized with the country code prefix
    pub phone: String,

    /// Mapped gender code
    pub gender: GenderField,

    /// Parsed birth date; `None` when blank or unparseable
    pub birth_date: Option<NaiveDate>,
}
