//! Per-field validation rules.
//!
//! Each rule takes one normalized value and returns at most one
//! [`FieldError`]. Blank names, emails, CPFs and phones have nothing to
//! validate and pass; gender and birth date must be present.

use crate::normalize::{COUNTRY_CODE, is_blank};
use chrono::NaiveDate;
use contacts_core::{ContactRecord, FieldError, GenderField, NameField};
use regex::Regex;
use std::sync::LazyLock;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}+$").expect("Invalid regex pattern"));
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid regex pattern"));
static CPF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{11}$").expect("Invalid regex pattern"));
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10,11}$").expect("Invalid regex pattern"));

/// Runs every field rule against a record.
///
/// Failures are returned in column order: first name, last name, email,
/// CPF, phone, gender, birth date.
pub fn validate_contact(contact: &ContactRecord) -> Vec<FieldError> {
    [
        validate_name(&contact.first_name, NameField::FirstName),
        validate_name(&contact.last_name, NameField::LastName),
        validate_email(&contact.email),
        validate_document_number(&contact.document_number),
        validate_phone(&contact.phone),
        validate_gender(&contact.gender),
        validate_birth_date(contact.birth_date),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Names may only contain letters (any script).
pub fn validate_name(value: &str, field: NameField) -> Option<FieldError> {
    (!is_blank(value) && !NAME_PATTERN.is_match(value)).then_some(FieldError::InvalidName(field))
}

/// Emails must look like `local@domain.tld` with no whitespace.
pub fn validate_email(email: &str) -> Option<FieldError> {
    (!is_blank(email) && !EMAIL_PATTERN.is_match(email)).then_some(FieldError::InvalidEmail)
}

/// CPFs must be exactly 11 digits, no punctuation.
pub fn validate_document_number(cpf: &str) -> Option<FieldError> {
    (!is_blank(cpf) && !CPF_PATTERN.is_match(cpf)).then_some(FieldError::InvalidDocumentNumber)
}

/// Phones must carry 10 or 11 digits (area code included) after the country code.
///
/// Expects the normalized form. The country code is only stripped when
/// something follows it, so a bare `"55"` is checked as-is and fails.
pub fn validate_phone(phone: &str) -> Option<FieldError> {
    let national = match phone.strip_prefix(COUNTRY_CODE) {
        Some(rest) if phone.chars().count() >= 3 => rest,
        _ => phone,
    };

    (!is_blank(national) && !PHONE_PATTERN.is_match(national)).then_some(FieldError::InvalidPhone)
}

/// Gender must be a recognized code.
///
/// Blank cells are rejected too.
// TODO: confirm with the product owner whether a blank gender should pass.
pub fn validate_gender(gender: &GenderField) -> Option<FieldError> {
    match gender {
        GenderField::Valid(_) => None,
        GenderField::Invalid(_) | GenderField::Absent => Some(FieldError::InvalidGender),
    }
}

/// Birth date is mandatory; blank and unparseable dates both fail.
pub fn validate_birth_date(birth_date: Option<NaiveDate>) -> Option<FieldError> {
    birth_date.is_none().then_some(FieldError::InvalidBirthDate)
}
