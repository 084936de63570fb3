//! Builder for contact records.
//!
//! Provides a fluent API for assembling a [`ContactRecord`] field by field,
//! mostly useful for tests and for hosts that already hold normalized values.

use crate::{ContactRecord, GenderField};
use chrono::NaiveDate;

/// Builder for creating a `ContactRecord`.
///
/// Fields that are not set default to the empty string, an absent gender and
/// no birth date.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use contacts_core::ContactRecordBuilder;
///
/// let record = ContactRecordBuilder::new("João", "Souza")
///     .email("joao@example.com")
///     .birth_date(NaiveDate::from_ymd_opt(1990, 5, 17).unwrap())
///     .build();
///
/// assert_eq!(record.last_name, "Souza");
/// ```
#[derive(Debug, Default)]
pub struct ContactRecordBuilder {
    first_name: String,
    last_name: String,
    email: String,
    document_number: String,
    phone: String,
    gender: Option<GenderField>,
    birth_date: Option<NaiveDate>,
}

impl ContactRecordBuilder {
    /// Creates a new builder with the contact's names.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the CPF document number.
    pub fn document_number(mut self, document_number: impl Into<String>) -> Self {
        self.document_number = document_number.into();
        self
    }

    /// Sets the phone number. The value is stored as given; no prefixing happens here.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the gender.
    pub fn gender(mut self, gender: GenderField) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Sets the birth date.
    pub fn birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Builds the record.
    pub fn build(self) -> ContactRecord {
        ContactRecord {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            document_number: self.document_number,
            phone: self.phone,
            gender: self.gender.unwrap_or(GenderField::Absent),
            birth_date: self.birth_date,
        }
    }
}
