//! Row mapping.
//!
//! Builds a [`ContactRecord`] from one tokenized row, normalizing the phone,
//! gender and birth date columns on the way.

use crate::normalize::{map_gender, normalize_phone, parse_birth_date};
use contacts_core::{ContactRecord, RequiredHeader};
use contacts_parser::RawRow;

/// Maps a raw row onto a contact record.
///
/// Columns the row does not carry read as empty text. Mapping never fails;
/// whatever the normalizers could not interpret is left for the validators.
pub fn map_contact(row: &RawRow) -> ContactRecord {
    let field = |header: RequiredHeader| row.get(header.as_str());

    ContactRecord {
        first_name: field(RequiredHeader::FirstName).to_string(),
        last_name: field(RequiredHeader::LastName).to_string(),
        email: field(RequiredHeader::Email).to_string(),
        document_number: field(RequiredHeader::Cpf).to_string(),
        phone: normalize_phone(field(RequiredHeader::Phone)),
        gender: map_gender(field(RequiredHeader::Gender)),
        birth_date: parse_birth_date(field(RequiredHeader::BirthDay)),
    }
}
