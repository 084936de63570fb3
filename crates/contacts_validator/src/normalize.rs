//! Field normalization.
//!
//! Turns raw cell text into the canonical values the field validators check:
//! - Phone: digits only, prefixed with the Brazilian country code
//! - Gender: mapped onto [`GenderField`]
//! - Birth date: strict `dd/MM/yyyy` parsing
//!
//! Normalizers never fail. Anything they cannot make sense of becomes a value
//! the validators will reject.

use chrono::{Datelike, NaiveDate};
use contacts_core::{Gender, GenderField};
use regex::Regex;
use std::sync::LazyLock;

/// Country code every phone number is prefixed with.
pub const COUNTRY_CODE: &str = "55";

/// `chrono` format of birth dates (`dd/MM/yyyy`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

// chrono accepts single-digit days and months for %d/%m, so the shape is checked first.
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("valid date pattern"));

/// Returns true if the text is empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Keeps only the digits of a phone number and prefixes the country code.
///
/// The prefix is not added again when the digits already start with it.
///
/// ```rust
/// use contacts_validator::normalize_phone;
///
/// assert_eq!(normalize_phone("(11) 98765-4321"), "5511987654321");
/// assert_eq!(normalize_phone("+55 11 98765-4321"), "5511987654321");
/// assert_eq!(normalize_phone(""), "55");
/// ```
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.starts_with(COUNTRY_CODE) {
        digits
    } else {
        format!("{COUNTRY_CODE}{digits}")
    }
}

/// Maps a gender cell onto a [`GenderField`].
///
/// Codes are compared case-insensitively. Blank cells are `Absent`; any
/// other unrecognized text is kept as `Invalid`.
pub fn map_gender(raw: &str) -> GenderField {
    if is_blank(raw) {
        return GenderField::Absent;
    }

    let upper = raw.to_uppercase();
    Gender::ALL
        .into_iter()
        .find(|gender| gender.code() == upper)
        .map(GenderField::Valid)
        .unwrap_or_else(|| GenderField::Invalid(raw.to_string()))
}

/// Parses a `dd/MM/yyyy` birth date.
///
/// Returns `None` for blank text, any other layout (including surrounding
/// whitespace) and dates that do not exist on the calendar.
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    if is_blank(raw) || !DATE_SHAPE.is_match(raw) {
        return None;
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_phone_strips_non_digits() {
        assert_eq!(normalize_phone("11 98765-4321"), "5511987654321");
        assert_eq!(normalize_phone("(21) 3333-4444"), "552133334444");
    }

    #[test]
    fn test_phone_keeps_existing_prefix() {
        assert_eq!(normalize_phone("5511987654321"), "5511987654321");
        assert_eq!(normalize_phone("+55 (11) 98765-4321"), "5511987654321");
    }

    #[test]
    fn test_phone_short_and_empty() {
        assert_eq!(normalize_phone("123"), "55123");
        assert_eq!(normalize_phone(""), "55");
        assert_eq!(normalize_phone("abc"), "55");
        assert_eq!(normalize_phone("55"), "55");
    }

    #[test]
    fn test_phone_ignores_non_ascii_digits() {
        assert_eq!(normalize_phone("١٢٣"), "55");
    }

    #[test]
    fn test_gender_mapping() {
        assert_eq!(map_gender("FEMININO"), GenderField::Valid(Gender::Feminine));
        assert_eq!(map_gender("masculino"), GenderField::Valid(Gender::Masculine));
        assert_eq!(map_gender("Feminino"), GenderField::Valid(Gender::Feminine));
    }

    #[test]
    fn test_gender_unrecognized() {
        assert_eq!(map_gender("OUTRO"), GenderField::Invalid("OUTRO".to_string()));
        assert_eq!(map_gender("F"), GenderField::Invalid("F".to_string()));
        assert_eq!(
            map_gender(" FEMININO "),
            GenderField::Invalid(" FEMININO ".to_string())
        );
    }

    #[test]
    fn test_gender_blank_is_absent() {
        assert_eq!(map_gender(""), GenderField::Absent);
        assert_eq!(map_gender("   "), GenderField::Absent);
    }

    #[test]
    fn test_date_valid() {
        assert_eq!(
            parse_birth_date("17/05/1990"),
            NaiveDate::from_ymd_opt(1990, 5, 17)
        );
        assert_eq!(
            parse_birth_date("29/02/2020"),
            NaiveDate::from_ymd_opt(2020, 2, 29)
        );
    }

    #[test]
    fn test_date_blank() {
        assert_eq!(parse_birth_date(""), None);
        assert_eq!(parse_birth_date("  "), None);
    }

    #[test]
    fn test_date_wrong_layout() {
        assert_eq!(parse_birth_date("31-02-2020"), None);
        assert_eq!(parse_birth_date("1990-05-17"), None);
        assert_eq!(parse_birth_date("1/5/1990"), None);
        assert_eq!(parse_birth_date("17/05/90"), None);
        assert_eq!(parse_birth_date(" 17/05/1990"), None);
        assert_eq!(parse_birth_date("17/05/1990 "), None);
    }

    #[test]
    fn test_date_impossible() {
        assert_eq!(parse_birth_date("31/02/2020"), None);
        assert_eq!(parse_birth_date("29/02/2021"), None);
        assert_eq!(parse_birth_date("00/01/2000"), None);
        assert_eq!(parse_birth_date("10/13/2000"), None);
        assert_eq!(parse_birth_date("01/01/0000"), None);
    }
}
