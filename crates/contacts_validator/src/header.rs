//! Header validation.

use contacts_core::{ContactError, RequiredHeader};
use std::collections::HashSet;

/// Checks a header line against the required columns.
///
/// Returns one `MissingHeader` error per required column not present, in
/// [`RequiredHeader::ALL`] order. Names must match exactly; extra columns
/// are allowed.
pub fn check_headers<S: AsRef<str>>(headers: &[S]) -> Vec<ContactError> {
    let present: HashSet<&str> = headers
        .iter()
        .map(|header| AsRef::<str>::as_ref(header))
        .collect();

    RequiredHeader::ALL
        .into_iter()
        .filter(|header| !present.contains(header.as_str()))
        .map(ContactError::MissingHeader)
        .collect()
}
