//! The fixed column schema of a contacts file.

use std::fmt;

/// A column every contacts file must declare in its header.
///
/// Column names are matched exactly and case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredHeader {
    /// `firstname`
    FirstName,
    /// `lastname`
    LastName,
    /// `email`
    Email,
    /// `cpf`
    Cpf,
    /// `phone`
    Phone,
    /// `gender`
    Gender,
    /// `birthDay`
    BirthDay,
}

impl RequiredHeader {
    /// All required columns, in the order they are checked and reported.
    pub const ALL: [RequiredHeader; 7] = [
        RequiredHeader::FirstName,
        RequiredHeader::LastName,
        RequiredHeader::Email,
        RequiredHeader::Cpf,
        RequiredHeader::Phone,
        RequiredHeader::Gender,
        RequiredHeader::BirthDay,
    ];

    /// Returns the column name as it must appear in the header line.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredHeader::FirstName => "firstname",
            RequiredHeader::LastName => "lastname",
            RequiredHeader::Email => "email",
            RequiredHeader::Cpf => "cpf",
            RequiredHeader::Phone => "phone",
            RequiredHeader::Gender => "gender",
            RequiredHeader::BirthDay => "birthDay",
        }
    }
}

impl fmt::Display for RequiredHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names_in_check_order() {
        let names: Vec<&str> = RequiredHeader::ALL.iter().map(RequiredHeader::as_str).collect();
        assert_eq!(
            names,
            ["firstname", "lastname", "email", "cpf", "phone", "gender", "birthDay"]
        );
    }

    #[test]
    fn test_display_matches_column_name() {
        assert_eq!(RequiredHeader::BirthDay.to_string(), "birthDay");
    }
}
