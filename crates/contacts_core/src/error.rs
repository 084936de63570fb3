//! Error types for contact validation.
//!
//! Every variant renders as the exact Portuguese message shown to the user, so
//! reports are assembled with `to_string()`.

use crate::RequiredHeader;
use std::fmt;
use thiserror::Error;

/// File-level problems found while validating a contacts file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// File name does not carry the `.csv` extension
    #[error("Apenas arquivos CSV são permitidos.")]
    InvalidExtension,

    /// Path does not point at an existing file
    #[error("Arquivo não encontrado.")]
    FileNotFound,

    /// A required column is not declared in the header
    #[error("Cabeçalho obrigatório '{0}' não encontrado.")]
    MissingHeader(RequiredHeader),

    /// Reading or tokenizing the file failed
    #[error("Erro durante a validação: {0}")]
    Processing(String),
}

impl ContactError {
    /// Creates a new processing error.
    pub fn processing(message: impl fmt::Display) -> Self {
        Self::Processing(message.to_string())
    }
}

/// Which name column a [`FieldError::InvalidName`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    /// The `firstname` column
    FirstName,
    /// The `lastname` column
    LastName,
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameField::FirstName => f.write_str("Firstname"),
            NameField::LastName => f.write_str("Lastname"),
        }
    }
}

/// A single field that failed validation within a row.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Name contains something other than letters
    #[error("{0} deve conter apenas letras.")]
    InvalidName(NameField),

    /// Email is not shaped like `local@domain.tld`
    #[error("Email deve estar em um formato válido.")]
    InvalidEmail,

    /// CPF is not exactly 11 digits
    #[error("CPF deve conter apenas números e ter 11 dígitos.")]
    InvalidDocumentNumber,

    /// Phone does not have 10 or 11 digits after the country code
    #[error("Telefone deve conter 10 ou 11 dígitos, incluindo o DDD (após o código do país 55).")]
    InvalidPhone,

    /// Gender is blank or not a recognized code
    #[error("Gênero deve ser 'FEMININO' ou 'MASCULINO'.")]
    InvalidGender,

    /// Birth date is blank or not a `dd/MM/yyyy` calendar date
    #[error("Data de nascimento deve estar no formato válido de data.")]
    InvalidBirthDate,
}
