//! # Contacts Core
//!
//! Core data structures for the contact CSV validator.
//!
//! This crate holds the types shared by the parser, the validation engine and
//! the command-line host: the normalized contact record, the fixed column
//! schema, the error types whose `Display` output is the user-facing
//! (Portuguese) message, and the validation report.
//!
//! ## Key Concepts
//!
//! - **ContactRecord**: one input row after normalization
//! - **RequiredHeader**: the seven columns every file must declare
//! - **FieldError / RowError**: per-field failures and their per-row aggregate
//! - **ValidationReport**: ordered messages plus run statistics
//!
//! ## Example
//!
//! ```rust
//! use contacts_core::{FieldError, RowError};
//!
//! let error = RowError::new(2, vec![FieldError::InvalidEmail]).unwrap();
//! assert_eq!(error.to_string(), "Linha 2: Email deve estar em um formato válido.");
//! ```

pub mod builder;
pub mod contact;
pub mod error;
pub mod header;
pub mod report;

pub use builder::*;
pub use contact::*;
pub use error::*;
pub use header::*;
pub use report::*;
