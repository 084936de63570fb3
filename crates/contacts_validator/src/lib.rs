//! # Contacts Validator
//!
//! Validation engine for semicolon-delimited contact files. This crate
//! provides:
//!
//! - Header validation against the seven required columns
//! - Field normalization (phone prefixing, gender mapping, date parsing)
//! - Per-field rules (names, email, CPF, phone, gender, birth date)
//! - A run driver that aggregates failures into one message per row
//!
//! Messages are in Portuguese and are the whole output: an empty list means
//! the file is valid.
//!
//! ## Example
//!
//! ```rust
//! use contacts_validator::ContactValidator;
//!
//! let data = "firstname;lastname;email;cpf;phone;gender;birthDay\n\
//!             Maria;Silva;maria@example.com;12345678901;11987654321;FEMININO;17/05/1990\n";
//!
//! let report = ContactValidator::new().validate_reader(data.as_bytes());
//!
//! if report.passed {
//!     println!("Validation passed!");
//! } else {
//!     println!("Validation failed: {:?}", report.errors);
//! }
//! ```

mod engine;
mod fields;
mod header;
mod mapper;
mod normalize;

pub use engine::*;
pub use fields::*;
pub use header::*;
pub use mapper::*;
pub use normalize::*;
