//! Reader for semicolon-delimited contacts files.
//!
//! This crate wraps the `csv` tokenizer with the settings contacts files use
//! (`;` delimiter, header on the first line, short rows tolerated) and exposes
//! each data row as a column-name → raw-text lookup.
//!
//! # Example
//!
//! ```rust
//! use contacts_parser::ContactReader;
//!
//! let data = "firstname;lastname\nMaria;Silva\nJoão\n";
//! let mut reader = ContactReader::from_reader(data.as_bytes()).unwrap();
//!
//! assert_eq!(reader.headers(), &["firstname", "lastname"]);
//!
//! let first = reader.next().unwrap().unwrap();
//! assert_eq!(first.row(), 2);
//! assert_eq!(first.get("lastname"), "Silva");
//!
//! let second = reader.next().unwrap().unwrap();
//! assert_eq!(second.get("lastname"), "");
//! ```

use csv::{ByteRecord, ReaderBuilder, Trim};
use std::collections::{HashMap, VecDeque};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Field delimiter of contacts files.
pub const DELIMITER: u8 = b';';

/// Suffix a contacts file name must end with.
pub const CSV_EXTENSION: &str = ".csv";

const UTF8_BOM: char = '\u{feff}';

/// Errors that can occur while opening or reading a contacts file.
#[derive(Debug, Error)]
pub enum ParserError {
    /// The path does not end in `.csv`
    #[error("Invalid or missing file extension: {0}")]
    InvalidExtension(PathBuf),

    /// The path does not point at an existing file
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The tokenizer rejected the input
    #[error("Failed to read CSV: {0}")]
    CsvError(#[from] csv::Error),

    /// The input has no header line
    #[error("No header record was found.")]
    MissingHeader,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Checks that a file name ends in `.csv` (case-insensitive).
///
/// A file named just `.csv` is accepted.
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` for any other or missing extension.
pub fn check_extension(path: &Path) -> Result<()> {
    let suffix = CSV_EXTENSION.as_bytes();
    let matches = path
        .file_name()
        .map(|name| name.as_encoded_bytes())
        .is_some_and(|name| {
            name.len() >= suffix.len()
                && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
        });

    if matches {
        Ok(())
    } else {
        Err(ParserError::InvalidExtension(path.to_path_buf()))
    }
}

/// Checks that a path points at an existing regular file.
///
/// # Errors
///
/// Returns `ParserError::NotFound` for missing paths and directories.
pub fn check_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ParserError::NotFound(path.to_path_buf()))
    }
}

/// One data row, addressed by column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    row: u64,
    fields: HashMap<String, String>,
}

impl RawRow {
    /// Returns the 1-based source line the row starts on (the header is line 1).
    ///
    /// Blank lines are skipped by the tokenizer but still counted.
    pub fn row(&self) -> u64 {
        self.row
    }

    /// Returns the raw text of a column.
    ///
    /// Columns absent from the header, or cut off by a short row, read as `""`.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }
}

/// Sequential reader over the rows of a contacts file.
///
/// The header is read when the reader is created. Iterating yields one
/// [`RawRow`] per record; after the first error the iterator is exhausted.
pub struct ContactReader<R> {
    reader: csv::Reader<LineTracker<R>>,
    headers: Vec<String>,
    record: ByteRecord,
    done: bool,
}

impl ContactReader<File> {
    /// Opens a contacts file and reads its header.
    ///
    /// No extension or existence check is made here; see [`check_extension`]
    /// and [`check_exists`].
    pub fn open(path: &Path) -> Result<Self> {
        debug!("Opening contacts file {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl<R: Read> ContactReader<R> {
    /// Creates a reader over any byte source and reads its header.
    ///
    /// Text is decoded as UTF-8; invalid sequences are replaced rather than
    /// rejected and a leading byte-order mark is dropped.
    ///
    /// # Errors
    ///
    /// Returns `ParserError::MissingHeader` when the input holds no records.
    pub fn from_reader(source: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(true)
            .flexible(true)
            .trim(Trim::None)
            .from_reader(LineTracker::new(source));

        let headers: Vec<String> = reader.byte_headers()?.iter().map(decode_field).collect();
        if headers.is_empty() {
            return Err(ParserError::MissingHeader);
        }
        let headers = strip_bom(headers);

        debug!("Read header with {} columns", headers.len());

        Ok(Self {
            reader,
            headers,
            record: ByteRecord::new(),
            done: false,
        })
    }

    /// Returns the header fields in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    fn read_row(&mut self) -> Result<Option<RawRow>> {
        let start = self.reader.position().byte();
        if !self.reader.read_byte_record(&mut self.record)? {
            return Ok(None);
        }

        let mut fields = HashMap::with_capacity(self.headers.len());
        for (header, value) in self.headers.iter().zip(self.record.iter()) {
            // Duplicate column names resolve to the first occurrence.
            fields
                .entry(header.clone())
                .or_insert_with(|| decode_field(value));
        }

        // The tokenizer skips blank lines before the record without reporting them.
        let row = self.reader.get_mut().line_at(start);
        Ok(Some(RawRow { row, fields }))
    }
}

impl<R: Read> Iterator for ContactReader<R> {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_row() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Pass-through reader that remembers where line breaks occur.
///
/// `\r\n`, `\n` and a lone `\r` each end one line.
struct LineTracker<R> {
    inner: R,
    offset: u64,
    breaks: VecDeque<(u64, u8)>,
    lines: u64,
    last_cr: Option<u64>,
}

impl<R> LineTracker<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            offset: 0,
            breaks: VecDeque::new(),
            lines: 0,
            last_cr: None,
        }
    }

    /// Returns the 1-based line of the first byte at or after `offset` that
    /// is not a line break.
    ///
    /// Breaks before that byte are counted and forgotten.
    fn line_at(&mut self, offset: u64) -> u64 {
        let mut content = offset;
        while let Some(&(at, byte)) = self.breaks.front() {
            if at > content {
                break;
            }
            if at == content {
                content += 1;
            }
            self.breaks.pop_front();
            self.count_break(at, byte);
        }
        self.lines + 1
    }

    fn count_break(&mut self, at: u64, byte: u8) {
        if byte == b'\r' {
            self.last_cr = Some(at);
            self.lines += 1;
        } else if !self.last_cr.is_some_and(|cr| cr + 1 == at) {
            self.lines += 1;
        }
    }
}

impl<R: Read> Read for LineTracker<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        for (at, &byte) in (self.offset..).zip(&buf[..n]) {
            if byte == b'\n' || byte == b'\r' {
                self.breaks.push_back((at, byte));
            }
        }
        self.offset += n as u64;
        Ok(n)
    }
}

fn decode_field(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn strip_bom(mut headers: Vec<String>) -> Vec<String> {
    if let Some(first) = headers.first_mut() {
        if let Some(stripped) = first.strip_prefix(UTF8_BOM) {
            *first = stripped.to_string();
        }
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    fn rows(data: &str) -> Vec<RawRow> {
        ContactReader::from_reader(data.as_bytes())
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_check_extension() {
        assert!(check_extension(Path::new("contacts.csv")).is_ok());
        assert!(check_extension(Path::new("dir/CONTACTS.CSV")).is_ok());
        assert!(check_extension(Path::new("contacts.Csv")).is_ok());
        assert!(check_extension(Path::new(".csv")).is_ok());
        assert!(check_extension(Path::new("dir/.CSV")).is_ok());

        assert!(matches!(
            check_extension(Path::new("contacts.txt")),
            Err(ParserError::InvalidExtension(_))
        ));
        assert!(matches!(
            check_extension(Path::new("contacts")),
            Err(ParserError::InvalidExtension(_))
        ));
        assert!(matches!(
            check_extension(Path::new("contacts.csv.bak")),
            Err(ParserError::InvalidExtension(_))
        ));
        assert!(matches!(
            check_extension(Path::new("contactscsv")),
            Err(ParserError::InvalidExtension(_))
        ));
    }

    #[test]
    fn test_check_exists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.csv");

        assert!(matches!(check_exists(&path), Err(ParserError::NotFound(_))));
        assert!(matches!(
            check_exists(dir.path()),
            Err(ParserError::NotFound(_))
        ));

        File::create(&path).unwrap();
        assert!(check_exists(&path).is_ok());
    }

    #[test]
    fn test_headers_and_rows() {
        let rows = rows("firstname;lastname;email\nMaria;Silva;maria@example.com\n");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row(), 2);
        assert_eq!(rows[0].get("firstname"), "Maria");
        assert_eq!(rows[0].get("email"), "maria@example.com");
    }

    #[test]
    fn test_short_row_reads_as_empty() {
        let rows = rows("a;b;c\n1\n1;2;3\n");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("a"), "1");
        assert_eq!(rows[0].get("b"), "");
        assert_eq!(rows[0].get("c"), "");
        assert_eq!(rows[1].row(), 3);
        assert_eq!(rows[1].get("c"), "3");
    }

    #[test]
    fn test_blank_lines_still_count_toward_row() {
        let rows = rows("a;b\n\n1;2\n\n\n3;4\n");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row(), 3);
        assert_eq!(rows[1].row(), 6);
    }

    #[test]
    fn test_crlf_blank_lines_still_count_toward_row() {
        let rows = rows("a;b\r\n1;2\r\n\r\n3;4\r\n");

        assert_eq!(rows[0].row(), 2);
        assert_eq!(rows[0].get("b"), "2");
        assert_eq!(rows[1].row(), 4);
        assert_eq!(rows[1].get("b"), "4");
    }

    #[test]
    fn test_carriage_return_line_endings() {
        let rows = rows("a;b\r1;2\r\r3;4\r");

        assert_eq!(rows[0].row(), 2);
        assert_eq!(rows[1].row(), 4);
        assert_eq!(rows[1].get("a"), "3");
    }

    #[test]
    fn test_multiline_field_row_is_start_line() {
        let rows = rows("a;b\n\"x\ny\";1\n2;3\n");

        assert_eq!(rows[0].row(), 2);
        assert_eq!(rows[0].get("a"), "x\ny");
        assert_eq!(rows[1].row(), 4);
    }

    #[test]
    fn test_long_row_ignores_extra_fields() {
        let rows = rows("a;b\n1;2;3;4\n");
        assert_eq!(rows[0].get("b"), "2");
    }

    #[test]
    fn test_unknown_column_reads_as_empty() {
        let rows = rows("a\n1\n");
        assert_eq!(rows[0].get("missing"), "");
    }

    #[test]
    fn test_duplicate_header_uses_first_column() {
        let rows = rows("a;a\nfirst;second\n");
        assert_eq!(rows[0].get("a"), "first");
    }

    #[test]
    fn test_quoted_delimiter() {
        let rows = rows("a;b\n\"x;y\";z\n");
        assert_eq!(rows[0].get("a"), "x;y");
        assert_eq!(rows[0].get("b"), "z");
    }

    #[test]
    fn test_fields_are_not_trimmed() {
        let rows = rows("a;b\n  x ; y\n");
        assert_eq!(rows[0].get("a"), "  x ");
    }

    #[test]
    fn test_byte_order_mark_is_dropped() {
        let reader = ContactReader::from_reader("\u{feff}firstname;lastname\n".as_bytes()).unwrap();
        assert_eq!(reader.headers(), &["firstname", "lastname"]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let data: &[u8] = b"name\nJo\xffo\n";
        let rows: Vec<RawRow> = ContactReader::from_reader(data)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(rows[0].get("name"), "Jo\u{fffd}o");
    }

    #[test]
    fn test_empty_input_has_no_header() {
        let result = ContactReader::from_reader("".as_bytes());
        assert!(matches!(result, Err(ParserError::MissingHeader)));
    }

    #[test]
    fn test_header_only() {
        let rows = rows("firstname;lastname\n");
        assert!(rows.is_empty());
    }

    #[test]
    fn test_open_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("contacts.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "phone;gender").unwrap();
        writeln!(file, "11987654321;FEMININO").unwrap();

        let mut reader = ContactReader::open(&path).unwrap();
        assert_eq!(reader.headers(), &["phone", "gender"]);

        let row = reader.next().unwrap().unwrap();
        assert_eq!(row.get("gender"), "FEMININO");
        assert!(reader.next().is_none());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_open_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = ContactReader::open(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(ParserError::IoError(_))));
    }
}
