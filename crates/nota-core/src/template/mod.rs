//! Field extraction from the lines of a nota.
//!
//! Extraction is positional: it depends on the exact line layout that the
//! PDF text extraction produces for one document template. The
//! [`DocumentTemplate`] trait keeps each field behind its own method so a
//! different layout can be supported by another implementation.

mod dates;
mod nota;

pub use dates::reformat_date;
pub use nota::NotaTemplate;

use crate::error::ExtractionError;
use crate::models::invoice::InvoiceFields;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for named-field extraction over the extracted text lines.
pub trait DocumentTemplate {
    /// Invoice number.
    fn extract_invoice_number(&self, lines: &[&str]) -> Result<String>;

    /// Issue date, formatted as `YYYYMMDD`.
    fn extract_date(&self, lines: &[&str]) -> Result<String>;

    /// Client code.
    fn extract_client_code(&self, lines: &[&str]) -> Result<String>;

    /// Extract all three fields.
    fn extract_fields(&self, lines: &[&str]) -> Result<InvoiceFields> {
        Ok(InvoiceFields {
            invoice_number: self.extract_invoice_number(lines)?,
            formatted_date: self.extract_date(lines)?,
            client_code: self.extract_client_code(lines)?,
        })
    }
}

/// Split extracted text into lines on `'\n'` only.
///
/// Unlike [`str::lines`], a trailing newline yields a final empty line and
/// `'\r'` is kept, so line indices match the raw text.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Line at `index`, or [`ExtractionError::IndexOutOfRange`].
pub(crate) fn line_at<'a>(lines: &[&'a str], index: usize) -> Result<&'a str> {
    lines
        .get(index)
        .copied()
        .ok_or(ExtractionError::IndexOutOfRange {
            index,
            len: lines.len(),
        })
}
