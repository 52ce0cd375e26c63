//! PDF processing module.

mod extractor;
#[cfg(test)]
pub(crate) mod fixtures;

pub use extractor::{PdfExtractor, text_extraction_allowed};

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF-to-text implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    ///
    /// Fails with [`PdfError::PermissionDenied`] when the document forbids
    /// text extraction.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract the text of every page, in document order, as one string.
    fn extract_text(&self) -> Result<String>;
}
