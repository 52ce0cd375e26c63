//! Error types for the nota-core library.

use thiserror::Error;

/// Main error type for the nota library.
#[derive(Error, Debug)]
pub enum NotaError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Invoice field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error while reading, writing or renaming a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and the empty password does not open it.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The document's permissions forbid text extraction.
    #[error("text extraction is not permitted by the document")]
    PermissionDenied,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to invoice field extraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The marker line is absent or not followed by a value.
    #[error("marker {marker:?} not found or not followed by a value")]
    MarkerNotFound { marker: String },

    /// The date token is not a `DD/MM/YYYY` date.
    #[error("malformed date {value:?}, expected DD/MM/YYYY")]
    MalformedDate { value: String },

    /// The text has fewer lines than a fixed offset requires.
    #[error("line {index} requested but text has only {len} lines")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for the nota library.
pub type Result<T> = std::result::Result<T, NotaError>;
