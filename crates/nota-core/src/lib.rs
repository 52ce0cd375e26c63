//! Core library for naming invoice PDFs ("notas") after their content.
//!
//! This crate provides:
//! - PDF text extraction (lopdf + pdf-extract)
//! - Positional field extraction for the "Nº Nota:" template
//! - File naming, persistence of the extracted text and source renaming

pub mod batch;
pub mod error;
pub mod models;
pub mod namer;
pub mod pdf;
pub mod template;

pub use batch::{discover_pdfs, rename_source, renamed_path};
pub use error::{ExtractionError, NotaError, PdfError, Result};
pub use models::{InvoiceFields, NotaConfig};
pub use namer::{Namer, PreparedNota};
pub use pdf::{PdfExtractor, PdfProcessor};
pub use template::{DocumentTemplate, NotaTemplate};
