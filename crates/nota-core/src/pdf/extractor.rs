//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, trace};

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// Bit of the `/P` permission flags granting content extraction.
const EXTRACT_PERMISSION: i64 = 1 << 4;

/// PDF text extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the document's encryption dictionary allows text extraction.
///
/// Documents without an `/Encrypt` entry, or whose `/P` flags cannot be
/// read, are treated as extractable.
pub fn text_extraction_allowed(doc: &Document) -> bool {
    let Ok(encrypt) = doc.trailer.get(b"Encrypt") else {
        return true;
    };

    let permissions = doc
        .dereference(encrypt)
        .ok()
        .and_then(|(_, obj)| obj.as_dict().ok())
        .and_then(|dict| dict.get(b"P").ok())
        .and_then(|p| p.as_i64().ok());

    trace!("Encryption permissions: {:?}", permissions);
    permissions.is_none_or(|p| p & EXTRACT_PERMISSION != 0)
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if !text_extraction_allowed(&doc) {
            return Err(PdfError::PermissionDenied);
        }

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract reads the decrypted copy
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        let pages = pdf_extract::extract_text_from_mem_by_pages(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        let text = join_pages(&pages);
        debug!("Extracted {} chars of text from {} pages", text.len(), pages.len());
        Ok(text)
    }
}

/// Concatenate page texts, one line after another.
///
/// pdf-extract opens every page with the newlines it uses to separate
/// pages; they are dropped so the first text line of page 1 is line 0 and
/// page boundaries add no empty lines.
fn join_pages(pages: &[String]) -> String {
    let mut text = String::new();

    for page in pages {
        let page = page.trim_start_matches('\n');
        if page.is_empty() {
            continue;
        }
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(page);
    }

    text
}
