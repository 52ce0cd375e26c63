//! Fields derived from a nota and the file names built from them.

use serde::{Deserialize, Serialize};

/// Fields extracted from the text of one nota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceFields {
    /// Value following the marker line.
    pub invoice_number: String,

    /// Issue date as `YYYYMMDD`.
    pub formatted_date: String,

    /// Client code, taken verbatim.
    pub client_code: String,
}

impl InvoiceFields {
    /// `<client_code>-<YYYYMMDD>-NC<invoice_number>`
    pub fn file_stem(&self) -> String {
        format!(
            "{}-{}-NC{}",
            self.client_code, self.formatted_date, self.invoice_number
        )
    }

    /// Name of the text file holding the extracted text.
    pub fn text_file_name(&self) -> String {
        format!("{}.txt", self.file_stem())
    }

    /// Name the source PDF is renamed to.
    pub fn pdf_file_name(&self) -> String {
        format!("{}.pdf", self.file_stem())
    }
}
