//! Extract the text of a nota and save it under a name built from its fields.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::models::config::NotaConfig;
use crate::models::invoice::InvoiceFields;
use crate::pdf::PdfProcessor;
use crate::template::{DocumentTemplate, NotaTemplate, split_lines};

/// A document whose fields are known but whose text is not written yet.
#[derive(Debug, Clone)]
pub struct PreparedNota {
    /// Source PDF.
    pub source: PathBuf,
    /// Full extracted text.
    pub text: String,
    /// Derived fields.
    pub fields: InvoiceFields,
    /// Destination of the text file.
    pub output_path: PathBuf,
}

impl PreparedNota {
    /// `<client_code>-<YYYYMMDD>-NC<invoice_number>.txt`
    pub fn file_name(&self) -> String {
        self.fields.text_file_name()
    }
}

/// Names and saves the extracted text of notas.
pub struct Namer<T = NotaTemplate> {
    output_dir: PathBuf,
    template: T,
}

impl Namer<NotaTemplate> {
    /// Namer using the configured output directory and template layout.
    pub fn from_config(config: &NotaConfig) -> Self {
        Self::new(
            config.paths.output_dir.clone(),
            NotaTemplate::from_config(&config.template),
        )
    }
}

impl<T: DocumentTemplate> Namer<T> {
    /// Create a namer writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>, template: T) -> Self {
        Self {
            output_dir: output_dir.into(),
            template,
        }
    }

    /// Directory receiving the text files.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Read and extract `source`, then derive its fields.
    ///
    /// Nothing is written.
    pub fn prepare(&self, source: &Path, processor: &mut dyn PdfProcessor) -> Result<PreparedNota> {
        let data = fs::read(source)?;
        processor.load(&data)?;
        drop(data);

        let text = processor.extract_text()?;
        debug!(
            "Extracted {} chars from {} ({} pages)",
            text.len(),
            source.display(),
            processor.page_count()
        );

        self.prepare_text(source, text)
    }

    /// Derive the fields of already extracted `text`.
    pub fn prepare_text(&self, source: &Path, text: String) -> Result<PreparedNota> {
        let fields = {
            let lines = split_lines(&text);
            self.template.extract_fields(&lines)?
        };
        let output_path = self.output_dir.join(fields.text_file_name());

        Ok(PreparedNota {
            source: source.to_path_buf(),
            text,
            fields,
            output_path,
        })
    }

    /// Write the extracted text as UTF-8, replacing any existing file.
    pub fn write(&self, prepared: &PreparedNota) -> Result<PathBuf> {
        fs::write(&prepared.output_path, prepared.text.as_bytes())?;
        info!("Saved {}", prepared.output_path.display());
        Ok(prepared.output_path.clone())
    }

    /// Prepare and write `source`, returning the composed file name.
    pub fn process(&self, source: &Path, processor: &mut dyn PdfProcessor) -> Result<String> {
        let prepared = self.prepare(source, processor)?;
        self.write(&prepared)?;
        Ok(prepared.file_name())
    }
}
