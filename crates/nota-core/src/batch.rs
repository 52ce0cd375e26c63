//! Directory discovery and source renaming for batch runs.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::Result;
use crate::models::invoice::InvoiceFields;

/// Files in `dir` whose name ends with `.pdf`.
///
/// The match is case-sensitive and the order is whatever the directory
/// listing yields.
pub fn discover_pdfs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let is_pdf = name.to_str().is_some_and(|n| n.ends_with(".pdf"));

        if is_pdf && entry.file_type()?.is_file() {
            files.push(entry.path());
        } else {
            trace!("Skipping {}", entry.path().display());
        }
    }

    debug!("Found {} PDFs in {}", files.len(), dir.display());
    Ok(files)
}

/// Path `source` is renamed to: same directory, derived name, `.pdf`.
pub fn renamed_path(source: &Path, fields: &InvoiceFields) -> PathBuf {
    source.with_file_name(fields.pdf_file_name())
}

/// Rename `source` after its derived fields.
///
/// An existing file with the target name is replaced.
pub fn rename_source(source: &Path, fields: &InvoiceFields) -> Result<PathBuf> {
    let target = renamed_path(source, fields);
    fs::rename(source, &target)?;
    debug!("Renamed {} -> {}", source.display(), target.display());
    Ok(target)
}
