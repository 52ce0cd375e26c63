//! Configuration structures for the nota pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{NotaError, Result};

/// Marker line preceding the invoice number on a nota.
pub const DEFAULT_MARKER: &str = "Nº Nota:";

/// Main configuration for the nota pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotaConfig {
    /// Input and output directories.
    pub paths: PathConfig,

    /// Layout of the document template.
    pub template: TemplateConfig,

    /// Batch run behaviour.
    pub batch: BatchConfig,
}

/// Input and output locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Directory scanned for `*.pdf` files.
    pub input_dir: PathBuf,

    /// Directory receiving the extracted `*.txt` files.
    pub output_dir: PathBuf,
}

impl PathConfig {
    /// Paths rooted at `base`: `<base>/pdf` and `<base>/txt`.
    pub fn for_base_dir(base: &Path) -> Self {
        Self {
            input_dir: base.join("pdf"),
            output_dir: base.join("txt"),
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self::for_base_dir(&executable_dir())
    }
}

/// Positions of the fields in the extracted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Exact line preceding the invoice number.
    pub marker: String,

    /// Zero-based line holding `<prefix> DD/MM/YYYY`.
    pub date_line: usize,

    /// Zero-based line holding the client code.
    pub client_line: usize,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            date_line: 2,
            client_line: 12,
        }
    }
}

/// Batch run configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Keep going after a document fails instead of aborting the run.
    pub continue_on_error: bool,

    /// Rename each processed PDF after its derived name.
    pub rename_source: bool,

    /// Create the output directory when it does not exist.
    pub create_output_dir: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            continue_on_error: false,
            rename_source: true,
            create_output_dir: true,
        }
    }
}

impl NotaConfig {
    /// Configuration with both directories rooted at `base`.
    pub fn for_base_dir(base: &Path) -> Self {
        Self {
            paths: PathConfig::for_base_dir(base),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file.
    ///
    /// Unreadable files are [`NotaError::Io`]; contents that do not parse
    /// as a configuration are [`NotaError::Config`].
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| NotaError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| NotaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Directory containing the running executable, or `.` if unknown.
pub fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.canonicalize().ok())
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
