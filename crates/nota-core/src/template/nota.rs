//! Positional template of the "Nº Nota:" documents.

use tracing::trace;

use super::{DocumentTemplate, Result, line_at, reformat_date};
use crate::error::ExtractionError;
use crate::models::config::TemplateConfig;

/// Template locating fields by marker text and fixed line indices.
#[derive(Debug, Clone)]
pub struct NotaTemplate {
    marker: String,
    date_line: usize,
    client_line: usize,
}

impl NotaTemplate {
    /// Create a template with the default layout.
    pub fn new() -> Self {
        Self::from_config(&TemplateConfig::default())
    }

    /// Create a template from configuration.
    pub fn from_config(config: &TemplateConfig) -> Self {
        Self {
            marker: config.marker.clone(),
            date_line: config.date_line,
            client_line: config.client_line,
        }
    }

    /// Set the marker line preceding the invoice number.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Set the index of the date line.
    pub fn with_date_line(mut self, index: usize) -> Self {
        self.date_line = index;
        self
    }

    /// Set the index of the client code line.
    pub fn with_client_line(mut self, index: usize) -> Self {
        self.client_line = index;
        self
    }
}

impl Default for NotaTemplate {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTemplate for NotaTemplate {
    fn extract_invoice_number(&self, lines: &[&str]) -> Result<String> {
        let not_found = || ExtractionError::MarkerNotFound {
            marker: self.marker.clone(),
        };

        let position = lines
            .iter()
            .position(|line| *line == self.marker)
            .ok_or_else(not_found)?;
        trace!("Marker found at line {}", position);

        match lines.get(position + 1) {
            Some(value) if !value.is_empty() => Ok((*value).to_string()),
            _ => Err(not_found()),
        }
    }

    fn extract_date(&self, lines: &[&str]) -> Result<String> {
        let line = line_at(lines, self.date_line)?;
        // split(' ') always yields at least one token
        let token = line.split(' ').next_back().unwrap_or(line);
        reformat_date(token)
    }

    fn extract_client_code(&self, lines: &[&str]) -> Result<String> {
        line_at(lines, self.client_line).map(str::to_string)
    }
}
