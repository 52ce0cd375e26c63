//! Data models for configuration and extracted fields.

pub mod config;
pub mod invoice;

pub use config::{BatchConfig, NotaConfig, PathConfig, TemplateConfig};
pub use invoice::InvoiceFields;
