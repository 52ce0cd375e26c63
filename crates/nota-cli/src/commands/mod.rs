pub mod batch;
pub mod config;
pub mod process;

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use nota_core::models::config::NotaConfig;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nota")
        .join("config.json")
}

/// Load the configuration: explicit path, then default path, then defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<NotaConfig> {
    if let Some(path) = config_path {
        return NotaConfig::from_file(Path::new(path))
            .with_context(|| format!("Failed to read config file {}", path));
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        return NotaConfig::from_file(&default_path)
            .with_context(|| format!("Failed to read config file {}", default_path.display()));
    }

    Ok(NotaConfig::default())
}
