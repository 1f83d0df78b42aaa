//! Printer settings loaded from a TOML file

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use shapeir_codegen::PrinterConfig;

/// Layout of the TOML file passed with `--config`
///
/// ```toml
/// [printer]
/// validate-before-print = false
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub printer: PrinterConfig,
}

impl CliConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))
    }
}
