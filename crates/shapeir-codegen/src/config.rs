use serde::{Deserialize, Serialize};

/// Configuration for the type printer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PrinterConfig {
    /// Run shape validation before rendering and report violations as
    /// `PrintError::Shape`
    pub validate_before_print: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            validate_before_print: true,
        }
    }
}
