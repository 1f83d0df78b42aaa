//! Library interface for the shapeir CLI

pub mod config;

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use shapeir_codegen::{CodegenError, ErrorEntry, Printer, PrinterConfig};
use shapeir_core::File;
use tracing::info;

/// Counts reported after processing a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub failed: usize,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Read a container from its JSON form
pub fn load_file(path: &Path) -> Result<File> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file = File::from_json(&content)
        .with_context(|| format!("Failed to decode type container {}", path.display()))?;
    info!("Loaded {} types from {}", file.len(), path.display());
    Ok(file)
}

/// Print every entry as `name: rendering`, failures go to `err`
pub fn handle_print(
    file: &File,
    config: PrinterConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Summary> {
    let printer = Printer::new().with_config(config);
    let mut summary = Summary::default();

    for entry in printer.print_file(file) {
        summary.total += 1;
        match &entry.result {
            Ok(text) => writeln!(out, "{}: {}", entry.name, text)?,
            Err(e) => {
                summary.failed += 1;
                writeln!(err, "{}", ErrorEntry::from_print_error(&entry.name, e))?;
            }
        }
    }

    Ok(summary)
}

/// Print only if every entry prints; otherwise report all failures at once
pub fn handle_print_strict(
    file: &File,
    config: PrinterConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<Summary> {
    let printer = Printer::new().with_config(config);
    match printer.print_file_strict(file) {
        Ok(entries) => {
            for (name, text) in &entries {
                writeln!(out, "{}: {}", name, text)?;
            }
            Ok(Summary {
                total: entries.len(),
                failed: 0,
            })
        }
        Err(CodegenError::Batch { count, summary }) => {
            writeln!(err, "{}", summary)?;
            Ok(Summary {
                total: file.len(),
                failed: count,
            })
        }
    }
}

/// Validate every entry, reporting each failure on `err`
pub fn handle_validate(file: &File, out: &mut impl Write, err: &mut impl Write) -> Result<Summary> {
    let failed = match file.validate() {
        Ok(()) => 0,
        Err(batch) => {
            for (name, e) in &batch.errors {
                writeln!(err, "{}: [{}] {}", name, e.code(), e)?;
            }
            batch.len()
        }
    };

    let summary = Summary {
        total: file.len(),
        failed,
    };
    writeln!(
        out,
        "{} of {} types valid",
        summary.total - summary.failed,
        summary.total
    )?;
    Ok(summary)
}
