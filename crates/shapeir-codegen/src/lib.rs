//! Printers that turn shapeir types back into declaration text

pub mod config;
pub mod error;
pub mod file;
pub mod printer;

use shapeir_core::Type;

pub use config::PrinterConfig;
pub use error::{BatchErrors, CodegenError, ErrorCategory, ErrorEntry, ErrorLocation, PrintError};
pub use file::{print_file, print_file_strict, render_declarations, PrintedEntry};
pub use printer::{print_type, Printer};

/// Common trait for anything that renders a single type to text
pub trait Render {
    fn render(&self, ty: &Type) -> Result<String, PrintError>;
}

impl Render for Printer {
    fn render(&self, ty: &Type) -> Result<String, PrintError> {
        self.print(ty)
    }
}
