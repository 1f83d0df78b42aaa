//! Container printer
//!
//! Prints every entry of a [`File`] in declaration order. Entries are
//! independent: one that fails to validate or render is reported and the
//! rest are still printed. References are printed by name, never expanded.

use shapeir_core::File;
use tracing::{debug, warn};

use crate::error::{BatchErrors, CodegenError, ErrorEntry, PrintError};
use crate::printer::Printer;
use crate::Render;

/// Outcome of printing one named entry
#[derive(Debug, Clone, PartialEq)]
pub struct PrintedEntry {
    pub name: String,
    pub result: Result<String, PrintError>,
}

impl PrintedEntry {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Print each entry with `renderer`, keeping the container's order
pub fn print_file_with<R: Render>(renderer: &R, file: &File) -> Vec<PrintedEntry> {
    file.iter()
        .map(|(name, ty)| {
            let result = renderer.render(ty);
            match &result {
                Ok(text) => debug!(name, kind = ty.kind_name(), len = text.len(), "printed type"),
                Err(e) => warn!(name, error = %e, "failed to print type"),
            }
            PrintedEntry {
                name: name.to_string(),
                result,
            }
        })
        .collect()
}

/// Print each entry with the default printer
pub fn print_file(file: &File) -> Vec<PrintedEntry> {
    print_file_with(&Printer::new(), file)
}

/// Print every entry, or report every failing entry at once
pub fn print_file_strict(file: &File) -> Result<Vec<(String, String)>, CodegenError> {
    collect_strict(print_file(file))
}

fn collect_strict(entries: Vec<PrintedEntry>) -> Result<Vec<(String, String)>, CodegenError> {
    let mut errors = BatchErrors::new();
    let mut printed = Vec::with_capacity(entries.len());

    for entry in entries {
        match entry.result {
            Ok(text) => printed.push((entry.name, text)),
            Err(e) => errors.add(ErrorEntry::from_print_error(&entry.name, &e)),
        }
    }

    if errors.has_errors() {
        return Err(errors.into());
    }
    Ok(printed)
}

/// Render a container as `type Name = ...;` lines for diagnostics
///
/// Entries that fail are rendered as a comment carrying the error, so the
/// output still lists every entry.
pub fn render_declarations(file: &File) -> String {
    let mut out = String::new();
    for entry in print_file(file) {
        match entry.result {
            Ok(text) => out.push_str(&format!("type {} = {};\n", entry.name, text)),
            Err(e) => out.push_str(&format!("// type {}: {}\n", entry.name, e)),
        }
    }
    out
}

impl Printer {
    pub fn print_file(&self, file: &File) -> Vec<PrintedEntry> {
        print_file_with(self, file)
    }

    pub fn print_file_strict(&self, file: &File) -> Result<Vec<(String, String)>, CodegenError> {
        collect_strict(print_file_with(self, file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrinterConfig;
    use pretty_assertions::assert_eq;
    use shapeir_core::{FileBuilder, Type};

    #[test]
    fn test_declared_order_is_kept() {
        let file = FileBuilder::new()
            .add_type("B", Type::STRING)
            .add_type("A", Type::INT32)
            .add_type("C", Type::BOOLEAN)
            .build();

        let names: Vec<_> = print_file(&file).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_failure_does_not_stop_siblings() {
        let file = FileBuilder::new()
            .add_type("First", Type::array(Type::STRING))
            .add_type("Broken", Type::union(vec![Type::STRING]))
            .add_type("Last", Type::reference("First"))
            .build();

        let entries = print_file(&file);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].result, Ok("string[]".to_string()));
        assert!(matches!(entries[1].result, Err(PrintError::Shape(_))));
        assert_eq!(entries[2].result, Ok("First".to_string()));
    }

    #[test]
    fn test_strict_collects_all_failures() {
        let file = FileBuilder::new()
            .add_type("Ok", Type::STRING)
            .add_type("One", Type::union(vec![]))
            .add_type("Two", Type::optional(Type::optional(Type::NULL)))
            .build();

        match print_file_strict(&file) {
            Err(CodegenError::Batch { count, summary }) => {
                assert_eq!(count, 2);
                assert!(summary.contains("at One:"), "{}", summary);
                assert!(summary.contains("at Two:"), "{}", summary);
            }
            other => panic!("Expected Batch error, got {:?}", other),
        }

        let good = FileBuilder::new().add_type("Ok", Type::STRING).build();
        assert_eq!(
            print_file_strict(&good).unwrap(),
            vec![("Ok".to_string(), "string".to_string())]
        );
    }

    #[test]
    fn test_render_declarations() {
        let file = FileBuilder::new()
            .add_type("Id", Type::INT32)
            .add_type("Bad", Type::union(vec![Type::NULL]))
            .build();
        assert_eq!(
            render_declarations(&file),
            "type Id = Int32;\n// type Bad: Invalid shape: union needs at least 2 elements, found 1 at $\n"
        );
    }

    #[test]
    fn test_printer_methods_use_its_config() {
        let file = FileBuilder::new()
            .add_type("Twice", Type::optional(Type::optional(Type::NULL)))
            .build();
        let lenient = Printer::new().with_config(PrinterConfig {
            validate_before_print: false,
        });
        assert_eq!(
            lenient.print_file_strict(&file).unwrap(),
            vec![(
                "Twice".to_string(),
                "((null | undefined) | undefined)".to_string()
            )]
        );
        assert!(!lenient.print_file(&file).is_empty());
    }
}
