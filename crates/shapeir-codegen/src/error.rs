//! Error types and batch error reporting for printing
//!
//! This module provides:
//! - `PrintError` for a single type that could not be rendered
//! - Batch error collection so that every failing entry of a container is
//!   reported together

use std::collections::BTreeMap;
use std::fmt;

use shapeir_core::{ShapeError, TypePath};
use thiserror::Error;

/// Failure to render one type value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrintError {
    /// The printer has no rule for this value; the algebra grew without the
    /// printer being updated
    #[error("Unrecognizable type: {variant} at {path}")]
    UnrenderableVariant { variant: String, path: TypePath },

    #[error("Invalid shape: {0}")]
    Shape(#[from] ShapeError),
}

impl PrintError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PrintError::UnrenderableVariant { .. } => ErrorCategory::Unrenderable,
            PrintError::Shape(_) => ErrorCategory::Shape,
        }
    }
}

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Batch errors ({count} total):\n{summary}")]
    Batch { count: usize, summary: String },
}

/// Location context for where an error occurred
#[derive(Debug, Clone, Default)]
pub struct ErrorLocation {
    /// Container entry name (e.g., "NativeProps")
    pub type_name: Option<String>,
    /// Sub-tree inside the entry
    pub path: Option<TypePath>,
}

impl ErrorLocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn at_path(mut self, path: TypePath) -> Self {
        self.path = Some(path);
        self
    }
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.type_name, &self.path) {
            (Some(t), Some(p)) => {
                write!(f, "{}", t)?;
                for segment in p.segments() {
                    write!(f, "{}", segment)?;
                }
                Ok(())
            }
            (Some(t), None) => write!(f, "{}", t),
            (None, Some(p)) => write!(f, "{}", p),
            (None, None) => write!(f, "<unknown location>"),
        }
    }
}

/// Category of error for better organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorCategory {
    /// Type value violates a shape constraint
    Shape,
    /// Printer has no rendering for the value
    Unrenderable,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Shape => write!(f, "SHAPE"),
            ErrorCategory::Unrenderable => write!(f, "UNRENDERABLE"),
        }
    }
}

/// A single error entry in the batch
#[derive(Debug, Clone)]
pub struct ErrorEntry {
    pub category: ErrorCategory,
    pub location: ErrorLocation,
    pub message: String,
}

impl ErrorEntry {
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            location: ErrorLocation::new(),
            message: message.into(),
        }
    }

    pub fn at(mut self, location: ErrorLocation) -> Self {
        self.location = location;
        self
    }

    /// Entry for a type in a container that failed to print
    pub fn from_print_error(type_name: &str, error: &PrintError) -> Self {
        let path = match error {
            PrintError::UnrenderableVariant { path, .. } => path.clone(),
            PrintError::Shape(shape) => shape.path().clone(),
        };
        Self::new(error.category(), error.to_string())
            .at(ErrorLocation::new().in_type(type_name).at_path(path))
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] at {}: {}", self.category, self.location, self.message)
    }
}

/// Batch error collector for accumulating errors while printing a container
///
/// Instead of failing on the first entry that cannot be printed, this
/// collector accumulates all of them so they can be reported together.
#[derive(Debug, Clone, Default)]
pub struct BatchErrors {
    entries: Vec<ErrorEntry>,
}

impl BatchErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: ErrorEntry) {
        self.entries.push(entry);
    }

    pub fn has_errors(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    pub fn by_category(&self, category: ErrorCategory) -> impl Iterator<Item = &ErrorEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    /// Format errors as a summary report grouped by category
    pub fn format_summary(&self) -> String {
        if self.entries.is_empty() {
            return "No errors".to_string();
        }

        let mut by_category: BTreeMap<ErrorCategory, Vec<&ErrorEntry>> = BTreeMap::new();
        for entry in &self.entries {
            by_category.entry(entry.category).or_default().push(entry);
        }

        let mut lines = Vec::new();
        lines.push(format!("Found {} error(s):", self.entries.len()));
        lines.push(String::new());

        for (category, entries) in by_category {
            lines.push(format!("## {} ({} errors):", category, entries.len()));
            for entry in entries.iter().take(10) {
                lines.push(format!("  - {}", entry));
            }
            if entries.len() > 10 {
                lines.push(format!("  ... and {} more", entries.len() - 10));
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }
}

impl From<BatchErrors> for CodegenError {
    fn from(errors: BatchErrors) -> Self {
        CodegenError::Batch {
            count: errors.count(),
            summary: errors.format_summary(),
        }
    }
}

impl fmt::Display for BatchErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapeir_core::PathSegment;

    #[test]
    fn test_error_location_display() {
        let loc = ErrorLocation::new()
            .in_type("NativeProps")
            .at_path(TypePath::root().child(PathSegment::Member("size".to_string())));
        assert_eq!(loc.to_string(), "NativeProps.members.size");

        let loc = ErrorLocation::new().in_type("NativeProps").at_path(TypePath::root());
        assert_eq!(loc.to_string(), "NativeProps");

        let loc = ErrorLocation::new().in_type("Spec").at_path(
            TypePath::root()
                .child(PathSegment::Member("getValue".to_string()))
                .child(PathSegment::Argument(1))
                .child(PathSegment::Element),
        );
        assert_eq!(loc.to_string(), "Spec.members.getValue.argumentTypes[1].element");

        assert_eq!(ErrorLocation::new().to_string(), "<unknown location>");
    }

    #[test]
    fn test_entry_from_print_error() {
        let err = PrintError::UnrenderableVariant {
            variant: "enum of boolean".to_string(),
            path: TypePath::root().child(PathSegment::Element),
        };
        let entry = ErrorEntry::from_print_error("Mode", &err);
        assert_eq!(entry.category, ErrorCategory::Unrenderable);
        assert_eq!(
            entry.to_string(),
            "[UNRENDERABLE] at Mode.element: Unrecognizable type: enum of boolean at $.element"
        );
    }

    #[test]
    fn test_format_summary_groups_by_category() {
        let mut errors = BatchErrors::new();
        assert_eq!(errors.format_summary(), "No errors");

        errors.add(ErrorEntry::new(ErrorCategory::Unrenderable, "first"));
        errors.add(ErrorEntry::new(ErrorCategory::Shape, "second"));
        errors.add(ErrorEntry::new(ErrorCategory::Shape, "third"));

        let summary = errors.format_summary();
        assert!(summary.contains("3 error(s)"));
        let shape = summary.find("## SHAPE (2 errors)").unwrap();
        let unrenderable = summary.find("## UNRENDERABLE (1 errors)").unwrap();
        assert!(shape < unrenderable);
        assert_eq!(errors.by_category(ErrorCategory::Shape).count(), 2);
    }

    #[test]
    fn test_into_codegen_error() {
        let mut errors = BatchErrors::new();
        errors.add(ErrorEntry::new(ErrorCategory::Shape, "Test error"));

        let CodegenError::Batch { count, summary } = CodegenError::from(errors);
        assert_eq!(count, 1);
        assert!(summary.contains("[SHAPE] at <unknown location>: Test error"), "{}", summary);
    }
}
