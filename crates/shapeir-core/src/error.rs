use std::fmt;

use thiserror::Error;

use crate::path::TypePath;
use crate::types::PrimitiveType;

/// A malformed type value, located by the path of the offending sub-tree
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("optional wraps another optional at {path}")]
    DoubleOptional { path: TypePath },

    #[error("with_default wraps {inner} at {path}")]
    NestedDefault { path: TypePath, inner: &'static str },

    #[error("default value `{literal}` is not a valid {expected} literal at {path}")]
    InvalidDefaultLiteral {
        path: TypePath,
        literal: String,
        expected: &'static str,
    },

    #[error("union needs at least 2 elements, found {count} at {path}")]
    EmptyOrSingletonUnion { path: TypePath, count: usize },

    #[error("union elements {first} and {second} are identical at {path}")]
    DuplicateUnionMember {
        path: TypePath,
        first: usize,
        second: usize,
    },

    #[error("object literal declares member `{name}` more than once at {path}")]
    DuplicateMemberName { path: TypePath, name: String },

    #[error("allMembersReadonly is {declared} but members say {actual} at {path}")]
    InconsistentReadonlyFlag {
        path: TypePath,
        declared: bool,
        actual: bool,
    },

    #[error("enum must be backed by string or int32, not {element} at {path}")]
    InvalidEnumElement {
        path: TypePath,
        element: &'static str,
    },
}

impl ShapeError {
    pub fn path(&self) -> &TypePath {
        match self {
            ShapeError::DoubleOptional { path }
            | ShapeError::NestedDefault { path, .. }
            | ShapeError::InvalidDefaultLiteral { path, .. }
            | ShapeError::EmptyOrSingletonUnion { path, .. }
            | ShapeError::DuplicateUnionMember { path, .. }
            | ShapeError::DuplicateMemberName { path, .. }
            | ShapeError::InconsistentReadonlyFlag { path, .. }
            | ShapeError::InvalidEnumElement { path, .. } => path,
        }
    }

    /// Short code for the kind of violation
    pub fn code(&self) -> &'static str {
        match self {
            ShapeError::DoubleOptional { .. } => "DoubleOptional",
            ShapeError::NestedDefault { .. } => "NestedDefault",
            ShapeError::InvalidDefaultLiteral { .. } => "InvalidDefaultLiteral",
            ShapeError::EmptyOrSingletonUnion { .. } => "EmptyOrSingletonUnion",
            ShapeError::DuplicateUnionMember { .. } => "DuplicateUnionMember",
            ShapeError::DuplicateMemberName { .. } => "DuplicateMemberName",
            ShapeError::InconsistentReadonlyFlag { .. } => "InconsistentReadonlyFlag",
            ShapeError::InvalidEnumElement { .. } => "InvalidEnumElement",
        }
    }

    pub(crate) fn invalid_enum(path: &TypePath, element: PrimitiveType) -> Self {
        ShapeError::InvalidEnumElement {
            path: path.clone(),
            element: element.wire_name(),
        }
    }
}

/// Shape errors for every failing entry of a container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchShapeErrors {
    pub errors: Vec<(String, ShapeError)>,
}

impl BatchShapeErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, error: ShapeError) {
        self.errors.push((name.into(), error));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Error reported for one entry, if any
    pub fn for_name(&self, name: &str) -> Option<&ShapeError> {
        self.errors
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, e)| e)
    }
}

impl fmt::Display for BatchShapeErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "No shape errors")
        } else if self.errors.len() == 1 {
            let (name, error) = &self.errors[0];
            write!(f, "Shape error in {}: {}", name, error)
        } else {
            writeln!(f, "{} shape errors:", self.errors.len())?;
            for (i, (name, error)) in self.errors.iter().enumerate() {
                writeln!(f, "  {}. {}: {}", i + 1, name, error)?;
            }
            Ok(())
        }
    }
}

impl std::error::Error for BatchShapeErrors {}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown type name: {0}")]
    UnknownTypeName(String),

    #[error("Unknown enum element: {0}")]
    UnknownEnumElement(String),

    #[error("Invalid container JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Batch(#[from] BatchShapeErrors),
}
