//! Named-type container produced from one parsed source module

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{BatchShapeErrors, CoreError};
use crate::types::Type;
use crate::validate::validate;

/// Named type definitions in declaration order
///
/// Iteration follows insertion order, never name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct File {
    types: IndexMap<String, Type>,
}

impl File {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a definition
    ///
    /// Replacing an existing name keeps the position it was first declared at
    /// and returns the previous type.
    pub fn insert(&mut self, name: impl Into<String>, ty: Type) -> Option<Type> {
        self.types.insert(name.into(), ty)
    }

    pub fn get(&self, name: &str) -> Option<&Type> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Type)> {
        self.types.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Validate every entry independently
    ///
    /// A failing entry does not stop the others from being checked; all
    /// failures are returned together, tagged with their entry name.
    pub fn validate(&self) -> Result<(), BatchShapeErrors> {
        let mut errors = BatchShapeErrors::new();
        for (name, ty) in self.iter() {
            match validate(ty) {
                Ok(()) => debug!(name, kind = ty.kind_name(), "validated type"),
                Err(e) => {
                    warn!(name, error = %e, "type failed shape validation");
                    errors.push(name, e);
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Decode a container from its JSON form
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromIterator<(String, Type)> for File {
    fn from_iter<I: IntoIterator<Item = (String, Type)>>(iter: I) -> Self {
        Self {
            types: iter.into_iter().collect(),
        }
    }
}

/// Builder pattern for constructing a [`File`]
#[derive(Debug, Default)]
pub struct FileBuilder {
    file: File,
}

impl FileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_type(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.file.insert(name, ty);
        self
    }

    pub fn build(self) -> File {
        self.file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;

    #[test]
    fn test_file_builder_keeps_declaration_order() {
        let file = FileBuilder::new()
            .add_type("B", Type::STRING)
            .add_type("A", Type::INT32)
            .add_type("C", Type::BOOLEAN)
            .build();

        assert_eq!(file.len(), 3);
        assert_eq!(file.names().collect::<Vec<_>>(), vec!["B", "A", "C"]);
        assert_eq!(file.get("A"), Some(&Type::INT32));
        assert!(file.contains("C"));
        assert!(!file.contains("D"));
    }

    #[test]
    fn test_replacing_keeps_position() {
        let mut file = File::new();
        assert!(file.is_empty());
        file.insert("First", Type::STRING);
        file.insert("Second", Type::STRING);

        let previous = file.insert("First", Type::DOUBLE);
        assert_eq!(previous, Some(Type::STRING));
        assert_eq!(file.names().collect::<Vec<_>>(), vec!["First", "Second"]);
        assert_eq!(file.get("First"), Some(&Type::DOUBLE));
    }

    #[test]
    fn test_validate_reports_every_failing_entry() {
        let file = FileBuilder::new()
            .add_type("Good", Type::array(Type::STRING))
            .add_type("Twice", Type::optional(Type::optional(Type::INT32)))
            .add_type("Single", Type::union(vec![Type::STRING]))
            .build();

        let errors = file.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.errors[0].0, "Twice");
        assert!(matches!(errors.errors[0].1, ShapeError::DoubleOptional { .. }));
        assert_eq!(errors.errors[1].0, "Single");
        assert!(errors.for_name("Good").is_none());
    }

    #[test]
    fn test_json_preserves_document_order() {
        let json = r#"{"types": {"Zeta": "string", "Alpha": {"type": "array", "readonly": true, "element": "int32"}}}"#;
        let file = File::from_json(json).unwrap();
        assert_eq!(file.names().collect::<Vec<_>>(), vec!["Zeta", "Alpha"]);
        assert_eq!(file.get("Alpha"), Some(&Type::readonly_array(Type::INT32)));

        let encoded = file.to_json_pretty().unwrap();
        assert_eq!(File::from_json(&encoded).unwrap(), file);
        assert!(encoded.find("Zeta").unwrap() < encoded.find("Alpha").unwrap());
    }

    #[test]
    fn test_from_iterator() {
        let file: File = vec![("X".to_string(), Type::NULL), ("Y".to_string(), Type::VOID)]
            .into_iter()
            .collect();
        assert_eq!(file.names().collect::<Vec<_>>(), vec!["X", "Y"]);
    }
}
