//! Locations of sub-trees inside a type, for diagnostics

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Element,
    ReturnType,
    Argument(usize),
    UnionElement(usize),
    Mixin(usize),
    Member(String),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Element => write!(f, ".element"),
            PathSegment::ReturnType => write!(f, ".returnType"),
            PathSegment::Argument(i) => write!(f, ".argumentTypes[{}]", i),
            PathSegment::UnionElement(i) => write!(f, ".elements[{}]", i),
            PathSegment::Mixin(i) => write!(f, ".mixins[{}]", i),
            PathSegment::Member(name) => write!(f, ".members.{}", name),
        }
    }
}

/// Path from the root of a type to one of its sub-trees
///
/// Rendered as `$` for the root and `$.element.elements[1]` style below it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TypePath {
    segments: Vec<PathSegment>,
}

impl TypePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// New path one level below this one
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for segment in &self.segments {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_display() {
        let root = TypePath::root();
        assert_eq!(root.to_string(), "$");
        assert!(root.is_root());

        let nested = root
            .child(PathSegment::Element)
            .child(PathSegment::UnionElement(1))
            .child(PathSegment::Member("size".to_string()));
        assert_eq!(nested.to_string(), "$.element.elements[1].members.size");
        assert_eq!(nested.segments().len(), 3);

        let function = root
            .child(PathSegment::Argument(0))
            .child(PathSegment::Mixin(2));
        assert_eq!(function.to_string(), "$.argumentTypes[0].mixins[2]");
        assert_eq!(root.child(PathSegment::ReturnType).to_string(), "$.returnType");
    }
}
