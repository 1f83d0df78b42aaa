//! Shape validation for type values
//!
//! Checks the constraints the type algebra cannot express on its own:
//! - optional never wraps optional
//! - with_default never wraps optional or another with_default, and its
//!   default literal fits the primitive underneath
//! - unions have at least two pairwise distinct elements
//! - object literal member names are unique and `allMembersReadonly` agrees
//!   with the members
//! - enums are backed by `string` or `int32`
//!
//! A composite is checked before its children, children in declared order,
//! and the first violation found is returned.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::ShapeError;
use crate::path::{PathSegment, TypePath};
use crate::types::{OperatorKind, PrimitiveType, Type};

static INT_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(0|[1-9][0-9]*)$").expect("valid int literal regex"));

static NUMBER_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?$")
        .expect("valid number literal regex")
});

static STRING_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^('([^'\\]|\\.)*'|"([^"\\]|\\.)*")$"#).expect("valid string literal regex")
});

/// Validate a type and every sub-tree below it
pub fn validate(ty: &Type) -> Result<(), ShapeError> {
    validate_at(ty, &TypePath::root()).inspect_err(|e| {
        debug!(kind = e.code(), path = %e.path(), "shape validation failed");
    })
}

impl Type {
    pub fn validate(&self) -> Result<(), ShapeError> {
        validate(self)
    }
}

fn validate_at(ty: &Type, path: &TypePath) -> Result<(), ShapeError> {
    match ty {
        Type::Primitive(_) | Type::Predefined(_) | Type::Reference(_) => Ok(()),

        Type::Array(array) => validate_at(&array.element, &path.child(PathSegment::Element)),

        Type::Operator(op) => {
            if op.kind == OperatorKind::Optional && op.element.is_optional() {
                return Err(ShapeError::DoubleOptional { path: path.clone() });
            }
            validate_at(&op.element, &path.child(PathSegment::Element))
        }

        Type::WithDefault(wd) => {
            match wd.element.as_ref() {
                inner if inner.is_optional() => {
                    return Err(ShapeError::NestedDefault {
                        path: path.clone(),
                        inner: "optional",
                    });
                }
                Type::WithDefault(_) => {
                    return Err(ShapeError::NestedDefault {
                        path: path.clone(),
                        inner: "with_default",
                    });
                }
                _ => {}
            }
            if !literal_matches(&wd.element, &wd.default_value) {
                return Err(ShapeError::InvalidDefaultLiteral {
                    path: path.clone(),
                    literal: wd.default_value.clone(),
                    expected: expected_literal(&wd.element),
                });
            }
            validate_at(&wd.element, &path.child(PathSegment::Element))
        }

        Type::Function(func) => {
            validate_at(&func.return_type, &path.child(PathSegment::ReturnType))?;
            for (i, arg) in func.argument_types.iter().enumerate() {
                validate_at(arg, &path.child(PathSegment::Argument(i)))?;
            }
            Ok(())
        }

        Type::ObjectLiteral(obj) => {
            let mut seen = HashSet::new();
            for member in &obj.members {
                if !seen.insert(member.name.as_str()) {
                    return Err(ShapeError::DuplicateMemberName {
                        path: path.clone(),
                        name: member.name.clone(),
                    });
                }
            }

            // Conjunction over no members is true
            let actual = obj.members.iter().all(|m| m.readonly);
            if actual != obj.all_members_readonly {
                return Err(ShapeError::InconsistentReadonlyFlag {
                    path: path.clone(),
                    declared: obj.all_members_readonly,
                    actual,
                });
            }

            for (i, mixin) in obj.mixins.iter().enumerate() {
                validate_at(mixin, &path.child(PathSegment::Mixin(i)))?;
            }
            for member in &obj.members {
                validate_at(&member.ty, &path.child(PathSegment::Member(member.name.clone())))?;
            }
            Ok(())
        }

        Type::Union(union) => {
            if union.elements.len() < 2 {
                return Err(ShapeError::EmptyOrSingletonUnion {
                    path: path.clone(),
                    count: union.elements.len(),
                });
            }
            for (i, a) in union.elements.iter().enumerate() {
                if let Some(offset) = union.elements[i + 1..].iter().position(|b| a == b) {
                    return Err(ShapeError::DuplicateUnionMember {
                        path: path.clone(),
                        first: i,
                        second: i + 1 + offset,
                    });
                }
            }
            for (i, element) in union.elements.iter().enumerate() {
                validate_at(element, &path.child(PathSegment::UnionElement(i)))?;
            }
            Ok(())
        }

        Type::Enum(e) => match e.element {
            PrimitiveType::String | PrimitiveType::Int32 => Ok(()),
            other => Err(ShapeError::invalid_enum(path, other)),
        },

        Type::Event(event) => validate_at(&event.element, &path.child(PathSegment::Element)),
    }
}

/// Peel promise/readonly/optional wrappers down to the annotated type
fn strip_operators(mut ty: &Type) -> &Type {
    while let Type::Operator(op) = ty {
        ty = &op.element;
    }
    ty
}

/// Whether `literal` is a lexically valid default for `ty`
///
/// Types without a literal grammar at this layer (references, predefined
/// platform types, arrays, objects, ...) accept any non-empty text.
pub fn literal_matches(ty: &Type, literal: &str) -> bool {
    if literal.trim().is_empty() {
        return false;
    }
    match strip_operators(ty) {
        Type::Primitive(p) => primitive_literal_matches(*p, literal),
        Type::Enum(e) => match e.element {
            PrimitiveType::String | PrimitiveType::Int32 => {
                primitive_literal_matches(e.element, literal)
            }
            _ => true,
        },
        Type::Union(union) => union.elements.iter().any(|e| literal_matches(e, literal)),
        _ => true,
    }
}

fn primitive_literal_matches(p: PrimitiveType, literal: &str) -> bool {
    match p {
        PrimitiveType::Boolean => literal == "true" || literal == "false",
        PrimitiveType::Int32 => INT_LITERAL.is_match(literal) && literal.parse::<i32>().is_ok(),
        PrimitiveType::Float | PrimitiveType::Double | PrimitiveType::NumberLiterals => {
            NUMBER_LITERAL.is_match(literal)
        }
        PrimitiveType::String | PrimitiveType::StringLiterals => {
            literal == "null" || STRING_LITERAL.is_match(literal)
        }
        PrimitiveType::Null => literal == "null",
        PrimitiveType::Void | PrimitiveType::Undefined => literal == "undefined",
        PrimitiveType::Object => {
            literal == "null" || (literal.starts_with('{') && literal.ends_with('}'))
        }
    }
}

fn expected_literal(ty: &Type) -> &'static str {
    match strip_operators(ty) {
        Type::Primitive(p) => match p {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Int32 => "int32",
            PrimitiveType::Float | PrimitiveType::Double | PrimitiveType::NumberLiterals => {
                "number"
            }
            PrimitiveType::String | PrimitiveType::StringLiterals => "string",
            PrimitiveType::Null => "null",
            PrimitiveType::Void | PrimitiveType::Undefined => "undefined",
            PrimitiveType::Object => "object",
        },
        Type::Enum(e) if e.element == PrimitiveType::Int32 => "int32 enum",
        Type::Enum(_) => "string enum",
        Type::Union(_) => "union member",
        _ => "non-empty",
    }
}
