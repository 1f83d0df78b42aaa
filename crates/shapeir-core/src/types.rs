//! Closed type algebra for native module interfaces
//!
//! Every shape a type annotation can take is one variant of [`Type`]. The set
//! is closed on purpose: the printer and every consumer match on it
//! exhaustively, so adding a shape is a breaking change that the compiler
//! points out everywhere it matters.

use serde::{Deserialize, Serialize};

use crate::repr::TypeRepr;

/// Built-in scalar and marker types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Void,
    Null,
    Undefined,
    Boolean,
    Int32,
    String,
    Float,
    Double,
    /// Opaque object
    Object,
    /// Marker for a union of numeric literals
    NumberLiterals,
    /// Marker for a union of string literals
    StringLiterals,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 11] = [
        PrimitiveType::Void,
        PrimitiveType::Null,
        PrimitiveType::Undefined,
        PrimitiveType::Boolean,
        PrimitiveType::Int32,
        PrimitiveType::String,
        PrimitiveType::Float,
        PrimitiveType::Double,
        PrimitiveType::Object,
        PrimitiveType::NumberLiterals,
        PrimitiveType::StringLiterals,
    ];

    /// Name used in the serialized form handed over by parsers
    pub fn wire_name(self) -> &'static str {
        match self {
            PrimitiveType::Void => "void",
            PrimitiveType::Null => "null",
            PrimitiveType::Undefined => "undefined",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Int32 => "int32",
            PrimitiveType::String => "string",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Object => "object",
            PrimitiveType::NumberLiterals => "number_literals",
            PrimitiveType::StringLiterals => "string_literals",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.wire_name() == name)
    }

    /// Numeric primitives accept numeric literal defaults
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            PrimitiveType::Int32
                | PrimitiveType::Float
                | PrimitiveType::Double
                | PrimitiveType::NumberLiterals
        )
    }
}

/// Platform-domain types that are opaque at this layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredefinedType {
    RootTag,
    ImageSource,
    ColorValue,
    ProcessedColorValue,
    PointValue,
    EdgeInsetsValue,
    Stringish,
    UnsafeObject,
}

impl PredefinedType {
    pub const ALL: [PredefinedType; 8] = [
        PredefinedType::RootTag,
        PredefinedType::ImageSource,
        PredefinedType::ColorValue,
        PredefinedType::ProcessedColorValue,
        PredefinedType::PointValue,
        PredefinedType::EdgeInsetsValue,
        PredefinedType::Stringish,
        PredefinedType::UnsafeObject,
    ];

    /// Predefined types are named identically on the wire and in output
    pub fn name(self) -> &'static str {
        match self {
            PredefinedType::RootTag => "RootTag",
            PredefinedType::ImageSource => "ImageSource",
            PredefinedType::ColorValue => "ColorValue",
            PredefinedType::ProcessedColorValue => "ProcessedColorValue",
            PredefinedType::PointValue => "PointValue",
            PredefinedType::EdgeInsetsValue => "EdgeInsetsValue",
            PredefinedType::Stringish => "Stringish",
            PredefinedType::UnsafeObject => "UnsafeObject",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// Reference to a named type resolved elsewhere; never dereferenced here
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceType {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub readonly: bool,
    pub element: Box<Type>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Promise,
    Readonly,
    Optional,
}

/// Single-argument wrapper (`Promise<T>`, `Readonly<T>`, optional `T`)
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorType {
    pub kind: OperatorKind,
    pub element: Box<Type>,
}

/// Optional parameter with a spelled-out default
///
/// `default_value` is kept as literal source text and never re-escaped.
#[derive(Debug, Clone, PartialEq)]
pub struct WithDefaultType {
    pub element: Box<Type>,
    pub default_value: String,
}

/// Callable signature
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    pub return_type: Box<Type>,
    pub argument_types: Vec<Type>,
}

/// One field of an object literal
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectMember {
    pub name: String,
    pub ty: Type,
    /// Field may be absent (`name?: T`)
    pub optional: bool,
    /// Field is immutable (`readonly name: T`)
    pub readonly: bool,
}

impl ObjectMember {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            readonly: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLiteralType {
    /// Object-shaped types intersected with the member block, in order
    pub mixins: Vec<Type>,
    pub members: Vec<ObjectMember>,
    /// Must agree with the `readonly` flag of every member
    pub all_members_readonly: bool,
}

impl ObjectLiteralType {
    /// Build a literal, deriving `all_members_readonly` from the members
    pub fn new(members: Vec<ObjectMember>) -> Self {
        let all_members_readonly = members.iter().all(|m| m.readonly);
        Self {
            mixins: Vec::new(),
            members,
            all_members_readonly,
        }
    }

    pub fn with_mixins(mut self, mixins: Vec<Type>) -> Self {
        self.mixins = mixins;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnionType {
    pub elements: Vec<Type>,
}

/// Enumeration backed by a primitive; member values are resolved elsewhere
///
/// Only `string` and `int32` are legal backings. The field is a plain
/// primitive so that inbound data can be checked rather than trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumType {
    pub element: PrimitiveType,
}

impl EnumType {
    pub fn string() -> Self {
        Self {
            element: PrimitiveType::String,
        }
    }

    pub fn int32() -> Self {
        Self {
            element: PrimitiveType::Int32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Bubbling,
    Direct,
}

/// Event handler wrapping its payload type
#[derive(Debug, Clone, PartialEq)]
pub struct EventType {
    pub kind: EventKind,
    pub element: Box<Type>,
}

/// Core type representation - the closed algebra
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TypeRepr", into = "TypeRepr")]
pub enum Type {
    Primitive(PrimitiveType),
    Predefined(PredefinedType),
    Reference(ReferenceType),
    Array(ArrayType),
    Operator(OperatorType),
    WithDefault(WithDefaultType),
    Function(FunctionType),
    ObjectLiteral(ObjectLiteralType),
    Union(UnionType),
    Enum(EnumType),
    Event(EventType),
}

impl Type {
    pub const VOID: Type = Type::Primitive(PrimitiveType::Void);
    pub const NULL: Type = Type::Primitive(PrimitiveType::Null);
    pub const UNDEFINED: Type = Type::Primitive(PrimitiveType::Undefined);
    pub const BOOLEAN: Type = Type::Primitive(PrimitiveType::Boolean);
    pub const INT32: Type = Type::Primitive(PrimitiveType::Int32);
    pub const STRING: Type = Type::Primitive(PrimitiveType::String);
    pub const FLOAT: Type = Type::Primitive(PrimitiveType::Float);
    pub const DOUBLE: Type = Type::Primitive(PrimitiveType::Double);
    pub const OBJECT: Type = Type::Primitive(PrimitiveType::Object);

    pub fn reference(name: impl Into<String>) -> Self {
        Type::Reference(ReferenceType { name: name.into() })
    }

    pub fn array(element: impl Into<Type>) -> Self {
        Type::Array(ArrayType {
            readonly: false,
            element: Box::new(element.into()),
        })
    }

    pub fn readonly_array(element: impl Into<Type>) -> Self {
        Type::Array(ArrayType {
            readonly: true,
            element: Box::new(element.into()),
        })
    }

    pub fn operator(kind: OperatorKind, element: impl Into<Type>) -> Self {
        Type::Operator(OperatorType {
            kind,
            element: Box::new(element.into()),
        })
    }

    pub fn promise(element: impl Into<Type>) -> Self {
        Self::operator(OperatorKind::Promise, element)
    }

    pub fn readonly(element: impl Into<Type>) -> Self {
        Self::operator(OperatorKind::Readonly, element)
    }

    pub fn optional(element: impl Into<Type>) -> Self {
        Self::operator(OperatorKind::Optional, element)
    }

    pub fn with_default(element: impl Into<Type>, default_value: impl Into<String>) -> Self {
        Type::WithDefault(WithDefaultType {
            element: Box::new(element.into()),
            default_value: default_value.into(),
        })
    }

    pub fn function(return_type: impl Into<Type>, argument_types: Vec<Type>) -> Self {
        Type::Function(FunctionType {
            return_type: Box::new(return_type.into()),
            argument_types,
        })
    }

    pub fn union(elements: Vec<Type>) -> Self {
        Type::Union(UnionType { elements })
    }

    pub fn string_enum() -> Self {
        Type::Enum(EnumType::string())
    }

    pub fn int32_enum() -> Self {
        Type::Enum(EnumType::int32())
    }

    pub fn bubbling_event(element: impl Into<Type>) -> Self {
        Type::Event(EventType {
            kind: EventKind::Bubbling,
            element: Box::new(element.into()),
        })
    }

    pub fn direct_event(element: impl Into<Type>) -> Self {
        Type::Event(EventType {
            kind: EventKind::Direct,
            element: Box::new(element.into()),
        })
    }

    /// Object literal without mixins
    pub fn object(members: Vec<ObjectMember>) -> Self {
        Type::ObjectLiteral(ObjectLiteralType::new(members))
    }

    /// Stable name of the variant, used in diagnostics and log fields
    pub fn kind_name(&self) -> &'static str {
        match self {
            Type::Primitive(_) => "primitive",
            Type::Predefined(_) => "predefined",
            Type::Reference(_) => "reference",
            Type::Array(_) => "array",
            Type::Operator(op) => match op.kind {
                OperatorKind::Promise => "promise",
                OperatorKind::Readonly => "readonly",
                OperatorKind::Optional => "optional",
            },
            Type::WithDefault(_) => "with_default",
            Type::Function(_) => "function",
            Type::ObjectLiteral(_) => "object_literal",
            Type::Union(_) => "union",
            Type::Enum(_) => "enum",
            Type::Event(ev) => match ev.kind {
                EventKind::Bubbling => "BubblingEventHandler",
                EventKind::Direct => "DirectEventHandler",
            },
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            Type::Operator(OperatorType {
                kind: OperatorKind::Optional,
                ..
            })
        )
    }
}

impl From<PrimitiveType> for Type {
    fn from(p: PrimitiveType) -> Self {
        Type::Primitive(p)
    }
}

impl From<PredefinedType> for Type {
    fn from(p: PredefinedType) -> Self {
        Type::Predefined(p)
    }
}

impl From<ObjectLiteralType> for Type {
    fn from(o: ObjectLiteralType) -> Self {
        Type::ObjectLiteral(o)
    }
}

impl From<EnumType> for Type {
    fn from(e: EnumType) -> Self {
        Type::Enum(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for p in PrimitiveType::ALL {
            assert_eq!(PrimitiveType::from_wire_name(p.wire_name()), Some(p));
        }
        for p in PredefinedType::ALL {
            assert_eq!(PredefinedType::from_name(p.name()), Some(p));
        }
        assert_eq!(PrimitiveType::from_wire_name("Int32"), None);
        assert_eq!(PredefinedType::from_name("rootTag"), None);
    }

    #[test]
    fn test_object_literal_derives_readonly_flag() {
        let all = ObjectLiteralType::new(vec![
            ObjectMember::new("a", Type::STRING).readonly(),
            ObjectMember::new("b", Type::INT32).readonly(),
        ]);
        assert!(all.all_members_readonly);

        let mixed = ObjectLiteralType::new(vec![
            ObjectMember::new("a", Type::STRING).readonly(),
            ObjectMember::new("b", Type::INT32),
        ]);
        assert!(!mixed.all_members_readonly);

        assert!(ObjectLiteralType::new(vec![]).all_members_readonly);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Type::array(Type::STRING), Type::array(Type::STRING));
        assert_ne!(Type::array(Type::STRING), Type::readonly_array(Type::STRING));
        assert_ne!(Type::promise(Type::VOID), Type::function(Type::VOID, vec![]));
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(Type::optional(Type::STRING).kind_name(), "optional");
        assert_eq!(Type::direct_event(Type::OBJECT).kind_name(), "DirectEventHandler");
        assert_eq!(Type::function(Type::VOID, vec![]).kind_name(), "function");
        assert!(Type::optional(Type::NULL).is_optional());
        assert!(!Type::readonly(Type::NULL).is_optional());
    }
}
