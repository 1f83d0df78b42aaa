//! Serialized form of [`Type`] exchanged with parsers
//!
//! Primitive and predefined types are bare strings (`"int32"`, `"RootTag"`);
//! every composite is an object discriminated by its `type` field.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::types::{
    ArrayType, EnumType, EventKind, EventType, FunctionType, ObjectLiteralType, ObjectMember,
    OperatorKind, OperatorType, PredefinedType, PrimitiveType, ReferenceType, Type, UnionType,
    WithDefaultType,
};

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TypeRepr {
    Name(String),
    Node(NodeRepr),
}

// Dispatch on the JSON kind so errors from the tagged node (unknown tag,
// bad nested name) reach the caller instead of a generic untagged failure
impl<'de> Deserialize<'de> for TypeRepr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ReprVisitor;

        impl<'de> Visitor<'de> for ReprVisitor {
            type Value = TypeRepr;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a type name or an object with a `type` tag")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TypeRepr, E> {
                Ok(TypeRepr::Name(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<TypeRepr, E> {
                Ok(TypeRepr::Name(v))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<TypeRepr, A::Error> {
                NodeRepr::deserialize(de::value::MapAccessDeserializer::new(map)).map(TypeRepr::Node)
            }
        }

        deserializer.deserialize_any(ReprVisitor)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeRepr {
    #[serde(rename = "reference")]
    Reference { name: String },

    #[serde(rename = "array")]
    Array { readonly: bool, element: Type },

    #[serde(rename = "promise")]
    Promise { element: Type },

    #[serde(rename = "readonly")]
    Readonly { element: Type },

    #[serde(rename = "optional")]
    Optional { element: Type },

    #[serde(rename = "with_default", rename_all = "camelCase")]
    WithDefault { element: Type, default_value: String },

    #[serde(rename = "function", rename_all = "camelCase")]
    Function {
        return_type: Type,
        argument_types: Vec<Type>,
    },

    #[serde(rename = "object_literal", rename_all = "camelCase")]
    ObjectLiteral {
        mixins: Vec<Type>,
        members: Vec<MemberRepr>,
        all_members_readonly: bool,
    },

    #[serde(rename = "union")]
    Union { elements: Vec<Type> },

    #[serde(rename = "enum")]
    Enum { element: String },

    #[serde(rename = "BubblingEventHandler")]
    BubblingEventHandler { element: Type },

    #[serde(rename = "DirectEventHandler")]
    DirectEventHandler { element: Type },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRepr {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub readonly: bool,
}

impl TryFrom<TypeRepr> for Type {
    type Error = CoreError;

    fn try_from(repr: TypeRepr) -> Result<Self, Self::Error> {
        match repr {
            TypeRepr::Name(name) => PrimitiveType::from_wire_name(&name)
                .map(Type::Primitive)
                .or_else(|| PredefinedType::from_name(&name).map(Type::Predefined))
                .ok_or(CoreError::UnknownTypeName(name)),
            TypeRepr::Node(node) => Type::try_from(node),
        }
    }
}

impl TryFrom<NodeRepr> for Type {
    type Error = CoreError;

    fn try_from(node: NodeRepr) -> Result<Self, Self::Error> {
        let ty = match node {
            NodeRepr::Reference { name } => Type::Reference(ReferenceType { name }),
            NodeRepr::Array { readonly, element } => Type::Array(ArrayType {
                readonly,
                element: Box::new(element),
            }),
            NodeRepr::Promise { element } => Type::operator(OperatorKind::Promise, element),
            NodeRepr::Readonly { element } => Type::operator(OperatorKind::Readonly, element),
            NodeRepr::Optional { element } => Type::operator(OperatorKind::Optional, element),
            NodeRepr::WithDefault {
                element,
                default_value,
            } => Type::with_default(element, default_value),
            NodeRepr::Function {
                return_type,
                argument_types,
            } => Type::function(return_type, argument_types),
            NodeRepr::ObjectLiteral {
                mixins,
                members,
                all_members_readonly,
            } => Type::ObjectLiteral(ObjectLiteralType {
                mixins,
                members: members
                    .into_iter()
                    .map(|m| ObjectMember {
                        name: m.name,
                        ty: m.ty,
                        optional: m.optional,
                        readonly: m.readonly,
                    })
                    .collect(),
                all_members_readonly,
            }),
            NodeRepr::Union { elements } => Type::Union(UnionType { elements }),
            NodeRepr::Enum { element } => {
                // Backing is checked by the validator, not here
                let element = PrimitiveType::from_wire_name(&element)
                    .ok_or(CoreError::UnknownEnumElement(element))?;
                Type::Enum(EnumType { element })
            }
            NodeRepr::BubblingEventHandler { element } => Type::bubbling_event(element),
            NodeRepr::DirectEventHandler { element } => Type::direct_event(element),
        };
        Ok(ty)
    }
}

impl From<Type> for TypeRepr {
    fn from(ty: Type) -> Self {
        let node = match ty {
            Type::Primitive(p) => return TypeRepr::Name(p.wire_name().to_string()),
            Type::Predefined(p) => return TypeRepr::Name(p.name().to_string()),
            Type::Reference(ReferenceType { name }) => NodeRepr::Reference { name },
            Type::Array(ArrayType { readonly, element }) => NodeRepr::Array {
                readonly,
                element: *element,
            },
            Type::Operator(OperatorType { kind, element }) => match kind {
                OperatorKind::Promise => NodeRepr::Promise { element: *element },
                OperatorKind::Readonly => NodeRepr::Readonly { element: *element },
                OperatorKind::Optional => NodeRepr::Optional { element: *element },
            },
            Type::WithDefault(WithDefaultType {
                element,
                default_value,
            }) => NodeRepr::WithDefault {
                element: *element,
                default_value,
            },
            Type::Function(FunctionType {
                return_type,
                argument_types,
            }) => NodeRepr::Function {
                return_type: *return_type,
                argument_types,
            },
            Type::ObjectLiteral(ObjectLiteralType {
                mixins,
                members,
                all_members_readonly,
            }) => NodeRepr::ObjectLiteral {
                mixins,
                members: members
                    .into_iter()
                    .map(|m| MemberRepr {
                        name: m.name,
                        ty: m.ty,
                        optional: m.optional,
                        readonly: m.readonly,
                    })
                    .collect(),
                all_members_readonly,
            },
            Type::Union(UnionType { elements }) => NodeRepr::Union { elements },
            Type::Enum(EnumType { element }) => NodeRepr::Enum {
                element: element.wire_name().to_string(),
            },
            Type::Event(EventType { kind, element }) => match kind {
                EventKind::Bubbling => NodeRepr::BubblingEventHandler { element: *element },
                EventKind::Direct => NodeRepr::DirectEventHandler { element: *element },
            },
        };
        TypeRepr::Node(node)
    }
}
