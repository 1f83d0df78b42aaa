//! Type printer
//!
//! Renders any [`Type`] to its canonical type-annotation text:
//!
//! | shape | rendering |
//! |---|---|
//! | array | `T[]`, `readonly T[]` |
//! | promise / readonly / optional | `Promise<T>`, `Readonly<T>`, `(T \| undefined)` |
//! | with_default | `WithDefault<T, literal>` |
//! | function | `(A, B) -> R` |
//! | union | `(A \| B)` |
//! | enum | `"enum of string"` |
//! | event | `BubblingEventHandler<T>`, `DirectEventHandler<T>` |
//! | object literal | `{a: T, b?: U}`, `(Mixin & {a: T})` |
//!
//! Children are rendered first and wrapped in the parent's syntax after.

use shapeir_core::types::{
    ArrayType, EnumType, EventKind, FunctionType, ObjectLiteralType, ObjectMember, OperatorKind,
    PredefinedType, PrimitiveType, Type,
};
use shapeir_core::{validate, PathSegment, TypePath};

use crate::config::PrinterConfig;
use crate::error::PrintError;

/// Fixed output name of each primitive
pub fn primitive_name(p: PrimitiveType) -> &'static str {
    match p {
        PrimitiveType::Void => "void",
        PrimitiveType::Null => "null",
        PrimitiveType::Undefined => "undefined",
        PrimitiveType::Boolean => "boolean",
        PrimitiveType::Int32 => "Int32",
        PrimitiveType::String => "string",
        PrimitiveType::Float => "float",
        PrimitiveType::Double => "double",
        PrimitiveType::Object => "object",
        PrimitiveType::NumberLiterals => "\"number literals\"",
        PrimitiveType::StringLiterals => "\"string literals\"",
    }
}

pub fn predefined_name(p: PredefinedType) -> &'static str {
    p.name()
}

/// Type printer
#[derive(Debug, Clone, Default)]
pub struct Printer {
    config: PrinterConfig,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: PrinterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Render a type, validating it first unless the config says otherwise
    pub fn print(&self, ty: &Type) -> Result<String, PrintError> {
        if self.config.validate_before_print {
            validate(ty)?;
        }
        self.render_at(ty, &TypePath::root())
    }

    /// Render one object member as `name: T`, `name?: T` or `readonly name: T`
    pub fn print_member(&self, member: &ObjectMember) -> Result<String, PrintError> {
        self.render_member(member, &TypePath::root())
    }

    fn render_at(&self, ty: &Type, path: &TypePath) -> Result<String, PrintError> {
        match ty {
            Type::Primitive(p) => Ok(primitive_name(*p).to_string()),
            Type::Predefined(p) => Ok(predefined_name(*p).to_string()),
            Type::Reference(r) => Ok(r.name.clone()),

            Type::Array(ArrayType { readonly, element }) => {
                let inner = self.render_element(element, path)?;
                Ok(if *readonly {
                    format!("readonly {}[]", inner)
                } else {
                    format!("{}[]", inner)
                })
            }

            Type::Operator(op) => {
                let inner = self.render_element(&op.element, path)?;
                Ok(match op.kind {
                    OperatorKind::Promise => format!("Promise<{}>", inner),
                    OperatorKind::Readonly => format!("Readonly<{}>", inner),
                    OperatorKind::Optional => format!("({} | undefined)", inner),
                })
            }

            Type::WithDefault(wd) => Ok(format!(
                "WithDefault<{}, {}>",
                self.render_element(&wd.element, path)?,
                wd.default_value
            )),

            Type::Function(func) => self.render_function(func, path),

            Type::ObjectLiteral(obj) => self.render_object(obj, path),

            Type::Union(union) => {
                let elements = union
                    .elements
                    .iter()
                    .enumerate()
                    .map(|(i, e)| self.render_at(e, &path.child(PathSegment::UnionElement(i))))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(format!("({})", elements.join(" | ")))
            }

            Type::Enum(e) => render_enum(e, path),

            Type::Event(event) => {
                let inner = self.render_element(&event.element, path)?;
                Ok(match event.kind {
                    EventKind::Bubbling => format!("BubblingEventHandler<{}>", inner),
                    EventKind::Direct => format!("DirectEventHandler<{}>", inner),
                })
            }
        }
    }

    fn render_element(&self, element: &Type, path: &TypePath) -> Result<String, PrintError> {
        self.render_at(element, &path.child(PathSegment::Element))
    }

    fn render_function(&self, func: &FunctionType, path: &TypePath) -> Result<String, PrintError> {
        let args = func
            .argument_types
            .iter()
            .enumerate()
            .map(|(i, arg)| self.render_at(arg, &path.child(PathSegment::Argument(i))))
            .collect::<Result<Vec<_>, _>>()?;
        let ret = self.render_at(&func.return_type, &path.child(PathSegment::ReturnType))?;
        Ok(format!("({}) -> {}", args.join(", "), ret))
    }

    fn render_object(&self, obj: &ObjectLiteralType, path: &TypePath) -> Result<String, PrintError> {
        let members = obj
            .members
            .iter()
            .map(|m| self.render_member(m, &path.child(PathSegment::Member(m.name.clone()))))
            .collect::<Result<Vec<_>, _>>()?;
        let body = format!("{{{}}}", members.join(", "));

        if obj.mixins.is_empty() {
            return Ok(body);
        }

        let mut parts = obj
            .mixins
            .iter()
            .enumerate()
            .map(|(i, m)| self.render_at(m, &path.child(PathSegment::Mixin(i))))
            .collect::<Result<Vec<_>, _>>()?;
        parts.push(body);
        Ok(format!("({})", parts.join(" & ")))
    }

    fn render_member(&self, member: &ObjectMember, path: &TypePath) -> Result<String, PrintError> {
        let ty = self.render_at(&member.ty, path)?;
        let readonly = if member.readonly { "readonly " } else { "" };
        let optional = if member.optional { "?" } else { "" };
        Ok(format!("{}{}{}: {}", readonly, member.name, optional, ty))
    }
}

fn render_enum(e: &EnumType, path: &TypePath) -> Result<String, PrintError> {
    match e.element {
        PrimitiveType::String | PrimitiveType::Int32 => {
            Ok(format!("\"enum of {}\"", primitive_name(e.element)))
        }
        other => Err(PrintError::UnrenderableVariant {
            variant: format!("enum of {}", other.wire_name()),
            path: path.clone(),
        }),
    }
}

/// Render a type with the default printer
pub fn print_type(ty: &Type) -> Result<String, PrintError> {
    Printer::new().print(ty)
}
