//! Core type algebra, container and shape validation for shapeir

pub mod error;
pub mod ir;
pub mod path;
pub mod repr;
pub mod types;
pub mod validate;

pub use error::{BatchShapeErrors, CoreError, ShapeError};
pub use ir::{File, FileBuilder};
pub use path::{PathSegment, TypePath};
pub use types::{
    ArrayType, EnumType, EventKind, EventType, FunctionType, ObjectLiteralType, ObjectMember,
    OperatorKind, OperatorType, PredefinedType, PrimitiveType, ReferenceType, Type, UnionType,
    WithDefaultType,
};
pub use validate::validate;
