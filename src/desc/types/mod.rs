//! Erased and generic type descriptions consumed by member descriptions.

pub mod description;
pub mod generic;
pub mod primitive;
pub mod visitor;

pub use description::{ClassType, TypeDescription, TypeKind};
pub use generic::{GenericType, GenericTypeDescription, ParameterizedType, Sort, TypeArgument, TypeVariable};
pub use primitive::Primitive;
pub use visitor::{Erasure, GenericTypeVisitor, NoOp, Substitution};
