//! Storage for already-compiled class definitions, the source of loaded field handles.

pub mod arena;
pub mod builder;
pub mod record;

pub use arena::{ClassId, ClassPool, FieldId, PoolResolver, StringId};
pub use builder::{ClassBuilder, FieldDefinition};
pub use record::{ClassRecord, FieldRecord, FieldSpan, TypeVariableDecl};
