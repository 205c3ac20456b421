//! Descriptions of types, annotations and fields.

pub mod annotation;
pub mod field;
pub mod hash;
pub mod modifier;
pub mod types;

pub use annotation::{AnnotationDescription, AnnotationList, AnnotationValue};
pub use field::{FieldDescription, FieldList, FieldToken, FieldTokenList, FieldType, LatentField, LoadedField};
pub use modifier::{ModifierReviewable, Modifiers};
