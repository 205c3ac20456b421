//! Field metadata for JVM classes.
//!
//! Fields come from two places: classes that already exist in compiled form, stored in a
//! [`ClassPool`], and fields that are only described, for instance because they are about
//! to be generated. Both implement [`FieldDescription`] and answer every derived query the
//! same way. [`FieldToken`]s carry a field across generic type substitution.

pub mod desc;
pub mod error;
pub mod pool;
pub mod signature;

pub use desc::field::{FieldDescription, FieldList, FieldToken, FieldTokenList, FieldType, LatentField, LoadedField};
pub use desc::modifier::{ModifierReviewable, Modifiers};
pub use desc::types::{GenericType, GenericTypeDescription, GenericTypeVisitor, TypeDescription};
pub use error::{MemberError, MemberResult};
pub use pool::{ClassBuilder, ClassId, ClassPool, FieldDefinition, FieldId};
