//! Field descriptions: one contract, two sources of truth.
//!
//! [`FieldDescription`] is implemented by [`LoadedField`], a read-through view over a field
//! stored in a [`ClassPool`](crate::pool::ClassPool), and by [`LatentField`], a detached
//! description that owns its attributes. Everything else (descriptor, generic signature,
//! visibility, equality, display, tokenization) is derived once, in the provided methods.
//!
//! Equality is deliberately narrow: two descriptions are the same field when they share a
//! name and a declaring type. Modifiers, type and annotations do not participate, so a
//! loaded field and a latent copy of it compare equal even after the copy was rewritten.

pub mod fmt;
pub mod latent;
pub mod list;
pub mod loaded;
pub mod token;

use std::borrow::Cow;
use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::desc::annotation::AnnotationList;
use crate::desc::hash::string_hash_code;
use crate::desc::modifier::ModifierReviewable;
use crate::desc::types::{GenericType, GenericTypeDescription, GenericTypeVisitor, NoOp, Sort, TypeDescription};
use crate::signature::generic_signature_of;

pub use self::fmt::{describe_field, describe_generic_field, FieldFormatter};
pub use latent::LatentField;
pub use list::{FieldList, FieldTokenList};
pub use loaded::{LazyFieldType, LoadedField};
pub use token::FieldToken;

/// The member contract. Implementors supply the primitive attributes; the remaining methods
/// must not be overridden, so both variants derive identical results.
pub trait FieldDescription: ModifierReviewable {
    fn name(&self) -> &str;

    fn declaring_type(&self) -> TypeDescription;

    fn field_type(&self) -> FieldType<'_>;

    fn declared_annotations(&self) -> AnnotationList<'_>;

    fn internal_name(&self) -> &str {
        self.name()
    }

    fn source_code_name(&self) -> &str {
        self.name()
    }

    /// Descriptor of the erased field type. Recomputed on every call.
    fn descriptor(&self) -> String {
        self.field_type().as_raw_type().descriptor()
    }

    /// `None` when the field type is raw, since the descriptor already says everything.
    fn generic_signature(&self) -> Option<String> {
        generic_signature_of(&self.field_type())
    }

    /// Access check from `requester`. The order of the clauses matters: a protected field
    /// seen from an unrelated class in another package must fall through to the package
    /// check and fail there.
    fn is_visible_to(&self, requester: &TypeDescription) -> bool {
        let declaring = self.declaring_type();
        declaring.is_visible_to(requester)
            && (self.is_public()
                || *requester == declaring
                || (self.is_protected() && declaring.is_assignable_from(requester))
                || (!self.is_private() && requester.is_same_package(&declaring)))
    }

    fn to_token(&self) -> FieldToken {
        self.accept(&mut NoOp)
    }

    /// Snapshots this field with its type passed through `visitor`. The description itself is
    /// left untouched.
    fn accept(&self, visitor: &mut dyn GenericTypeVisitor<Output = GenericType>) -> FieldToken {
        trace!(field = self.name(), "tokenizing field");
        FieldToken::new(self.name(), self.field_type().accept(visitor), self.modifiers())
            .with_annotations(self.declared_annotations().to_vec())
    }

    /// Same name on the same declaring type.
    fn represents(&self, other: &dyn FieldDescription) -> bool {
        self.name() == other.name() && self.declaring_type() == other.declaring_type()
    }

    fn hash_code(&self) -> i32 {
        self.declaring_type()
            .hash_code()
            .wrapping_add(31i32.wrapping_mul(string_hash_code(self.name())))
    }

    /// `[modifiers ]type owner.name` using the generic type's display name.
    fn to_generic_string(&self) -> String {
        describe_generic_field(self).to_string()
    }

    /// `[modifiers ]type owner.name` using the erased type's display name.
    fn to_erased_string(&self) -> String {
        describe_field(self).to_string()
    }
}

impl PartialEq for dyn FieldDescription + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.represents(other)
    }
}

impl Eq for dyn FieldDescription + '_ {}

impl Hash for dyn FieldDescription + '_ {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

/// The generic type of a field, either owned by the description or projected lazily from
/// a stored signature.
#[derive(Clone, Copy, Debug)]
pub enum FieldType<'a> {
    Explicit(&'a GenericType),
    Lazy(LazyFieldType<'a>),
}

impl<'a> FieldType<'a> {
    /// The full generic type. Lazy projections parse their signature on every call.
    pub fn resolve(&self) -> Cow<'a, GenericType> {
        match self {
            FieldType::Explicit(ty) => Cow::Borrowed(*ty),
            FieldType::Lazy(lazy) => Cow::Owned(lazy.resolve()),
        }
    }
}

impl GenericTypeDescription for FieldType<'_> {
    fn sort(&self) -> Sort {
        match self {
            FieldType::Explicit(ty) => ty.sort(),
            FieldType::Lazy(lazy) => lazy.sort(),
        }
    }

    fn as_raw_type(&self) -> TypeDescription {
        match self {
            FieldType::Explicit(ty) => ty.as_raw_type(),
            FieldType::Lazy(lazy) => lazy.as_raw_type(),
        }
    }

    fn source_code_name(&self) -> String {
        match self {
            FieldType::Explicit(ty) => ty.source_code_name(),
            FieldType::Lazy(lazy) => lazy.source_code_name(),
        }
    }

    fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: GenericTypeVisitor + ?Sized,
    {
        match self {
            FieldType::Explicit(ty) => ty.accept(visitor),
            FieldType::Lazy(lazy) => lazy.accept(visitor),
        }
    }
}
