//! Read-through field handles backed by a [`ClassPool`].

use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::warn;

use crate::desc::annotation::AnnotationList;
use crate::desc::modifier::{ModifierReviewable, Modifiers};
use crate::desc::types::{GenericType, GenericTypeDescription, GenericTypeVisitor, Sort, TypeDescription};
use crate::pool::{ClassPool, FieldId, FieldRecord};
use crate::signature::read_field_signature;

use super::latent::LatentField;
use super::{FieldDescription, FieldType};

/// A field that already exists in compiled form. The handle stores nothing but its position
/// in the pool; every query reads the current record.
#[derive(Clone, Copy)]
pub struct LoadedField<'pool> {
    pool: &'pool ClassPool,
    field: FieldId,
}

impl<'pool> LoadedField<'pool> {
    pub fn new(pool: &'pool ClassPool, field: FieldId) -> Self {
        Self { pool, field }
    }

    pub fn id(&self) -> FieldId {
        self.field
    }

    fn record(&self) -> &'pool FieldRecord {
        self.pool.field_record(self.field)
    }
}

impl ModifierReviewable for LoadedField<'_> {
    fn modifiers(&self) -> Modifiers {
        self.record().modifiers
    }
}

impl FieldDescription for LoadedField<'_> {
    fn name(&self) -> &str {
        self.pool.resolve_string(self.record().name)
    }

    fn declaring_type(&self) -> TypeDescription {
        self.pool.describe(self.record().owner)
    }

    fn field_type(&self) -> FieldType<'_> {
        FieldType::Lazy(LazyFieldType::new(self.pool, self.field))
    }

    fn declared_annotations(&self) -> AnnotationList<'_> {
        AnnotationList::explicit(&self.record().annotations)
    }
}

impl PartialEq for LoadedField<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.represents(other)
    }
}

impl Eq for LoadedField<'_> {}

impl PartialEq<LatentField> for LoadedField<'_> {
    fn eq(&self, other: &LatentField) -> bool {
        self.represents(other)
    }
}

impl Hash for LoadedField<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for LoadedField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::describe_field(self).fmt(f)
    }
}

impl fmt::Debug for LoadedField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedField")
            .field("id", &self.field)
            .field("name", &self.name())
            .field("owner", &self.declaring_type().source_code_name())
            .finish()
    }
}

/// Generic type of a loaded field, parsed from the stored signature when asked for.
///
/// Fields without a signature answer every query from the stored erasure and never parse.
/// A signature that fails to parse is logged and the erasure is used in its place.
#[derive(Clone, Copy)]
pub struct LazyFieldType<'pool> {
    pool: &'pool ClassPool,
    field: FieldId,
}

impl<'pool> LazyFieldType<'pool> {
    fn new(pool: &'pool ClassPool, field: FieldId) -> Self {
        Self { pool, field }
    }

    fn record(&self) -> &'pool FieldRecord {
        self.pool.field_record(self.field)
    }

    pub fn signature(&self) -> Option<&'pool str> {
        self.record().signature.map(|id| self.pool.resolve_string(id))
    }

    pub fn resolve(&self) -> GenericType {
        let record = self.record();
        let Some(signature) = self.signature() else {
            return GenericType::Raw(record.erasure.clone());
        };
        match read_field_signature(signature, &self.pool.resolver_for(record.owner)) {
            Ok(resolved) => resolved,
            Err(error) => {
                warn!(
                    field = self.pool.resolve_string(record.name),
                    %signature,
                    %error,
                    "malformed generic signature, using erasure"
                );
                GenericType::Raw(record.erasure.clone())
            }
        }
    }
}

impl GenericTypeDescription for LazyFieldType<'_> {
    fn sort(&self) -> Sort {
        match self.signature() {
            None => Sort::Raw,
            Some(_) => self.resolve().sort(),
        }
    }

    fn as_raw_type(&self) -> TypeDescription {
        self.record().erasure.clone()
    }

    fn source_code_name(&self) -> String {
        self.resolve().source_code_name()
    }

    fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: GenericTypeVisitor + ?Sized,
    {
        self.resolve().accept(visitor)
    }
}

impl fmt::Debug for LazyFieldType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyFieldType")
            .field("field", &self.field)
            .field("signature", &self.signature())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desc::annotation::AnnotationDescription;
    use crate::desc::types::ClassType;
    use crate::pool::FieldDefinition;

    fn pool_with_box() -> (ClassPool, crate::pool::ClassId) {
        let mut pool = ClassPool::new();
        let id = pool
            .define("com.example.Box")
            .modifiers(Modifiers::PUBLIC)
            .type_variable("T", TypeDescription::object())
            .field(FieldDefinition::new("item", Modifiers::PRIVATE, "Ljava/lang/Object;").signature("TT;"))
            .field(FieldDefinition::new("size", Modifiers::PRIVATE, "I"))
            .finish()
            .expect("define class");
        (pool, id)
    }

    #[test]
    fn raw_fields_answer_from_the_erasure() {
        let (pool, id) = pool_with_box();
        let size = pool.field(id, "size").expect("size field");
        assert_eq!(size.field_type().sort(), Sort::Raw);
        assert_eq!(size.descriptor(), "I");
        assert!(size.generic_signature().is_none(), "Raw fields carry no signature");
    }

    #[test]
    fn signatures_resolve_against_the_declaring_scope() {
        let (pool, id) = pool_with_box();
        let item = pool.field(id, "item").expect("item field");
        assert_eq!(item.field_type().sort(), Sort::Variable);
        assert_eq!(item.generic_signature().as_deref(), Some("TT;"));
        assert_eq!(item.descriptor(), "Ljava/lang/Object;");
        assert_eq!(item.declaring_type(), pool.describe(id));
    }

    #[test]
    fn handles_observe_later_annotations() {
        let (mut pool, id) = pool_with_box();
        let field = pool.field(id, "item").expect("item field").id();
        let marker: TypeDescription = ClassType::new("com.example.Marker", Modifiers::PUBLIC | Modifiers::ANNOTATION).into();
        pool.annotate_field(field, AnnotationDescription::new(marker.clone()));
        let item = pool.loaded(field);
        assert!(item.declared_annotations().is_annotation_present(&marker));
        assert_eq!(item.to_token().annotations().len(), 1, "Tokens copy the current annotations");
    }
}
