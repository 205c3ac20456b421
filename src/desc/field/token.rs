//! Detached snapshots of a field without its declaring type.

use std::hash::{Hash, Hasher};

use crate::desc::annotation::{AnnotationDescription, AnnotationList};
use crate::desc::modifier::{ModifierReviewable, Modifiers};
use crate::desc::types::{GenericType, GenericTypeDescription, GenericTypeVisitor};

/// A field reduced to name, type, modifiers and annotations. Tokens describing the same
/// name are equal regardless of the rest.
#[derive(Clone, Debug)]
pub struct FieldToken {
    name: String,
    field_type: GenericType,
    modifiers: Modifiers,
    annotations: Vec<AnnotationDescription>,
}

impl FieldToken {
    pub fn new(name: impl Into<String>, field_type: GenericType, modifiers: Modifiers) -> Self {
        Self {
            name: name.into(),
            field_type,
            modifiers,
            annotations: Vec::new(),
        }
    }

    pub fn with_annotations(mut self, annotations: Vec<AnnotationDescription>) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &GenericType {
        &self.field_type
    }

    pub fn annotations(&self) -> AnnotationList<'_> {
        AnnotationList::explicit(&self.annotations)
    }

    /// A copy whose type went through `visitor`; everything else carries over.
    pub fn accept<V>(&self, visitor: &mut V) -> FieldToken
    where
        V: GenericTypeVisitor<Output = GenericType> + ?Sized,
    {
        Self {
            name: self.name.clone(),
            field_type: self.field_type.accept(visitor),
            modifiers: self.modifiers,
            annotations: self.annotations.clone(),
        }
    }

    pub(crate) fn into_parts(self) -> (String, GenericType, Modifiers, Vec<AnnotationDescription>) {
        (self.name, self.field_type, self.modifiers, self.annotations)
    }
}

impl ModifierReviewable for FieldToken {
    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

impl PartialEq for FieldToken {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FieldToken {}

impl Hash for FieldToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
