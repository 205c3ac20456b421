use std::fmt;
use std::hash::{Hash, Hasher};

use crate::desc::annotation::{AnnotationDescription, AnnotationList};
use crate::desc::modifier::{ModifierReviewable, Modifiers};
use crate::desc::types::{GenericType, TypeDescription};

use super::loaded::LoadedField;
use super::token::FieldToken;
use super::{FieldDescription, FieldType};

/// A field that exists only as a description, typically one that is about to be generated.
/// Attributes are taken as given; nothing is checked.
#[derive(Clone, Debug)]
pub struct LatentField {
    declaring_type: TypeDescription,
    name: String,
    field_type: GenericType,
    modifiers: Modifiers,
    annotations: Vec<AnnotationDescription>,
}

impl LatentField {
    pub fn new(
        declaring_type: TypeDescription,
        name: impl Into<String>,
        field_type: GenericType,
        modifiers: Modifiers,
        annotations: Vec<AnnotationDescription>,
    ) -> Self {
        Self {
            declaring_type,
            name: name.into(),
            field_type,
            modifiers,
            annotations,
        }
    }

    /// Attaches a token to `declaring_type`.
    pub fn from_token(declaring_type: TypeDescription, token: FieldToken) -> Self {
        let (name, field_type, modifiers, annotations) = token.into_parts();
        Self::new(declaring_type, name, field_type, modifiers, annotations)
    }
}

impl ModifierReviewable for LatentField {
    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

impl FieldDescription for LatentField {
    fn name(&self) -> &str {
        &self.name
    }

    fn declaring_type(&self) -> TypeDescription {
        self.declaring_type.clone()
    }

    fn field_type(&self) -> FieldType<'_> {
        FieldType::Explicit(&self.field_type)
    }

    fn declared_annotations(&self) -> AnnotationList<'_> {
        AnnotationList::explicit(&self.annotations)
    }
}

impl PartialEq for LatentField {
    fn eq(&self, other: &Self) -> bool {
        self.represents(other)
    }
}

impl Eq for LatentField {}

impl PartialEq<LoadedField<'_>> for LatentField {
    fn eq(&self, other: &LoadedField<'_>) -> bool {
        self.represents(other)
    }
}

impl Hash for LatentField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for LatentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::describe_field(self).fmt(f)
    }
}
