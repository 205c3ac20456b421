//! Annotation descriptions and the ordered view members expose over them.

use std::fmt;

use smallvec::SmallVec;

use super::types::TypeDescription;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnnotationValue {
    Boolean(bool),
    Int(i64),
    Str(String),
    Type(TypeDescription),
}

impl fmt::Display for AnnotationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationValue::Boolean(value) => write!(f, "{value}"),
            AnnotationValue::Int(value) => write!(f, "{value}"),
            AnnotationValue::Str(value) => write!(f, "{value:?}"),
            AnnotationValue::Type(ty) => write!(f, "{}.class", ty.source_code_name()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnnotationDescription {
    annotation_type: TypeDescription,
    values: SmallVec<[(String, AnnotationValue); 2]>,
}

impl AnnotationDescription {
    pub fn new(annotation_type: TypeDescription) -> Self {
        Self {
            annotation_type,
            values: SmallVec::new(),
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, value: AnnotationValue) -> Self {
        self.values.push((name.into(), value));
        self
    }

    pub fn annotation_type(&self) -> &TypeDescription {
        &self.annotation_type
    }

    pub fn value(&self, name: &str) -> Option<&AnnotationValue> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &AnnotationValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl fmt::Display for AnnotationDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.annotation_type.source_code_name())?;
        if self.values.is_empty() {
            return Ok(());
        }
        f.write_str("(")?;
        for (index, (name, value)) in self.values.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        f.write_str(")")
    }
}

/// Borrowed, ordered view over the annotations declared on an element.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnnotationList<'a> {
    annotations: &'a [AnnotationDescription],
}

impl<'a> AnnotationList<'a> {
    /// View over annotations owned by the caller.
    pub fn explicit(annotations: &'a [AnnotationDescription]) -> Self {
        Self { annotations }
    }

    pub fn empty() -> Self {
        Self { annotations: &[] }
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'a, AnnotationDescription> {
        self.annotations.iter()
    }

    pub fn of_type(&self, annotation_type: &TypeDescription) -> Option<&'a AnnotationDescription> {
        self.annotations
            .iter()
            .find(|annotation| annotation.annotation_type() == annotation_type)
    }

    pub fn is_annotation_present(&self, annotation_type: &TypeDescription) -> bool {
        self.of_type(annotation_type).is_some()
    }

    pub fn as_slice(&self) -> &'a [AnnotationDescription] {
        self.annotations
    }

    pub fn to_vec(&self) -> Vec<AnnotationDescription> {
        self.annotations.to_vec()
    }
}

impl<'a> IntoIterator for AnnotationList<'a> {
    type Item = &'a AnnotationDescription;
    type IntoIter = std::slice::Iter<'a, AnnotationDescription>;

    fn into_iter(self) -> Self::IntoIter {
        self.annotations.iter()
    }
}
