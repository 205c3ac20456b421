//! Records stored inside the class pool.

use smallvec::SmallVec;

use crate::desc::annotation::AnnotationDescription;
use crate::desc::modifier::Modifiers;
use crate::desc::types::TypeDescription;

use super::arena::{ClassId, StringId};

/// Contiguous slice of field records inside the pool's flat field table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpan {
    start: u32,
    len: u32,
}

impl FieldSpan {
    pub fn empty() -> Self {
        Self { start: 0, len: 0 }
    }

    pub fn new(start: usize, len: usize) -> Self {
        Self {
            start: start as u32,
            len: len as u32,
        }
    }

    pub fn start(&self) -> usize {
        self.start as usize
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start()..self.start() + self.len()
    }
}

/// Declared type variable with the erasure of its first bound.
pub type TypeVariableDecl = (String, TypeDescription);

#[derive(Clone, Debug)]
pub struct ClassRecord {
    pub description: TypeDescription,
    pub fields: FieldSpan,
    pub type_variables: SmallVec<[TypeVariableDecl; 2]>,
}

/// A field as it was materialized: the erased type is resolved, the generic signature is
/// kept as text until someone asks for it.
#[derive(Clone, Debug)]
pub struct FieldRecord {
    pub owner: ClassId,
    pub name: StringId,
    pub modifiers: Modifiers,
    pub erasure: TypeDescription,
    pub signature: Option<StringId>,
    pub annotations: Vec<AnnotationDescription>,
}
