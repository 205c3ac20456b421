//! Stores already-compiled class definitions and hands out read-through field handles.

use std::fmt;
use std::num::NonZeroU32;

use ahash::AHashMap;

use crate::desc::annotation::AnnotationDescription;
use crate::desc::field::{FieldList, LoadedField};
use crate::desc::types::TypeDescription;
use crate::signature::{DetachedResolver, TypeResolver};

use super::builder::ClassBuilder;
use super::record::{ClassRecord, FieldRecord, FieldSpan, TypeVariableDecl};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClassId(NonZeroU32);

impl ClassId {
    pub(crate) fn from_index(index: usize) -> Self {
        let raw = NonZeroU32::new((index as u32) + 1).expect("class index overflow");
        Self(raw)
    }

    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldId(NonZeroU32);

impl FieldId {
    pub(crate) fn from_index(index: usize) -> Self {
        let raw = NonZeroU32::new((index as u32) + 1).expect("field index overflow");
        Self(raw)
    }

    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StringId(NonZeroU32);

impl StringId {
    fn from_index(index: usize) -> Self {
        let raw = NonZeroU32::new((index as u32) + 1).expect("string index overflow");
        Self(raw)
    }

    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

#[derive(Default, Debug)]
struct StringPool {
    values: Vec<String>,
    lookup: AHashMap<String, StringId>,
}

impl StringPool {
    fn intern<S: AsRef<str>>(&mut self, value: S) -> StringId {
        let value_ref = value.as_ref();
        if let Some(id) = self.lookup.get(value_ref) {
            return *id;
        }
        let owned = value_ref.to_owned();
        let id = StringId::from_index(self.values.len());
        self.values.push(owned.clone());
        self.lookup.insert(owned, id);
        id
    }

    fn resolve(&self, id: StringId) -> &str {
        &self.values[id.index()]
    }
}

/// Dense store of defined classes and their fields.
///
/// Ids index the tables directly and are only meaningful for the pool that issued them.
/// Passing a `ClassId` or `FieldId` from another pool either panics or reads the wrong
/// record.
#[derive(Default)]
pub struct ClassPool {
    classes: Vec<ClassRecord>,
    fields: Vec<FieldRecord>,
    by_name: AHashMap<String, ClassId>,
    strings: StringPool,
}

impl ClassPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Starts defining a class with the given binary name.
    pub fn define(&mut self, name: impl Into<String>) -> ClassBuilder<'_> {
        ClassBuilder::new(self, name.into())
    }

    pub fn lookup(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    /// # Panics
    ///
    /// If `id` was not issued by this pool.
    pub fn describe(&self, id: ClassId) -> TypeDescription {
        self.classes[id.index()].description.clone()
    }

    /// Description of a pooled class, or a detached stub for names the pool does not know.
    pub fn describe_by_name(&self, name: &str) -> TypeDescription {
        match self.lookup(name) {
            Some(id) => self.describe(id),
            None => DetachedResolver.resolve_class(name),
        }
    }

    pub fn loaded(&self, field: FieldId) -> LoadedField<'_> {
        LoadedField::new(self, field)
    }

    /// Fields of `id` in declaration order. Panics like [`ClassPool::describe`].
    pub fn declared_fields(&self, id: ClassId) -> FieldList<LoadedField<'_>> {
        self.classes[id.index()]
            .fields
            .indices()
            .map(|index| LoadedField::new(self, FieldId::from_index(index)))
            .collect()
    }

    /// Panics like [`ClassPool::describe`] when `id` is foreign.
    pub fn field(&self, id: ClassId, name: &str) -> Option<LoadedField<'_>> {
        self.classes[id.index()]
            .fields
            .indices()
            .find(|index| self.resolve_string(self.fields[*index].name) == name)
            .map(|index| LoadedField::new(self, FieldId::from_index(index)))
    }

    /// Resolver scoped to `id`, so type variables erase to the class's own bounds.
    pub fn resolver_for(&self, id: ClassId) -> PoolResolver<'_> {
        PoolResolver::new(self, &self.classes[id.index()].type_variables)
    }

    /// Appends an annotation to a stored field. Existing handles observe it on their next read.
    pub fn annotate_field(&mut self, field: FieldId, annotation: AnnotationDescription) {
        self.fields[field.index()].annotations.push(annotation);
    }

    pub(crate) fn field_record(&self, field: FieldId) -> &FieldRecord {
        &self.fields[field.index()]
    }

    pub(crate) fn resolve_string(&self, id: StringId) -> &str {
        self.strings.resolve(id)
    }

    pub(crate) fn intern_string<S: AsRef<str>>(&mut self, value: S) -> StringId {
        self.strings.intern(value)
    }

    pub(crate) fn commit(&mut self, name: String, mut record: ClassRecord, fields: Vec<FieldRecord>) -> ClassId {
        let id = ClassId::from_index(self.classes.len());
        let start = self.fields.len();
        let count = fields.len();
        self.fields.extend(fields.into_iter().map(|field| FieldRecord { owner: id, ..field }));
        record.fields = if count == 0 {
            FieldSpan::empty()
        } else {
            FieldSpan::new(start, count)
        };
        self.classes.push(record);
        self.by_name.insert(name, id);
        id
    }
}

impl fmt::Debug for ClassPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassPool")
            .field("classes", &self.classes.len())
            .field("fields", &self.fields.len())
            .finish()
    }
}

/// Resolves class names against a pool and type variables against one declaration scope.
#[derive(Clone, Copy)]
pub struct PoolResolver<'pool> {
    pool: &'pool ClassPool,
    variables: &'pool [TypeVariableDecl],
}

impl<'pool> PoolResolver<'pool> {
    pub fn new(pool: &'pool ClassPool, variables: &'pool [TypeVariableDecl]) -> Self {
        Self { pool, variables }
    }
}

impl TypeResolver for PoolResolver<'_> {
    fn resolve_class(&self, binary_name: &str) -> TypeDescription {
        self.pool.describe_by_name(binary_name)
    }

    fn resolve_variable(&self, symbol: &str) -> TypeDescription {
        self.variables
            .iter()
            .find(|(declared, _)| declared == symbol)
            .map(|(_, erasure)| erasure.clone())
            .unwrap_or_else(|| DetachedResolver.resolve_variable(symbol))
    }
}
