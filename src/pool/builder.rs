//! Fluent builder that validates class definitions before they enter the pool.

use ahash::AHashSet;
use smallvec::SmallVec;
use tracing::debug;

use crate::desc::annotation::AnnotationDescription;
use crate::desc::modifier::Modifiers;
use crate::desc::types::description::OBJECT;
use crate::desc::types::{ClassType, GenericTypeDescription, TypeDescription};
use crate::error::{MemberError, MemberResult};
use crate::signature::{read_descriptor, read_field_signature};

use super::arena::{ClassId, ClassPool, PoolResolver};
use super::record::{ClassRecord, FieldRecord, FieldSpan, TypeVariableDecl};

/// A field as found in a compiled class: descriptor plus the optional generic signature.
#[derive(Clone, Debug)]
pub struct FieldDefinition {
    name: String,
    modifiers: Modifiers,
    descriptor: String,
    signature: Option<String>,
    annotations: Vec<AnnotationDescription>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, modifiers: Modifiers, descriptor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers,
            descriptor: descriptor.into(),
            signature: None,
            annotations: Vec::new(),
        }
    }

    pub fn signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn annotation(mut self, annotation: AnnotationDescription) -> Self {
        self.annotations.push(annotation);
        self
    }
}

pub struct ClassBuilder<'pool> {
    pool: &'pool mut ClassPool,
    name: String,
    modifiers: Modifiers,
    super_class: Option<ClassId>,
    interfaces: SmallVec<[ClassId; 2]>,
    type_variables: SmallVec<[TypeVariableDecl; 2]>,
    fields: Vec<FieldDefinition>,
}

impl<'pool> ClassBuilder<'pool> {
    pub(crate) fn new(pool: &'pool mut ClassPool, name: String) -> Self {
        Self {
            pool,
            name,
            modifiers: Modifiers::empty(),
            super_class: None,
            interfaces: SmallVec::new(),
            type_variables: SmallVec::new(),
            fields: Vec::new(),
        }
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn super_class(mut self, id: ClassId) -> Self {
        self.super_class = Some(id);
        self
    }

    pub fn interface(mut self, id: ClassId) -> Self {
        self.interfaces.push(id);
        self
    }

    /// Declares a type variable; `bound` is the erasure of its first bound.
    pub fn type_variable(mut self, symbol: impl Into<String>, bound: TypeDescription) -> Self {
        self.type_variables.push((symbol.into(), bound));
        self
    }

    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    /// Validates every field and commits the class. Nothing is stored on failure.
    pub fn finish(self) -> MemberResult<ClassId> {
        if self.pool.lookup(&self.name).is_some() {
            return Err(MemberError::DuplicateClass(self.name));
        }
        let description = self.describe();
        let validated = {
            let resolver = PoolResolver::new(self.pool, &self.type_variables);
            self.validate_fields(&resolver)?
        };

        let Self {
            pool,
            name,
            type_variables,
            fields,
            ..
        } = self;
        let records = fields
            .into_iter()
            .zip(validated)
            .map(|(field, erasure)| FieldRecord {
                owner: ClassId::from_index(0),
                name: pool.intern_string(&field.name),
                modifiers: field.modifiers,
                erasure,
                signature: field.signature.map(|signature| pool.intern_string(signature)),
                annotations: field.annotations,
            })
            .collect::<Vec<_>>();
        debug!(class = %name, fields = records.len(), "class defined");
        let record = ClassRecord {
            description,
            fields: FieldSpan::empty(),
            type_variables,
        };
        Ok(pool.commit(name, record, records))
    }

    fn describe(&self) -> TypeDescription {
        let mut class = ClassType::new(self.name.as_str(), self.modifiers);
        match self.super_class {
            Some(id) => class = class.extends(self.pool.describe(id)),
            None if self.name != OBJECT => class = class.extends(self.pool.describe_by_name(OBJECT)),
            None => {}
        }
        for interface in &self.interfaces {
            class = class.implements(self.pool.describe(*interface));
        }
        class.into()
    }

    /// Checks names, descriptors and signatures; returns the erased type of every field.
    fn validate_fields(&self, resolver: &PoolResolver<'_>) -> MemberResult<Vec<TypeDescription>> {
        let mut seen = AHashSet::new();
        let mut erasures = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            if field.name.is_empty() {
                return Err(MemberError::EmptyFieldName {
                    owner: self.name.clone(),
                });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(MemberError::DuplicateField {
                    owner: self.name.clone(),
                    name: field.name.clone(),
                });
            }
            let erasure = read_descriptor(&field.descriptor, resolver).map_err(|source| {
                MemberError::InvalidDescriptor {
                    owner: self.name.clone(),
                    field: field.name.clone(),
                    source,
                }
            })?;
            if let Some(signature) = &field.signature {
                let generic = read_field_signature(signature, resolver).map_err(|source| {
                    MemberError::InvalidSignature {
                        owner: self.name.clone(),
                        field: field.name.clone(),
                        source,
                    }
                })?;
                let signature_erasure = generic.as_raw_type();
                if signature_erasure != erasure {
                    return Err(MemberError::InconsistentSignature {
                        owner: self.name.clone(),
                        field: field.name.clone(),
                        descriptor: field.descriptor.clone(),
                        erasure: signature_erasure.descriptor(),
                    });
                }
            }
            erasures.push(erasure);
        }
        Ok(erasures)
    }
}
