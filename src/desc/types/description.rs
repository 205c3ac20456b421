//! Erased (raw) type descriptions: primitives, arrays, and classes with their hierarchy.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use smallvec::SmallVec;

use crate::desc::hash::string_hash_code;
use crate::desc::modifier::{ModifierReviewable, Modifiers};

use super::primitive::Primitive;

pub const OBJECT: &str = "java.lang.Object";
pub const STRING: &str = "java.lang.String";
const CLONEABLE: &str = "java.lang.Cloneable";
const SERIALIZABLE: &str = "java.io.Serializable";

/// A class or interface together with the parts of its hierarchy that are known.
#[derive(Clone, Debug)]
pub struct ClassType {
    name: String,
    modifiers: Modifiers,
    super_class: Option<TypeDescription>,
    interfaces: SmallVec<[TypeDescription; 2]>,
}

impl ClassType {
    /// `name` is the binary name, e.g. `java.util.Map$Entry`.
    pub fn new(name: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            name: name.into(),
            modifiers,
            super_class: None,
            interfaces: SmallVec::new(),
        }
    }

    pub fn extends(mut self, super_class: TypeDescription) -> Self {
        self.super_class = Some(super_class);
        self
    }

    pub fn implements(mut self, interface: TypeDescription) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug)]
pub enum TypeKind {
    Primitive(Primitive),
    Array(TypeDescription),
    Class(ClassType),
}

/// Shared handle to an erased type. Equality and hashing go through the descriptor only, so
/// two descriptions of the same class compare equal even if one knows less of the hierarchy.
#[derive(Clone)]
pub struct TypeDescription(Arc<TypeKind>);

impl TypeDescription {
    pub fn primitive(primitive: Primitive) -> Self {
        Self(Arc::new(TypeKind::Primitive(primitive)))
    }

    pub fn array_of(component: TypeDescription) -> Self {
        Self(Arc::new(TypeKind::Array(component)))
    }

    pub fn class(class: ClassType) -> Self {
        Self(Arc::new(TypeKind::Class(class)))
    }

    pub fn object() -> Self {
        Self::class(ClassType::new(OBJECT, Modifiers::PUBLIC))
    }

    pub fn string() -> Self {
        Self::class(
            ClassType::new(STRING, Modifiers::PUBLIC | Modifiers::FINAL).extends(Self::object()),
        )
    }

    pub fn kind(&self) -> &TypeKind {
        &self.0
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self.kind(), TypeKind::Primitive(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self.kind(), TypeKind::Array(_))
    }

    pub fn component_type(&self) -> Option<&TypeDescription> {
        match self.kind() {
            TypeKind::Array(component) => Some(component),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassType> {
        match self.kind() {
            TypeKind::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn super_class(&self) -> Option<&TypeDescription> {
        self.as_class().and_then(|class| class.super_class.as_ref())
    }

    pub fn interfaces(&self) -> &[TypeDescription] {
        match self.as_class() {
            Some(class) => &class.interfaces,
            None => &[],
        }
    }

    pub fn descriptor(&self) -> String {
        match self.kind() {
            TypeKind::Primitive(primitive) => primitive.descriptor_char().to_string(),
            TypeKind::Array(component) => format!("[{}", component.descriptor()),
            TypeKind::Class(class) => format!("L{};", class.name.replace('.', "/")),
        }
    }

    /// Slash separated name for classes; arrays and primitives use their descriptor.
    pub fn internal_name(&self) -> String {
        match self.kind() {
            TypeKind::Class(class) => class.name.replace('.', "/"),
            _ => self.descriptor(),
        }
    }

    pub fn source_code_name(&self) -> String {
        match self.kind() {
            TypeKind::Primitive(primitive) => primitive.keyword().to_owned(),
            TypeKind::Array(component) => format!("{}[]", component.source_code_name()),
            TypeKind::Class(class) => class.name.clone(),
        }
    }

    pub fn simple_name(&self) -> String {
        match self.kind() {
            TypeKind::Primitive(primitive) => primitive.keyword().to_owned(),
            TypeKind::Array(component) => format!("{}[]", component.simple_name()),
            TypeKind::Class(class) => {
                let name = class.name.as_str();
                let start = name.rfind(['.', '$']).map_or(0, |index| index + 1);
                name[start..].to_owned()
            }
        }
    }

    /// Package of a class (`""` for the default package); arrays and primitives have none.
    pub fn package_name(&self) -> Option<&str> {
        let class = self.as_class()?;
        Some(class.name.rsplit_once('.').map_or("", |(package, _)| package))
    }

    pub fn is_same_package(&self, other: &TypeDescription) -> bool {
        self.package_name() == other.package_name()
    }

    pub fn is_visible_to(&self, requester: &TypeDescription) -> bool {
        match self.kind() {
            TypeKind::Primitive(_) => true,
            TypeKind::Array(component) => component.is_visible_to(requester),
            TypeKind::Class(_) => {
                self.is_public() || self.is_protected() || self.is_same_package(requester)
            }
        }
    }

    /// Whether a value of `other` can be assigned to a variable of this type.
    pub fn is_assignable_from(&self, other: &TypeDescription) -> bool {
        if self == other {
            return true;
        }
        match (self.kind(), other.kind()) {
            (TypeKind::Primitive(_), _) | (_, TypeKind::Primitive(_)) => false,
            (TypeKind::Array(target), TypeKind::Array(source)) => {
                !target.is_primitive() && !source.is_primitive() && target.is_assignable_from(source)
            }
            (TypeKind::Array(_), TypeKind::Class(_)) => false,
            (TypeKind::Class(class), TypeKind::Array(_)) => {
                matches!(class.name.as_str(), OBJECT | CLONEABLE | SERIALIZABLE)
            }
            (TypeKind::Class(class), TypeKind::Class(_)) => {
                class.name == OBJECT || other.has_supertype(self)
            }
        }
    }

    pub fn is_assignable_to(&self, other: &TypeDescription) -> bool {
        other.is_assignable_from(self)
    }

    fn has_supertype(&self, target: &TypeDescription) -> bool {
        self.super_class()
            .into_iter()
            .chain(self.interfaces())
            .any(|parent| parent == target || parent.has_supertype(target))
    }

    pub fn hash_code(&self) -> i32 {
        string_hash_code(&self.internal_name())
    }
}

impl From<ClassType> for TypeDescription {
    fn from(class: ClassType) -> Self {
        Self::class(class)
    }
}

impl From<Primitive> for TypeDescription {
    fn from(primitive: Primitive) -> Self {
        Self::primitive(primitive)
    }
}

impl ModifierReviewable for TypeDescription {
    fn modifiers(&self) -> Modifiers {
        match self.kind() {
            TypeKind::Primitive(_) => Modifiers::PUBLIC | Modifiers::FINAL | Modifiers::ABSTRACT,
            TypeKind::Array(component) => {
                let access = Modifiers::PUBLIC | Modifiers::PROTECTED | Modifiers::PRIVATE;
                (component.modifiers() & access) | Modifiers::FINAL | Modifiers::ABSTRACT
            }
            TypeKind::Class(class) => class.modifiers,
        }
    }
}

impl PartialEq for TypeDescription {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        match (self.kind(), other.kind()) {
            (TypeKind::Primitive(left), TypeKind::Primitive(right)) => left == right,
            (TypeKind::Array(left), TypeKind::Array(right)) => left == right,
            (TypeKind::Class(left), TypeKind::Class(right)) => left.name == right.name,
            _ => false,
        }
    }
}

impl Eq for TypeDescription {}

impl Hash for TypeDescription {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Debug for TypeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeDescription")
            .field(&self.source_code_name())
            .finish()
    }
}

impl fmt::Display for TypeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source_code_name())
    }
}
