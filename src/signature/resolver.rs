//! Name resolution hooks used while reading descriptors and signatures.

use crate::desc::modifier::Modifiers;
use crate::desc::types::{ClassType, TypeDescription};
use crate::desc::types::description::{OBJECT, STRING};

/// Maps names met during parsing to descriptions.
pub trait TypeResolver {
    /// `binary_name` uses dots, e.g. `java.util.Map$Entry`.
    fn resolve_class(&self, binary_name: &str) -> TypeDescription;

    /// Erasure of the type variable `symbol` in the current scope.
    fn resolve_variable(&self, symbol: &str) -> TypeDescription;
}

/// Resolver without any backing storage: classes become public stubs extending
/// `java.lang.Object` and every type variable erases to `java.lang.Object`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedResolver;

impl TypeResolver for DetachedResolver {
    fn resolve_class(&self, binary_name: &str) -> TypeDescription {
        match binary_name {
            OBJECT => TypeDescription::object(),
            STRING => TypeDescription::string(),
            _ => ClassType::new(binary_name, Modifiers::PUBLIC)
                .extends(TypeDescription::object())
                .into(),
        }
    }

    fn resolve_variable(&self, _symbol: &str) -> TypeDescription {
        TypeDescription::object()
    }
}
