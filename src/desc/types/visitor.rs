//! Structural visitors over [`GenericType`] plus the rewriting visitors used during substitution.

use ahash::AHashMap;

use super::description::TypeDescription;
use super::generic::{GenericType, GenericTypeDescription, ParameterizedType, TypeArgument, TypeVariable};

/// One callback per generic shape. Rewriting visitors use `Output = GenericType`.
pub trait GenericTypeVisitor {
    type Output;

    fn on_raw_type(&mut self, raw: &TypeDescription) -> Self::Output;

    fn on_parameterized_type(&mut self, parameterized: &ParameterizedType) -> Self::Output;

    fn on_type_variable(&mut self, variable: &TypeVariable) -> Self::Output;

    fn on_generic_array(&mut self, component: &GenericType) -> Self::Output;
}

/// Rebuilds `parameterized` with owner and argument bounds passed back through `visitor`.
pub fn rebuild_parameterized<V>(visitor: &mut V, parameterized: &ParameterizedType) -> ParameterizedType
where
    V: GenericTypeVisitor<Output = GenericType> + ?Sized,
{
    let arguments: Vec<TypeArgument> = parameterized
        .arguments()
        .iter()
        .map(|argument| argument.map_bound(|bound| bound.accept(visitor)))
        .collect();
    let rebuilt = ParameterizedType::new(parameterized.raw().clone(), arguments);
    match parameterized.owner() {
        Some(owner) => rebuilt.with_owner(owner.accept(visitor)),
        None => rebuilt,
    }
}

/// Identity rewrite. Produces a structurally equal copy of the visited type.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOp;

impl GenericTypeVisitor for NoOp {
    type Output = GenericType;

    fn on_raw_type(&mut self, raw: &TypeDescription) -> GenericType {
        GenericType::Raw(raw.clone())
    }

    fn on_parameterized_type(&mut self, parameterized: &ParameterizedType) -> GenericType {
        GenericType::Parameterized(rebuild_parameterized(self, parameterized))
    }

    fn on_type_variable(&mut self, variable: &TypeVariable) -> GenericType {
        GenericType::Variable(variable.clone())
    }

    fn on_generic_array(&mut self, component: &GenericType) -> GenericType {
        GenericType::GenericArray(Box::new(component.accept(self)))
    }
}

/// Replaces type variables by symbol; unbound variables are kept as they are.
#[derive(Clone, Debug, Default)]
pub struct Substitution {
    bindings: AHashMap<String, GenericType>,
}

impl Substitution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, symbol: impl Into<String>, ty: GenericType) -> Self {
        self.bindings.insert(symbol.into(), ty);
        self
    }

    pub fn binding(&self, symbol: &str) -> Option<&GenericType> {
        self.bindings.get(symbol)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl GenericTypeVisitor for Substitution {
    type Output = GenericType;

    fn on_raw_type(&mut self, raw: &TypeDescription) -> GenericType {
        GenericType::Raw(raw.clone())
    }

    fn on_parameterized_type(&mut self, parameterized: &ParameterizedType) -> GenericType {
        GenericType::Parameterized(rebuild_parameterized(self, parameterized))
    }

    fn on_type_variable(&mut self, variable: &TypeVariable) -> GenericType {
        self.bindings
            .get(variable.symbol())
            .cloned()
            .unwrap_or_else(|| GenericType::Variable(variable.clone()))
    }

    fn on_generic_array(&mut self, component: &GenericType) -> GenericType {
        // a variable bound to a raw type turns the array raw again
        GenericType::array_of(component.accept(self))
    }
}

/// Maps every type to its erasure.
#[derive(Clone, Copy, Debug, Default)]
pub struct Erasure;

impl GenericTypeVisitor for Erasure {
    type Output = GenericType;

    fn on_raw_type(&mut self, raw: &TypeDescription) -> GenericType {
        GenericType::Raw(raw.clone())
    }

    fn on_parameterized_type(&mut self, parameterized: &ParameterizedType) -> GenericType {
        GenericType::Raw(parameterized.raw().clone())
    }

    fn on_type_variable(&mut self, variable: &TypeVariable) -> GenericType {
        GenericType::Raw(variable.erasure().clone())
    }

    fn on_generic_array(&mut self, component: &GenericType) -> GenericType {
        GenericType::Raw(TypeDescription::array_of(component.as_raw_type()))
    }
}
