//! Generic type model: the shapes a declared type can take before erasure.
//!
//! Wildcards only exist as type arguments, so [`GenericType`] has no wildcard variant and a
//! field type can never be one. [`Sort::Wildcard`] is reported by [`TypeArgument::sort`].

use std::fmt;

use super::description::TypeDescription;
use super::visitor::GenericTypeVisitor;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sort {
    Raw,
    Parameterized,
    Variable,
    GenericArray,
    Wildcard,
}

impl Sort {
    pub fn is_raw(self) -> bool {
        matches!(self, Sort::Raw)
    }
}

/// Read access to a generic type, implemented by owned types and lazy projections alike.
pub trait GenericTypeDescription {
    fn sort(&self) -> Sort;

    /// The erasure of this type.
    fn as_raw_type(&self) -> TypeDescription;

    fn source_code_name(&self) -> String;

    fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: GenericTypeVisitor + ?Sized;
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GenericType {
    Raw(TypeDescription),
    Parameterized(ParameterizedType),
    Variable(TypeVariable),
    /// Array whose component is not raw; raw components fold into `Raw(array)`.
    GenericArray(Box<GenericType>),
}

impl GenericType {
    pub fn raw(ty: impl Into<TypeDescription>) -> Self {
        GenericType::Raw(ty.into())
    }

    pub fn variable(symbol: impl Into<String>, erasure: TypeDescription) -> Self {
        GenericType::Variable(TypeVariable::new(symbol, erasure))
    }

    /// Builds an array of `component`, keeping raw arrays raw.
    pub fn array_of(component: GenericType) -> Self {
        match component {
            GenericType::Raw(raw) => GenericType::Raw(TypeDescription::array_of(raw)),
            other => GenericType::GenericArray(Box::new(other)),
        }
    }
}

impl GenericTypeDescription for GenericType {
    fn sort(&self) -> Sort {
        match self {
            GenericType::Raw(_) => Sort::Raw,
            GenericType::Parameterized(_) => Sort::Parameterized,
            GenericType::Variable(_) => Sort::Variable,
            GenericType::GenericArray(_) => Sort::GenericArray,
        }
    }

    fn as_raw_type(&self) -> TypeDescription {
        match self {
            GenericType::Raw(raw) => raw.clone(),
            GenericType::Parameterized(parameterized) => parameterized.raw.clone(),
            GenericType::Variable(variable) => variable.erasure.clone(),
            GenericType::GenericArray(component) => {
                TypeDescription::array_of(component.as_raw_type())
            }
        }
    }

    fn source_code_name(&self) -> String {
        match self {
            GenericType::Raw(raw) => raw.source_code_name(),
            GenericType::Parameterized(parameterized) => parameterized.source_code_name(),
            GenericType::Variable(variable) => variable.symbol.clone(),
            GenericType::GenericArray(component) => format!("{}[]", component.source_code_name()),
        }
    }

    fn accept<V>(&self, visitor: &mut V) -> V::Output
    where
        V: GenericTypeVisitor + ?Sized,
    {
        match self {
            GenericType::Raw(raw) => visitor.on_raw_type(raw),
            GenericType::Parameterized(parameterized) => visitor.on_parameterized_type(parameterized),
            GenericType::Variable(variable) => visitor.on_type_variable(variable),
            GenericType::GenericArray(component) => visitor.on_generic_array(component),
        }
    }
}

impl fmt::Display for GenericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source_code_name())
    }
}

impl From<TypeDescription> for GenericType {
    fn from(raw: TypeDescription) -> Self {
        GenericType::Raw(raw)
    }
}

impl From<ParameterizedType> for GenericType {
    fn from(parameterized: ParameterizedType) -> Self {
        GenericType::Parameterized(parameterized)
    }
}

/// A class type with type arguments, optionally nested in a parameterized owner.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParameterizedType {
    raw: TypeDescription,
    owner: Option<Box<GenericType>>,
    arguments: Vec<TypeArgument>,
}

impl ParameterizedType {
    pub fn new(raw: TypeDescription, arguments: impl IntoIterator<Item = TypeArgument>) -> Self {
        Self {
            raw,
            owner: None,
            arguments: arguments.into_iter().collect(),
        }
    }

    pub fn with_owner(mut self, owner: GenericType) -> Self {
        self.owner = Some(Box::new(owner));
        self
    }

    pub fn raw(&self) -> &TypeDescription {
        &self.raw
    }

    pub fn owner(&self) -> Option<&GenericType> {
        self.owner.as_deref()
    }

    pub fn arguments(&self) -> &[TypeArgument] {
        &self.arguments
    }

    fn source_code_name(&self) -> String {
        let mut rendered = match self.owner() {
            Some(owner) => format!("{}.{}", owner.source_code_name(), self.raw.simple_name()),
            None => self.raw.source_code_name(),
        };
        if !self.arguments.is_empty() {
            let arguments: Vec<String> = self.arguments.iter().map(TypeArgument::source_code_name).collect();
            rendered.push('<');
            rendered.push_str(&arguments.join(", "));
            rendered.push('>');
        }
        rendered
    }
}

/// A reference to a declared type variable. `erasure` is the erasure of its first bound.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeVariable {
    symbol: String,
    erasure: TypeDescription,
}

impl TypeVariable {
    pub fn new(symbol: impl Into<String>, erasure: TypeDescription) -> Self {
        Self {
            symbol: symbol.into(),
            erasure,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn erasure(&self) -> &TypeDescription {
        &self.erasure
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeArgument {
    /// `?`
    Unbounded,
    /// `? extends T`
    Extends(GenericType),
    /// `? super T`
    Super(GenericType),
    Exact(GenericType),
}

impl TypeArgument {
    pub fn sort(&self) -> Sort {
        match self {
            TypeArgument::Exact(ty) => ty.sort(),
            _ => Sort::Wildcard,
        }
    }

    pub fn bound(&self) -> Option<&GenericType> {
        match self {
            TypeArgument::Unbounded => None,
            TypeArgument::Extends(ty) | TypeArgument::Super(ty) | TypeArgument::Exact(ty) => Some(ty),
        }
    }

    /// Rebuilds the argument with its bound passed through `rewrite`.
    pub fn map_bound(&self, mut rewrite: impl FnMut(&GenericType) -> GenericType) -> TypeArgument {
        match self {
            TypeArgument::Unbounded => TypeArgument::Unbounded,
            TypeArgument::Extends(ty) => TypeArgument::Extends(rewrite(ty)),
            TypeArgument::Super(ty) => TypeArgument::Super(rewrite(ty)),
            TypeArgument::Exact(ty) => TypeArgument::Exact(rewrite(ty)),
        }
    }

    pub fn source_code_name(&self) -> String {
        match self {
            TypeArgument::Unbounded => "?".to_owned(),
            TypeArgument::Extends(ty) => format!("? extends {}", ty.source_code_name()),
            TypeArgument::Super(ty) => format!("? super {}", ty.source_code_name()),
            TypeArgument::Exact(ty) => ty.source_code_name(),
        }
    }
}

impl From<GenericType> for TypeArgument {
    fn from(ty: GenericType) -> Self {
        TypeArgument::Exact(ty)
    }
}
