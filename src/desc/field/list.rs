//! Ordered collections of field descriptions and field tokens.

use ahash::AHashSet;
use tracing::debug;

use crate::desc::types::{GenericType, GenericTypeVisitor, TypeDescription};
use crate::error::{MemberError, MemberResult};

use super::latent::LatentField;
use super::token::FieldToken;
use super::FieldDescription;

/// Fields in declaration order.
#[derive(Clone, Debug)]
pub struct FieldList<D> {
    fields: Vec<D>,
}

impl<D> Default for FieldList<D> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<D: FieldDescription> FieldList<D> {
    pub fn new(fields: Vec<D>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&D> {
        self.fields.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, D> {
        self.fields.iter()
    }

    pub fn named(&self, name: &str) -> Option<&D> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Fields `requester` may access, order preserved.
    pub fn visible_to(&self, requester: &TypeDescription) -> FieldList<D>
    where
        D: Clone,
    {
        self.fields
            .iter()
            .filter(|field| field.is_visible_to(requester))
            .cloned()
            .collect()
    }

    pub fn as_token_list(&self) -> FieldTokenList {
        self.fields.iter().map(|field| field.to_token()).collect()
    }

    pub fn accept(&self, visitor: &mut dyn GenericTypeVisitor<Output = GenericType>) -> FieldTokenList {
        self.fields.iter().map(|field| field.accept(&mut *visitor)).collect()
    }
}

impl<D> FromIterator<D> for FieldList<D> {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<D> IntoIterator for FieldList<D> {
    type Item = D;
    type IntoIter = std::vec::IntoIter<D>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a, D> IntoIterator for &'a FieldList<D> {
    type Item = &'a D;
    type IntoIter = std::slice::Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Tokens in declaration order, the editable form of a field list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldTokenList {
    tokens: Vec<FieldToken>,
}

impl FieldTokenList {
    pub fn new(tokens: Vec<FieldToken>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldToken> {
        self.tokens.iter()
    }

    pub fn named(&self, name: &str) -> Option<&FieldToken> {
        self.tokens.iter().find(|token| token.name() == name)
    }

    pub fn push(&mut self, token: FieldToken) {
        self.tokens.push(token);
    }

    /// Swaps in `token` for the entry with the same name. Returns the previous entry, or
    /// hands `token` back when no entry matches.
    pub fn replace(&mut self, token: FieldToken) -> Result<FieldToken, FieldToken> {
        match self.tokens.iter_mut().find(|existing| **existing == token) {
            Some(existing) => Ok(std::mem::replace(existing, token)),
            None => Err(token),
        }
    }

    pub fn accept<V>(&self, visitor: &mut V) -> FieldTokenList
    where
        V: GenericTypeVisitor<Output = GenericType> + ?Sized,
    {
        debug!(tokens = self.tokens.len(), "rewriting field tokens");
        self.tokens.iter().map(|token| token.accept(&mut *visitor)).collect()
    }

    /// Checks that every token can be declared on `owner`: names are non-empty and unique.
    pub fn validate(&self, owner: &TypeDescription) -> MemberResult<()> {
        let mut seen = AHashSet::with_capacity(self.tokens.len());
        for token in &self.tokens {
            if token.name().is_empty() {
                return Err(MemberError::EmptyFieldName {
                    owner: owner.source_code_name(),
                });
            }
            if !seen.insert(token.name()) {
                return Err(MemberError::DuplicateField {
                    owner: owner.source_code_name(),
                    name: token.name().to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Attaches every token to `owner`.
    pub fn into_latent(self, owner: &TypeDescription) -> FieldList<LatentField> {
        self.tokens
            .into_iter()
            .map(|token| LatentField::from_token(owner.clone(), token))
            .collect()
    }
}

impl FromIterator<FieldToken> for FieldTokenList {
    fn from_iter<I: IntoIterator<Item = FieldToken>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FieldTokenList {
    type Item = FieldToken;
    type IntoIter = std::vec::IntoIter<FieldToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldTokenList {
    type Item = &'a FieldToken;
    type IntoIter = std::slice::Iter<'a, FieldToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
