//! Name-indexed method sets and the per-invocation cache that holds them.

use super::identity::TypeIdentity;
use crate::core::{MethodSignature, NodeKey, TypeNode};
use std::collections::HashMap;

/// Method signatures indexed by method name.
#[derive(Debug, Default)]
pub struct MethodSet<'a> {
    by_name: HashMap<&'a str, &'a MethodSignature>,
}

impl<'a> MethodSet<'a> {
    pub fn new(methods: &'a [MethodSignature]) -> Self {
        Self {
            by_name: methods.iter().map(|m| (m.name.as_str(), m)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Every required method is present by name with a matching signature.
    pub fn satisfies(&self, required: &[MethodSignature], identity: &dyn TypeIdentity) -> bool {
        required.iter().all(|want| {
            self.by_name
                .get(want.name.as_str())
                .is_some_and(|have| signatures_match(have, want, identity))
        })
    }
}

/// Structural equality of two signatures under a type identity predicate.
pub fn signatures_match(
    a: &MethodSignature,
    b: &MethodSignature,
    identity: &dyn TypeIdentity,
) -> bool {
    a.name == b.name
        && a.variadic == b.variadic
        && a.params.len() == b.params.len()
        && a.results.len() == b.results.len()
        && a.params
            .iter()
            .zip(&b.params)
            .all(|(x, y)| identity.same_type(x, y))
        && a.results
            .iter()
            .zip(&b.results)
            .all(|(x, y)| identity.same_type(x, y))
}

/// Both method-set views of one type.
#[derive(Debug)]
pub struct TypeMethodSets<'a> {
    pub value: MethodSet<'a>,
    pub full: MethodSet<'a>,
}

impl<'a> TypeMethodSets<'a> {
    pub fn of(ty: &'a TypeNode) -> Self {
        Self {
            value: MethodSet::new(ty.value_methods()),
            full: MethodSet::new(ty.full_methods()),
        }
    }
}

/// Memoized method sets for one matcher invocation.
#[derive(Debug, Default)]
pub struct MethodSetCache<'a> {
    sets: HashMap<&'a NodeKey, TypeMethodSets<'a>>,
}

impl<'a> MethodSetCache<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(types: &'a [TypeNode]) -> Self {
        let mut cache = Self::new();
        for ty in types {
            cache.get_or_insert(ty);
        }
        cache
    }

    /// Method sets for `ty`, computed on first request.
    pub fn get_or_insert(&mut self, ty: &'a TypeNode) -> &TypeMethodSets<'a> {
        self.sets
            .entry(&ty.key)
            .or_insert_with(|| TypeMethodSets::of(ty))
    }

    pub fn get(&self, key: &NodeKey) -> Option<&TypeMethodSets<'a>> {
        self.sets.get(key)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
