//! Derived implementation relations and the adjacency index over them.

use super::identity::NodeKey;
use im::{HashMap, OrdSet};
use serde::{Deserialize, Serialize};

/// `type_key` structurally satisfies `interface_key`.
///
/// `via_pointer` is set when only the pointer (full) method set satisfies the
/// interface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Relation {
    pub type_key: NodeKey,
    pub interface_key: NodeKey,
    pub via_pointer: bool,
}

impl Relation {
    pub fn new(type_key: NodeKey, interface_key: NodeKey, via_pointer: bool) -> Self {
        Self {
            type_key,
            interface_key,
            via_pointer,
        }
    }
}

/// Two-way adjacency over a relation set.
#[derive(Debug, Clone, Default)]
pub struct RelationIndex {
    interfaces_of: HashMap<NodeKey, OrdSet<NodeKey>>,
    types_of: HashMap<NodeKey, OrdSet<NodeKey>>,
}

impl RelationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build<'a>(relations: impl IntoIterator<Item = &'a Relation>) -> Self {
        relations
            .into_iter()
            .fold(Self::new(), |mut index, relation| {
                index.add(relation);
                index
            })
    }

    pub fn add(&mut self, relation: &Relation) {
        self.interfaces_of
            .entry(relation.type_key.clone())
            .or_default()
            .insert(relation.interface_key.clone());
        self.types_of
            .entry(relation.interface_key.clone())
            .or_default()
            .insert(relation.type_key.clone());
    }

    /// Types implementing an interface, in key order.
    pub fn types_of(&self, interface_key: &NodeKey) -> Vec<NodeKey> {
        self.types_of
            .get(interface_key)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of relations in which the interface takes part.
    pub fn interface_degree(&self, interface_key: &NodeKey) -> usize {
        self.types_of.get(interface_key).map_or(0, OrdSet::len)
    }

    /// Number of relations in which the type takes part.
    pub fn type_degree(&self, type_key: &NodeKey) -> usize {
        self.interfaces_of.get(type_key).map_or(0, OrdSet::len)
    }
}
