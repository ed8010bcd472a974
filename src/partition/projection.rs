//! Per-group projection of the full relation graph.
//!
//! A relation belongs to a group's slide when both endpoints are among the
//! group's hub or spoke keys. Node membership follows the group's keys, so a
//! node may end up on a slide with no relations left ("orphan");
//! [`Projection::prune_orphans`] removes those.

use super::Group;
use crate::core::{NodeKey, Relation, RelationIndex};
use serde::Serialize;
use std::collections::HashSet;

/// Nodes and relations to render for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub interfaces: Vec<NodeKey>,
    pub types: Vec<NodeKey>,
    pub relations: Vec<Relation>,
}

/// Project `full_relations` onto `group`.
pub fn project(full_relations: &[Relation], group: &Group) -> Projection {
    let included = group.inclusion_set();
    let relations = full_relations
        .iter()
        .filter(|r| included.contains(&r.type_key) && included.contains(&r.interface_key))
        .cloned()
        .collect();

    Projection {
        interfaces: group.hub_keys.iter().cloned().collect(),
        types: group.spoke_keys.clone(),
        relations,
    }
}

impl Projection {
    /// Drop attached interfaces and spoke types with no relation on this
    /// slide. Hubs stay. Interfaces with no relation anywhere in
    /// `full_relations` also stay, so a disconnected interface still appears
    /// on its fallback slide. Returns the number of nodes removed.
    pub fn prune_orphans(&mut self, group: &Group, full_relations: &[Relation]) -> usize {
        let local = RelationIndex::build(&self.relations);
        let connected_anywhere: HashSet<&NodeKey> =
            full_relations.iter().map(|r| &r.interface_key).collect();

        let before = self.interfaces.len() + self.types.len();
        self.interfaces.retain(|key| {
            group.is_true_hub(key)
                || local.interface_degree(key) > 0
                || !connected_anywhere.contains(key)
        });
        self.types.retain(|key| local.type_degree(key) > 0);
        let removed = before - (self.interfaces.len() + self.types.len());

        if removed > 0 {
            log::debug!("Pruned {removed} orphan nodes from slide '{}'", group.title);
        }
        removed
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty() && self.types.is_empty()
    }
}
