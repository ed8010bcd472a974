//! Visibility and origin filtering over a matched relation graph.
//!
//! Nodes are kept or dropped by simple predicates, relations survive only
//! when both endpoints are kept, and any node left without a relation is
//! removed.

use crate::core::{InterfaceNode, NodeKey, Relation, TypeNode};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Predicates applied to interfaces and types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Keep only exported (capitalized) names.
    #[serde(default)]
    pub exported_only: bool,

    /// Keep only user nodes whose package path is this path or lies below it.
    #[serde(default)]
    pub package_prefix: Option<String>,

    /// Keep standard-library interfaces such as `error` or `io.Reader`.
    #[serde(default = "default_include_stdlib")]
    pub include_stdlib: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            exported_only: false,
            package_prefix: None,
            include_stdlib: default_include_stdlib(),
        }
    }
}

fn default_include_stdlib() -> bool {
    true
}

impl FilterCriteria {
    fn passes_visibility(&self, key: &NodeKey) -> bool {
        !self.exported_only || key.is_exported()
    }

    /// Prefixes match whole path segments: `example.com/app` keeps
    /// `example.com/app` and `example.com/app/store` but not
    /// `example.com/apple`.
    fn passes_prefix(&self, key: &NodeKey) -> bool {
        let Some(prefix) = self.package_prefix.as_deref() else {
            return true;
        };
        let prefix = prefix.trim_end_matches('/');
        if prefix.is_empty() {
            return true;
        }
        key.package_path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }

    pub fn keeps_type(&self, ty: &TypeNode) -> bool {
        self.passes_visibility(&ty.key) && self.passes_prefix(&ty.key)
    }

    /// Standard-library interfaces are governed by `include_stdlib` alone;
    /// the predeclared `error` is lowercase but always visible.
    pub fn keeps_interface(&self, iface: &InterfaceNode) -> bool {
        if iface.is_stdlib() {
            return self.include_stdlib;
        }
        self.passes_visibility(&iface.key) && self.passes_prefix(&iface.key)
    }
}

/// Nodes and relations that survived filtering, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilteredGraph {
    pub interfaces: Vec<InterfaceNode>,
    pub types: Vec<TypeNode>,
    pub relations: Vec<Relation>,
}

/// Apply `criteria`, then drop every node left with zero relations.
pub fn apply(
    interfaces: &[InterfaceNode],
    types: &[TypeNode],
    relations: &[Relation],
    criteria: &FilterCriteria,
) -> FilteredGraph {
    let kept_interfaces: HashSet<&NodeKey> = interfaces
        .iter()
        .filter(|iface| criteria.keeps_interface(iface))
        .map(|iface| &iface.key)
        .collect();
    let kept_types: HashSet<&NodeKey> = types
        .iter()
        .filter(|ty| criteria.keeps_type(ty))
        .map(|ty| &ty.key)
        .collect();

    let relations: Vec<Relation> = relations
        .iter()
        .filter(|r| kept_interfaces.contains(&r.interface_key) && kept_types.contains(&r.type_key))
        .cloned()
        .collect();

    let connected: HashSet<&NodeKey> = relations
        .iter()
        .flat_map(|r| [&r.type_key, &r.interface_key])
        .collect();

    let graph = FilteredGraph {
        interfaces: interfaces
            .iter()
            .filter(|iface| connected.contains(&iface.key))
            .cloned()
            .collect(),
        types: types
            .iter()
            .filter(|ty| connected.contains(&ty.key))
            .cloned()
            .collect(),
        relations,
    };

    log::debug!(
        "Filter kept {}/{} interfaces, {}/{} types, {} relations",
        graph.interfaces.len(),
        interfaces.len(),
        graph.types.len(),
        types.len(),
        graph.relations.len()
    );
    graph
}
