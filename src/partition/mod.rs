//! Hub-and-spoke partitioning of the implementation graph into slides.
//!
//! Types are sorted and chunked into groups of bounded size. Interfaces
//! implemented often enough ("hubs") repeat on every group; every other
//! interface is attached to the first group holding one of its implementers.

pub mod projection;

pub use projection::{project, Projection};

use crate::core::{InterfaceNode, NodeKey, Relation, RelationIndex, TypeNode};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

pub const DEFAULT_HUB_THRESHOLD: usize = 3;
pub const DEFAULT_CHUNK_SIZE: usize = 3;

/// Title of the single group produced when there are no types.
pub const INTERFACES_ONLY_TITLE: &str = "Interfaces";

/// Knobs for [`split`]. Non-positive inputs fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionParams {
    pub hub_threshold: usize,
    pub chunk_size: usize,
}

impl Default for PartitionParams {
    fn default() -> Self {
        Self {
            hub_threshold: DEFAULT_HUB_THRESHOLD,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl PartitionParams {
    pub fn new(hub_threshold: i64, chunk_size: i64) -> Self {
        Self {
            hub_threshold: positive_or(hub_threshold, DEFAULT_HUB_THRESHOLD),
            chunk_size: positive_or(chunk_size, DEFAULT_CHUNK_SIZE),
        }
    }

    /// Replace zero values with the defaults.
    pub fn normalized(self) -> Self {
        Self {
            hub_threshold: nonzero_or(self.hub_threshold, DEFAULT_HUB_THRESHOLD),
            chunk_size: nonzero_or(self.chunk_size, DEFAULT_CHUNK_SIZE),
        }
    }
}

fn nonzero_or(value: usize, default: usize) -> usize {
    if value == 0 {
        default
    } else {
        value
    }
}

fn positive_or(value: i64, default: usize) -> usize {
    usize::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

/// One slide definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub title: String,
    /// Every hub plus the non-hub interfaces attached to this group.
    pub hub_keys: BTreeSet<NodeKey>,
    /// The non-hub subset of `hub_keys`.
    pub attached_keys: BTreeSet<NodeKey>,
    /// Types unique to this group, in sorted order.
    pub spoke_keys: Vec<NodeKey>,
}

impl Group {
    /// Whether `key` is a hub that repeats on every group.
    pub fn is_true_hub(&self, key: &NodeKey) -> bool {
        self.hub_keys.contains(key) && !self.attached_keys.contains(key)
    }

    /// Hub keys ∪ spoke keys.
    pub fn inclusion_set(&self) -> HashSet<&NodeKey> {
        self.hub_keys.iter().chain(&self.spoke_keys).collect()
    }
}

/// Split the graph into groups.
///
/// Relations that reference a node missing from `interfaces` or `types` are
/// ignored.
pub fn split(
    interfaces: &[InterfaceNode],
    types: &[TypeNode],
    relations: &[Relation],
    params: PartitionParams,
) -> Vec<Group> {
    let params = params.normalized();

    if types.is_empty() {
        if interfaces.is_empty() {
            return Vec::new();
        }
        return vec![Group {
            title: INTERFACES_ONLY_TITLE.to_string(),
            hub_keys: interfaces.iter().map(|i| i.key.clone()).collect(),
            attached_keys: BTreeSet::new(),
            spoke_keys: Vec::new(),
        }];
    }

    let index = index_known_relations(interfaces, types, relations);

    let (hubs, non_hubs): (Vec<&InterfaceNode>, Vec<&InterfaceNode>) = interfaces
        .iter()
        .partition(|iface| index.interface_degree(&iface.key) >= params.hub_threshold);
    let hub_keys: BTreeSet<NodeKey> = hubs.iter().map(|i| i.key.clone()).collect();

    let mut type_keys: Vec<&NodeKey> = types.iter().map(|t| &t.key).collect();
    type_keys.sort();
    let chunks: Vec<&[&NodeKey]> = type_keys.chunks(params.chunk_size).collect();

    let mut attached: Vec<BTreeSet<NodeKey>> = vec![BTreeSet::new(); chunks.len()];
    for iface in non_hubs {
        let connected: HashSet<NodeKey> = index.types_of(&iface.key).into_iter().collect();
        let home = chunks
            .iter()
            .position(|chunk| chunk.iter().any(|key| connected.contains(*key)))
            .unwrap_or(0);
        attached[home].insert(iface.key.clone());
    }

    let groups: Vec<Group> = chunks
        .iter()
        .zip(attached)
        .map(|(chunk, attached_keys)| Group {
            title: chunk_title(chunk),
            hub_keys: hub_keys.union(&attached_keys).cloned().collect(),
            attached_keys,
            spoke_keys: chunk.iter().map(|key| (*key).clone()).collect(),
        })
        .collect();

    log::debug!(
        "Split {} types into {} groups ({} hubs, threshold {}, chunk size {})",
        types.len(),
        groups.len(),
        hub_keys.len(),
        params.hub_threshold,
        params.chunk_size
    );
    groups
}

fn index_known_relations(
    interfaces: &[InterfaceNode],
    types: &[TypeNode],
    relations: &[Relation],
) -> RelationIndex {
    let interface_keys: HashSet<&NodeKey> = interfaces.iter().map(|i| &i.key).collect();
    let type_keys: HashSet<&NodeKey> = types.iter().map(|t| &t.key).collect();

    let (known, dangling): (Vec<&Relation>, Vec<&Relation>) = relations.iter().partition(|r| {
        interface_keys.contains(&r.interface_key) && type_keys.contains(&r.type_key)
    });
    if !dangling.is_empty() {
        log::debug!(
            "Ignoring {} relations that reference unknown nodes",
            dangling.len()
        );
    }
    RelationIndex::build(known)
}

/// Spoke names joined with ", ". A name shared by more than one type in the
/// chunk is qualified with its package, e.g. `a.File, b.File`.
fn chunk_title(chunk: &[&NodeKey]) -> String {
    let mut seen = HashSet::new();
    let repeated: HashSet<&str> = chunk
        .iter()
        .map(|key| key.name.as_str())
        .filter(|name| !seen.insert(*name))
        .collect();

    chunk
        .iter()
        .map(|key| {
            let package = key.short_package();
            if repeated.contains(key.name.as_str()) && !package.is_empty() {
                format!("{}.{}", package, key.name)
            } else {
                key.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
