//! Structural interface satisfaction.
//!
//! For every `(type, interface)` pair the matcher decides whether the type's
//! method set covers the interface's required methods. The value method set
//! is tried first; the full (pointer) method set only when the value set
//! falls short. A pair yields at most one [`Relation`].
//!
//! Interfaces with no required methods are skipped: every type would satisfy
//! them and the resulting edges drown out everything else downstream.

pub mod builtin;
pub mod identity;
pub mod method_set;

pub use builtin::{error_interface, with_builtins};
pub use identity::{ExactIdentity, TypeIdentity};
pub use method_set::{signatures_match, MethodSet, MethodSetCache, TypeMethodSets};

use crate::core::{InterfaceNode, Relation, TypeNode};
use rayon::prelude::*;

/// Options for one matcher run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Match types on the rayon pool. Output order is unaffected.
    pub parallel: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Match every type against every interface using exact type identity.
pub fn match_all(interfaces: &[InterfaceNode], types: &[TypeNode]) -> Vec<Relation> {
    match_relations(interfaces, types, &ExactIdentity, MatchOptions::default())
}

/// Match every type against every interface.
///
/// Relations come out grouped by type in input order, and by interface in
/// input order within a type.
pub fn match_relations(
    interfaces: &[InterfaceNode],
    types: &[TypeNode],
    identity: &dyn TypeIdentity,
    options: MatchOptions,
) -> Vec<Relation> {
    let candidates: Vec<&InterfaceNode> = interfaces.iter().filter(|i| !i.is_empty()).collect();
    if candidates.is_empty() || types.is_empty() {
        return Vec::new();
    }

    let cache = MethodSetCache::build(types);
    let match_type = |ty: &TypeNode| -> Vec<Relation> {
        match cache.get(&ty.key) {
            Some(sets) => match_one(ty, sets, &candidates, identity),
            None => Vec::new(),
        }
    };

    let relations: Vec<Relation> = if options.parallel {
        types.par_iter().flat_map_iter(match_type).collect()
    } else {
        types.iter().flat_map(match_type).collect()
    };

    log::debug!(
        "Matched {} types against {} interfaces: {} relations",
        types.len(),
        candidates.len(),
        relations.len()
    );
    relations
}

fn match_one(
    ty: &TypeNode,
    sets: &TypeMethodSets<'_>,
    interfaces: &[&InterfaceNode],
    identity: &dyn TypeIdentity,
) -> Vec<Relation> {
    interfaces
        .iter()
        .filter_map(|iface| {
            if sets.value.satisfies(&iface.methods, identity) {
                Some(Relation::new(ty.key.clone(), iface.key.clone(), false))
            } else if sets.full.satisfies(&iface.methods, identity) {
                Some(Relation::new(ty.key.clone(), iface.key.clone(), true))
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MethodSignature, NodeKey, TypeRef};

    fn sig(name: &str, params: &[&str], results: &[&str]) -> MethodSignature {
        MethodSignature::new(name, params.iter().copied(), results.iter().copied())
    }

    fn reader() -> InterfaceNode {
        InterfaceNode::new("io", "Reader", vec![sig("Read", &["[]byte"], &["int", "error"])])
    }

    fn closer() -> InterfaceNode {
        InterfaceNode::new("io", "Closer", vec![sig("Close", &[], &["error"])])
    }

    fn sequential() -> MatchOptions {
        MatchOptions { parallel: false }
    }

    #[test]
    fn test_value_receiver_match() {
        let ty = TypeNode::new(
            "app",
            "Buffer",
            vec![sig("Read", &["[]byte"], &["int", "error"])],
            vec![],
        );
        let relations = match_all(&[reader()], &[ty]);
        assert_eq!(
            relations,
            vec![Relation::new(
                NodeKey::new("app", "Buffer"),
                NodeKey::new("io", "Reader"),
                false
            )]
        );
    }

    #[test]
    fn test_pointer_only_match() {
        let ty = TypeNode::new(
            "app",
            "File",
            vec![],
            vec![sig("Close", &[], &["error"])],
        );
        let relations = match_all(&[closer()], &[ty]);
        assert_eq!(relations.len(), 1);
        assert!(relations[0].via_pointer);
    }

    #[test]
    fn test_value_match_wins_over_pointer() {
        let ty = TypeNode::new(
            "app",
            "File",
            vec![sig("Close", &[], &["error"])],
            vec![sig("Read", &["[]byte"], &["int", "error"])],
        );
        let relations = match_all(&[closer(), reader()], &[ty]);
        assert_eq!(relations.len(), 2);
        assert!(!relations[0].via_pointer);
        assert!(relations[1].via_pointer);
    }

    #[test]
    fn test_empty_interface_is_skipped() {
        let any = InterfaceNode::new("app", "Any", vec![]);
        let ty = TypeNode::new("app", "File", vec![sig("Close", &[], &["error"])], vec![]);
        assert!(match_all(&[any], &[ty]).is_empty());
    }

    #[test]
    fn test_signature_mismatch_yields_nothing() {
        let ty = TypeNode::new(
            "app",
            "Buffer",
            vec![sig("Read", &["string"], &["int", "error"])],
            vec![],
        );
        assert!(match_all(&[reader()], &[ty]).is_empty());
    }

    #[test]
    fn test_partial_method_set_yields_nothing() {
        let read_closer = InterfaceNode::new(
            "io",
            "ReadCloser",
            vec![
                sig("Read", &["[]byte"], &["int", "error"]),
                sig("Close", &[], &["error"]),
            ],
        );
        let ty = TypeNode::new(
            "app",
            "Buffer",
            vec![sig("Read", &["[]byte"], &["int", "error"])],
            vec![],
        );
        assert!(match_all(&[read_closer], &[ty]).is_empty());
    }

    #[test]
    fn test_builtin_error_interface_matches() {
        let ty = TypeNode::new("app", "NotFound", vec![sig("Error", &[], &["string"])], vec![]);
        let relations = match_all(&with_builtins(&[]), &[ty]);
        assert_eq!(relations.len(), 1);
        assert_eq!(relations[0].interface_key, error_interface().key);
    }

    #[test]
    fn test_degenerate_inputs() {
        let ty = TypeNode::new("app", "File", vec![], vec![]);
        assert!(match_all(&[], &[ty]).is_empty());
        assert!(match_all(&[reader()], &[]).is_empty());
    }

    #[test]
    fn test_custom_identity_is_consulted() {
        let ty = TypeNode::new(
            "app",
            "Buffer",
            vec![sig("Read", &["[]uint8"], &["int", "error"])],
            vec![],
        );
        let byte_alias = |a: &TypeRef, b: &TypeRef| {
            let canon = |t: &TypeRef| t.as_str().replace("uint8", "byte");
            canon(a) == canon(b)
        };
        assert!(match_all(&[reader()], std::slice::from_ref(&ty)).is_empty());
        let relations = match_relations(&[reader()], &[ty], &byte_alias, sequential());
        assert_eq!(relations.len(), 1);
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let types: Vec<TypeNode> = (0..50)
            .map(|i| {
                let value = if i % 2 == 0 {
                    vec![sig("Read", &["[]byte"], &["int", "error"])]
                } else {
                    vec![]
                };
                let pointer = if i % 3 == 0 {
                    vec![sig("Close", &[], &["error"])]
                } else {
                    vec![]
                };
                TypeNode::new("app", format!("T{i:02}"), value, pointer)
            })
            .collect();
        let interfaces = vec![reader(), closer()];

        let par = match_relations(&interfaces, &types, &ExactIdentity, MatchOptions::default());
        let seq = match_relations(&interfaces, &types, &ExactIdentity, sequential());
        assert_eq!(par, seq);
    }
}
