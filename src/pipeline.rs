//! End-to-end analysis: match, filter, split, project.

use crate::core::{display_id, InterfaceNode, NodeKey, Relation, SymbolModel, TypeNode};
use crate::filter::{self, FilterCriteria};
use crate::matcher::{self, ExactIdentity, MatchOptions, TypeIdentity};
use crate::partition::{self, Group, PartitionParams, Projection};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Everything that controls one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    pub matcher: MatchOptions,
    pub filter: FilterCriteria,
    pub partition: PartitionParams,
    pub prune_orphans: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            matcher: MatchOptions::default(),
            filter: FilterCriteria::default(),
            partition: PartitionParams::default(),
            prune_orphans: true,
        }
    }
}

/// One rendered slide: the group definition and its projected sub-graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    pub index: usize,
    pub group: Group,
    pub projection: Projection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisStats {
    pub interfaces: usize,
    pub types: usize,
    pub relations: usize,
    pub pointer_relations: usize,
    pub hubs: usize,
    pub slides: usize,
    pub pruned_nodes: usize,
    /// Relations whose endpoints never share a slide.
    pub unplaced_relations: usize,
}

/// A node as listed in the report, with its renderer identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSummary {
    pub key: NodeKey,
    pub display_id: String,
    pub method_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub stats: AnalysisStats,
    pub interfaces: Vec<NodeSummary>,
    pub types: Vec<NodeSummary>,
    pub relations: Vec<Relation>,
    pub slides: Vec<Slide>,
}

impl AnalysisReport {
    /// Renderer identifier for any node listed in the report.
    pub fn display_id_of(&self, key: &NodeKey) -> Option<&str> {
        self.interfaces
            .iter()
            .chain(&self.types)
            .find(|node| &node.key == key)
            .map(|node| node.display_id.as_str())
    }

    /// Keys of interfaces that repeat on every slide.
    pub fn hub_keys(&self) -> Vec<&NodeKey> {
        self.slides
            .first()
            .map(|slide| {
                slide
                    .group
                    .hub_keys
                    .iter()
                    .filter(|key| slide.group.is_true_hub(key))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Run the full analysis with exact type identity.
pub fn analyze(model: &SymbolModel, options: &AnalysisOptions) -> AnalysisReport {
    analyze_with_identity(model, options, &ExactIdentity)
}

/// Run the full analysis with a caller-supplied type identity predicate.
pub fn analyze_with_identity(
    model: &SymbolModel,
    options: &AnalysisOptions,
    identity: &dyn TypeIdentity,
) -> AnalysisReport {
    if model.is_empty() {
        log::warn!("Symbol model has no interfaces or types");
    }
    let interfaces = matcher::with_builtins(model.interfaces());
    log::info!(
        "Analyzing {} interfaces and {} types",
        interfaces.len(),
        model.types().len()
    );

    let relations =
        matcher::match_relations(&interfaces, model.types(), identity, options.matcher);
    let graph = filter::apply(&interfaces, model.types(), &relations, &options.filter);
    let groups = partition::split(
        &graph.interfaces,
        &graph.types,
        &graph.relations,
        options.partition,
    );

    let hubs = groups
        .first()
        .map_or(0, |g| g.hub_keys.len() - g.attached_keys.len());

    let mut pruned_nodes = 0;
    let projected: Vec<(Group, Projection)> = groups
        .into_iter()
        .map(|group| {
            let mut projection = partition::project(&graph.relations, &group);
            if options.prune_orphans {
                pruned_nodes += projection.prune_orphans(&group, &graph.relations);
            }
            (group, projection)
        })
        .collect();

    let (kept, empty): (Vec<_>, Vec<_>) = projected
        .into_iter()
        .partition(|(_, projection)| !projection.is_empty());
    if !empty.is_empty() {
        log::debug!("Skipped {} slides left empty after pruning", empty.len());
    }
    let slides: Vec<Slide> = kept
        .into_iter()
        .enumerate()
        .map(|(index, (group, projection))| Slide {
            index,
            group,
            projection,
        })
        .collect();

    let unplaced_relations = count_unplaced(&graph.relations, &slides);
    if unplaced_relations > 0 {
        log::warn!("{unplaced_relations} relations do not appear on any slide");
    }

    let stats = AnalysisStats {
        interfaces: graph.interfaces.len(),
        types: graph.types.len(),
        relations: graph.relations.len(),
        pointer_relations: graph.relations.iter().filter(|r| r.via_pointer).count(),
        hubs,
        slides: slides.len(),
        pruned_nodes,
        unplaced_relations,
    };
    log::info!(
        "Found {} relations ({} via pointer), {} hubs, {} slides",
        stats.relations,
        stats.pointer_relations,
        stats.hubs,
        stats.slides
    );

    AnalysisReport {
        generated_at: Utc::now(),
        stats,
        interfaces: graph.interfaces.iter().map(summarize_interface).collect(),
        types: graph.types.iter().map(summarize_type).collect(),
        relations: graph.relations,
        slides,
    }
}

fn count_unplaced(relations: &[Relation], slides: &[Slide]) -> usize {
    let placed: HashSet<&Relation> = slides
        .iter()
        .flat_map(|slide| &slide.projection.relations)
        .collect();
    relations.iter().filter(|r| !placed.contains(r)).count()
}

fn summarize_interface(iface: &InterfaceNode) -> NodeSummary {
    NodeSummary {
        key: iface.key.clone(),
        display_id: display_id(&iface.package_name, &iface.key.name),
        method_count: iface.methods.len(),
    }
}

fn summarize_type(ty: &TypeNode) -> NodeSummary {
    NodeSummary {
        key: ty.key.clone(),
        display_id: display_id(&ty.package_name, &ty.key.name),
        method_count: ty.full_methods().len(),
    }
}

/// Relations grouped by interface, for writers that list implementers.
pub fn implementers_by_interface(relations: &[Relation]) -> HashMap<&NodeKey, Vec<&Relation>> {
    relations.iter().fold(HashMap::new(), |mut acc, relation| {
        acc.entry(&relation.interface_key)
            .or_insert_with(Vec::new)
            .push(relation);
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MethodSignature;

    fn close() -> MethodSignature {
        MethodSignature::new("Close", Vec::<&str>::new(), ["error"])
    }

    fn error_method() -> MethodSignature {
        MethodSignature::new("Error", Vec::<&str>::new(), ["string"])
    }

    fn model() -> SymbolModel {
        SymbolModel::new(
            vec![
                InterfaceNode::new("io", "Closer", vec![close()]),
                InterfaceNode::new("app", "Any", vec![]),
            ],
            vec![
                TypeNode::new("app", "File", vec![], vec![close()]),
                TypeNode::new("app", "Conn", vec![close()], vec![]),
                TypeNode::new("app", "NotFound", vec![error_method()], vec![]),
                TypeNode::new("app", "Plain", vec![], vec![]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_builtin_error_is_matched() {
        let report = analyze(&model(), &AnalysisOptions::default());
        assert!(report
            .relations
            .iter()
            .any(|r| r.interface_key.name == "error" && r.type_key.name == "NotFound"));
    }

    #[test]
    fn test_unrelated_nodes_are_filtered_out() {
        let report = analyze(&model(), &AnalysisOptions::default());
        assert!(report.types.iter().all(|t| t.key.name != "Plain"));
        assert!(report.interfaces.iter().all(|i| i.key.name != "Any"));
        assert_eq!(report.stats.types, 3);
        assert_eq!(report.stats.interfaces, 2);
    }

    #[test]
    fn test_stats_count_pointer_relations() {
        let report = analyze(&model(), &AnalysisOptions::default());
        assert_eq!(report.stats.relations, 3);
        assert_eq!(report.stats.pointer_relations, 1);
        assert_eq!(report.stats.slides, 1);
    }

    #[test]
    fn test_display_ids_are_listed() {
        let report = analyze(&model(), &AnalysisOptions::default());
        assert_eq!(
            report.display_id_of(&NodeKey::new("io", "Closer")),
            Some("io_Closer")
        );
        assert_eq!(report.display_id_of(&NodeKey::new("", "error")), Some("error"));
        assert_eq!(report.display_id_of(&NodeKey::new("app", "Plain")), None);
    }

    #[test]
    fn test_orphan_pruning_can_be_disabled() {
        let options = AnalysisOptions {
            partition: PartitionParams::new(3, 1),
            prune_orphans: false,
            ..AnalysisOptions::default()
        };
        let kept = analyze(&model(), &options);
        assert_eq!(kept.stats.pruned_nodes, 0);

        let pruned = analyze(
            &model(),
            &AnalysisOptions {
                prune_orphans: true,
                ..options
            },
        );
        assert!(pruned.stats.pruned_nodes > 0);
    }

    #[test]
    fn test_slides_emptied_by_pruning_are_skipped() {
        // Closer is attached to A's chunk, so B keeps nothing on its own slide.
        let model = SymbolModel::new(
            vec![InterfaceNode::new("io", "Closer", vec![close()])],
            vec![
                TypeNode::new("app", "A", vec![close()], vec![]),
                TypeNode::new("app", "B", vec![close()], vec![]),
            ],
        )
        .unwrap();
        let options = AnalysisOptions {
            partition: PartitionParams::new(3, 1),
            ..AnalysisOptions::default()
        };

        let report = analyze(&model, &options);

        assert_eq!(report.slides.len(), 1);
        assert_eq!(report.stats.slides, 1);
        assert!(report.slides.iter().all(|s| !s.projection.is_empty()));
        assert_eq!(report.slides[0].index, 0);
        assert_eq!(report.slides[0].group.title, "A");
        assert_eq!(report.stats.unplaced_relations, 1);
        assert_eq!(report.stats.pruned_nodes, 1);
    }

    #[test]
    fn test_skipped_slides_leave_contiguous_indexes() {
        let options = AnalysisOptions {
            partition: PartitionParams::new(3, 1),
            ..AnalysisOptions::default()
        };
        let report = analyze(&model(), &options);
        let indexes: Vec<usize> = report.slides.iter().map(|s| s.index).collect();
        assert_eq!(indexes, (0..report.slides.len()).collect::<Vec<_>>());
        assert_eq!(report.slides.len(), 2);
        assert_eq!(report.stats.unplaced_relations, 1);
    }

    #[test]
    fn test_keeping_orphans_keeps_every_slide() {
        let options = AnalysisOptions {
            partition: PartitionParams::new(3, 1),
            prune_orphans: false,
            ..AnalysisOptions::default()
        };
        let report = analyze(&model(), &options);
        assert_eq!(report.slides.len(), 3);
        assert_eq!(report.stats.unplaced_relations, 1);
    }

    #[test]
    fn test_empty_model() {
        let report = analyze(&SymbolModel::default(), &AnalysisOptions::default());
        assert!(report.slides.is_empty());
        assert!(report.relations.is_empty());
    }

    #[test]
    fn test_implementers_by_interface() {
        let report = analyze(&model(), &AnalysisOptions::default());
        let grouped = implementers_by_interface(&report.relations);
        assert_eq!(grouped[&NodeKey::new("io", "Closer")].len(), 2);
    }
}
