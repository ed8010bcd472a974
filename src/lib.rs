// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod filter;
pub mod io;
pub mod matcher;
pub mod partition;
pub mod pipeline;

// Re-export commonly used types
pub use crate::core::{
    display_id, Error, InterfaceNode, MethodSignature, NodeKey, Origin, Relation, Result,
    SourceLocation, SymbolModel, TypeNode, TypeRef,
};

pub use crate::matcher::{
    error_interface, match_all, match_relations, ExactIdentity, MatchOptions, TypeIdentity,
};

pub use crate::filter::{FilterCriteria, FilteredGraph};

pub use crate::partition::{project, split, Group, PartitionParams, Projection};

pub use crate::pipeline::{analyze, AnalysisOptions, AnalysisReport, AnalysisStats, Slide};

pub use crate::config::{load_config, ImplmapConfig};

pub use crate::io::{create_writer, load_symbol_model, OutputFormat, OutputWriter};
