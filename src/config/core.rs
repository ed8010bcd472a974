use serde::{Deserialize, Serialize};

use super::thresholds::{MatcherConfig, PartitionConfig};
use crate::filter::FilterCriteria;
use crate::io::OutputFormat;
use crate::matcher::MatchOptions;
use crate::pipeline::AnalysisOptions;

/// Root configuration structure for implmap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ImplmapConfig {
    /// Hub threshold, chunk size and orphan pruning
    #[serde(default)]
    pub partition: Option<PartitionConfig>,

    /// Visibility and origin filtering
    #[serde(default)]
    pub filter: Option<FilterCriteria>,

    /// Matcher settings
    #[serde(default)]
    pub matcher: Option<MatcherConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: OutputFormat,
}

impl ImplmapConfig {
    pub fn partition(&self) -> PartitionConfig {
        self.partition.clone().unwrap_or_default()
    }

    pub fn filter(&self) -> FilterCriteria {
        self.filter.clone().unwrap_or_default()
    }

    pub fn matcher(&self) -> MatcherConfig {
        self.matcher.clone().unwrap_or_default()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .map(|o| o.default_format)
            .unwrap_or_default()
    }

    /// Analysis options as described by this configuration alone.
    pub fn analysis_options(&self) -> AnalysisOptions {
        let partition = self.partition();
        AnalysisOptions {
            matcher: MatchOptions {
                parallel: self.matcher().parallel,
            },
            filter: self.filter(),
            partition: partition.params(),
            prune_orphans: partition.prune_orphans,
        }
    }
}
