use crate::partition::{PartitionParams, DEFAULT_CHUNK_SIZE, DEFAULT_HUB_THRESHOLD};
use serde::{Deserialize, Serialize};

/// Slide partitioning thresholds
///
/// Values are signed so that zero or negative entries in a config file are
/// accepted and replaced by the defaults instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionConfig {
    #[serde(default = "default_hub_threshold")]
    pub hub_threshold: i64,

    #[serde(default = "default_chunk_size")]
    pub chunk_size: i64,

    #[serde(default = "default_prune_orphans")]
    pub prune_orphans: bool,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            hub_threshold: default_hub_threshold(),
            chunk_size: default_chunk_size(),
            prune_orphans: default_prune_orphans(),
        }
    }
}

impl PartitionConfig {
    pub fn params(&self) -> PartitionParams {
        PartitionParams::new(self.hub_threshold, self.chunk_size)
    }
}

fn default_hub_threshold() -> i64 {
    DEFAULT_HUB_THRESHOLD as i64
}
fn default_chunk_size() -> i64 {
    DEFAULT_CHUNK_SIZE as i64
}
fn default_prune_orphans() -> bool {
    true
}

/// Matcher settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            parallel: default_parallel(),
        }
    }
}

fn default_parallel() -> bool {
    true
}
