//! Configuration options for data generation and pipeline runs.

use serde::{Deserialize, Serialize};

/// Seed used when no explicit seed is given.
pub const DEFAULT_SEED: u64 = 42;

/// Number of providers generated when no count is given.
pub const DEFAULT_HCP_COUNT: usize = 200;

/// Parameters for the synthetic data source.
///
/// Generation is a pure function of these two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticOptions {
    pub seed: u64,
    pub count: usize,
}

impl Default for SyntheticOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            count: DEFAULT_HCP_COUNT,
        }
    }
}

impl SyntheticOptions {
    pub fn new(seed: u64, count: usize) -> Self {
        Self { seed, count }
    }
}

/// What to do with a `writing_behavior` outside High/Medium/Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnknownBehaviorPolicy {
    /// Fail ingestion with a schema error naming the row.
    #[default]
    Reject,
    /// Score the row as `Low`.
    TreatAsLow,
    /// Drop the row before ranking.
    Exclude,
}

/// Options controlling how a source table becomes pipeline input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOptions {
    pub unknown_behavior: UnknownBehaviorPolicy,
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unknown_behavior(mut self, policy: UnknownBehaviorPolicy) -> Self {
        self.unknown_behavior = policy;
        self
    }
}
