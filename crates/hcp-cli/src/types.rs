use std::path::PathBuf;

use hcp_model::{ChannelAssignment, SegmentedHcp};
use hcp_transform::PipelineOutput;

/// Everything one `rank` invocation produced.
#[derive(Debug)]
pub struct RankResult {
    /// Human-readable description of the data source.
    pub source: String,
    /// Unfiltered pipeline output.
    pub output: PipelineOutput,
    /// Ranked rows left after filtering.
    pub view: Vec<SegmentedHcp>,
    /// Affinity rows for the providers in `view`.
    pub view_affinity: Vec<ChannelAssignment>,
    pub exports: Vec<ExportSummary>,
}

impl RankResult {
    pub fn is_filtered(&self) -> bool {
        self.view.len() != self.output.ranked.len()
    }
}

#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub table: &'static str,
    pub path: PathBuf,
    pub rows: usize,
}
