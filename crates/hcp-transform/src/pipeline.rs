//! End-to-end run over validated records.

use std::collections::HashMap;

use tracing::{info, info_span};

use hcp_model::{ChannelAffinity, ChannelAssignment, HcpRecord, SegmentedHcp};

use crate::channel::channel_affinity;
use crate::rank::rank_hcps;
use crate::segment::segment_hcps;

/// The two tables produced by one run.
///
/// `affinity` is keyed by `npi_id` and follows the rank order of `ranked`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineOutput {
    pub ranked: Vec<SegmentedHcp>,
    pub affinity: Vec<ChannelAssignment>,
}

impl PipelineOutput {
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Ranks, segments, and classifies `records`.
pub fn run_pipeline(records: Vec<HcpRecord>) -> PipelineOutput {
    let span = info_span!("pipeline", records = records.len());
    let _guard = span.enter();

    let ranked = segment_hcps(rank_hcps(records));
    let affinity = channel_affinity(ranked.iter().map(|row| &row.record));

    info!(ranked = ranked.len(), affinity = affinity.len(), "pipeline complete");
    PipelineOutput { ranked, affinity }
}

/// Pairs each ranked row with its channel, matched by `NPI Id`.
///
/// With duplicate ids the first assignment for an id is used.
pub fn join_affinity<'a>(
    ranked: &'a [SegmentedHcp],
    affinity: &[ChannelAssignment],
) -> Vec<(&'a SegmentedHcp, Option<ChannelAffinity>)> {
    let mut channels: HashMap<&str, ChannelAffinity> = HashMap::with_capacity(affinity.len());
    for assignment in affinity {
        channels
            .entry(assignment.npi_id.as_str())
            .or_insert(assignment.channel_affinity);
    }
    ranked
        .iter()
        .map(|row| (row, channels.get(row.record.npi_id.as_str()).copied()))
        .collect()
}
