//! Priority tier assignment.

use std::collections::BTreeMap;

use tracing::{info, info_span};

use hcp_model::{RankedHcp, Segment, SegmentedHcp};

/// Rank cut points for a table of `total` providers.
///
/// The edges are `[0, floor(0.2 * total), floor(0.5 * total), total]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentEdges {
    pub top: usize,
    pub middle: usize,
    pub total: usize,
}

impl SegmentEdges {
    pub fn for_count(total: usize) -> Self {
        Self {
            top: total / 5,
            middle: total / 2,
            total,
        }
    }

    pub fn as_array(&self) -> [usize; 4] {
        [0, self.top, self.middle, self.total]
    }

    /// Tier for a 1-based rank.
    ///
    /// The first bin includes its lower edge, so rank 1 is always
    /// [`Segment::Top`] even when `floor(0.2 * total)` is zero.
    pub fn segment_for_rank(&self, rank: usize) -> Segment {
        if rank <= self.top.max(1) {
            Segment::Top
        } else if rank <= self.middle {
            Segment::Middle
        } else {
            Segment::Bottom
        }
    }
}

/// Labels each ranked provider with its tier.
pub fn segment_hcps(ranked: Vec<RankedHcp>) -> Vec<SegmentedHcp> {
    let edges = SegmentEdges::for_count(ranked.len());
    let span = info_span!("segment", records = ranked.len(), edges = ?edges.as_array());
    let _guard = span.enter();

    let segmented: Vec<SegmentedHcp> = ranked
        .into_iter()
        .map(|row| {
            let segment = edges.segment_for_rank(row.priority_rank);
            SegmentedHcp::from_ranked(row, segment)
        })
        .collect();

    let mut counts: BTreeMap<Segment, usize> = BTreeMap::new();
    for row in &segmented {
        *counts.entry(row.segment).or_default() += 1;
    }
    info!(
        top = counts.get(&Segment::Top).copied().unwrap_or(0),
        middle = counts.get(&Segment::Middle).copied().unwrap_or(0),
        bottom = counts.get(&Segment::Bottom).copied().unwrap_or(0),
        "segmented providers"
    );
    segmented
}
